//! Exit code constants for the goodreads CLI.
//!
//! - 0: Success
//! - 1: Usage error reported by the argument parser
//! - 2: Unknown shelf mode
//! - 3: No usable configuration
//! - 4: Filesystem failure (mounts, cache, notes)
//! - 5: Feed could not be fetched or parsed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: clap rejected the command line.
pub const USAGE_ERROR: i32 = 1;

/// Mode token is neither `read` nor `want`.
pub const INVALID_MODE: i32 = 2;

/// Configuration missing, empty or malformed.
pub const CONFIG_FAILURE: i32 = 3;

/// Directory or file could not be read or written.
pub const IO_FAILURE: i32 = 4;

/// Feed request failed or returned something that is not a feed.
pub const FETCH_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USAGE_ERROR,
            INVALID_MODE,
            CONFIG_FAILURE,
            IO_FAILURE,
            FETCH_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USAGE_ERROR, 1);
    }
}
