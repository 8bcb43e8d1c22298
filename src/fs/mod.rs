//! Filesystem utilities.
//!
//! Notes and cache files are written atomically so an interrupted sync never
//! leaves a half-written note in the user's vault.

pub mod atomic;

pub use atomic::atomic_write_file;
