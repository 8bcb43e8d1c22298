//! Per-mode outcomes and their aggregation.

use crate::error::{Result, SyncError};
use crate::mode::Mode;
use std::path::PathBuf;

/// What a successful mode did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSummary {
    pub mode: Mode,
    pub list_path: PathBuf,
    pub books: usize,
    pub notes_updated: usize,
}

/// Result of running one mode.
#[derive(Debug)]
pub struct ModeOutcome {
    pub mode: Mode,
    pub result: Result<ModeSummary>,
}

/// How a failed mode affects the modes after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Run every mode regardless of earlier failures.
    #[default]
    KeepGoing,
    /// Stop at the first failed mode.
    FailFast,
}

/// Outcomes of a multi-mode run, in execution order.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub outcomes: Vec<ModeOutcome>,
}

impl RenderReport {
    /// Run `modes` in order through `render`, honouring `policy`.
    pub fn run<F>(modes: &[Mode], policy: FailurePolicy, mut render: F) -> Self
    where
        F: FnMut(Mode) -> Result<ModeSummary>,
    {
        let mut report = RenderReport::default();

        for &mode in modes {
            let result = render(mode);
            let failed = result.is_err();
            report.outcomes.push(ModeOutcome { mode, result });

            if failed && policy == FailurePolicy::FailFast {
                log::warn!("stopping after failed {} sync", mode);
                break;
            }
        }

        report
    }

    /// Summaries of the modes that succeeded.
    pub fn successes(&self) -> impl Iterator<Item = &ModeSummary> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Collapse the report into the first failure, if any.
    ///
    /// Later failures are logged so they are not lost.
    pub fn into_result(self) -> Result<()> {
        let mut first: Option<SyncError> = None;

        for outcome in self.outcomes {
            if let Err(e) = outcome.result {
                if first.is_none() {
                    first = Some(e);
                } else {
                    log::error!("{} sync failed: {}", outcome.mode, e);
                }
            }
        }

        first.map_or(Ok(()), Err)
    }
}
