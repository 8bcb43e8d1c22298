//! `goodreads render` command implementation.

use super::resolve_settings;
use crate::cli::{GlobalArgs, RenderArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::feed::{FeedSource, HttpFeed};
use crate::mode::Mode;
use crate::render::{FailurePolicy, RenderReport, render_mode};
use chrono::{Local, NaiveDateTime};

/// Render every requested shelf.
///
/// Modes are validated before configuration is resolved, and configuration
/// before the workspace is checked, so bad input fails without touching the
/// network or the vault.
pub fn cmd_render(global: &GlobalArgs, args: RenderArgs) -> Result<()> {
    let modes = Mode::parse_all(&args.modes)?;
    let settings = resolve_settings(global, args.refresh)?;
    settings.workspace.prepare()?;

    let policy = if args.fail_fast {
        FailurePolicy::FailFast
    } else {
        FailurePolicy::KeepGoing
    };

    let source = HttpFeed::default();
    run(&modes, &settings, &source, Local::now().naive_local(), policy)
}

fn run(
    modes: &[Mode],
    settings: &Settings,
    source: &dyn FeedSource,
    now: NaiveDateTime,
    policy: FailurePolicy,
) -> Result<()> {
    let report = RenderReport::run(modes, policy, |mode| {
        render_mode(mode, settings, source, now)
    });

    for summary in report.successes() {
        println!(
            "{}: {} books, {} notes updated -> {}",
            summary.mode,
            summary.books,
            summary.notes_updated,
            summary.list_path.display()
        );
    }

    report.into_result()
}
