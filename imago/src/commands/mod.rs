use crate::context::AppContext;
use crate::format;
use libimago::{CheckOptions, CheckedImage, Client, ImageEntry, Resolver, check_all};
use std::time::Duration;

pub mod check;
pub mod scan;

/// Runs the concurrent availability checks with a progress spinner.
///
/// Scheduling limits come from the CLI flags when given, falling back to
/// the settings file.
pub(crate) async fn run_checks(
    ctx: &AppContext,
    entries: &[ImageEntry],
    concurrency: Option<usize>,
    deadline: Option<u64>,
) -> Vec<CheckedImage> {
    let client = match Client::new() {
        Ok(client) => client,
        Err(e) => {
            format::error(&e.to_string());
            std::process::exit(1);
        }
    };
    let resolver = Resolver::new(client, ctx.credentials.clone());
    let options = CheckOptions {
        concurrency: concurrency.unwrap_or(ctx.settings.network.concurrency),
        deadline: deadline
            .or(ctx.settings.network.deadline)
            .map(Duration::from_secs),
    };

    let formatter = format::create_formatter();
    let spinner = formatter.spinner(&format!("Checking {} image references...", entries.len()));
    let checked = check_all(&resolver, entries, &options).await;
    formatter.finish_progress(spinner, &format!("Checked {} image references", checked.len()));
    checked
}
