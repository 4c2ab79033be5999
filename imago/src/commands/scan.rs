use crate::context::AppContext;
use crate::format::{self, OutputFormat};
use crate::report;
use libimago::{discover, unique_image_tags};
use std::path::Path;

/// Handle the scan subcommand
pub async fn handle_scan(
    ctx: &AppContext,
    directory: Option<&Path>,
    exclude: Option<&str>,
    output: OutputFormat,
    concurrency: Option<usize>,
    deadline: Option<u64>,
) {
    let directory = directory
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ctx.settings.scan.directory.clone().into());
    let exclude = exclude.unwrap_or(ctx.settings.scan.exclude.as_str());

    let entries = match discover(&directory, exclude) {
        Ok(entries) => entries,
        Err(e) => {
            format::error(&e.to_string());
            std::process::exit(1);
        }
    };
    if entries.is_empty() {
        println!("No images to check.");
        return;
    }

    // Pre-flight listing; kept out of the machine-readable formats.
    if output == OutputFormat::Pretty {
        println!("Found the following unique image:tag combinations:");
        for image_tag in unique_image_tags(&entries) {
            println!("- {}", image_tag);
        }
        println!();
    }

    let checked = super::run_checks(ctx, &entries, concurrency, deadline).await;

    match report::render(&checked, output) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            format::error(&e);
            std::process::exit(1);
        }
    }
}
