use crate::context::AppContext;
use crate::format::{self, OutputFormat};
use crate::report;
use libimago::ImageEntry;

/// Handle the check subcommand (a single ad-hoc image reference)
pub async fn handle_check(ctx: &AppContext, image: &str, output: OutputFormat) {
    if output == OutputFormat::Pretty {
        println!("Checking a single image: {}", image);
    }

    let entries = vec![ImageEntry::new("N/A", image, None)];
    let checked = super::run_checks(ctx, &entries, None, None).await;

    match report::render(&checked, output) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            format::error(&e);
            std::process::exit(1);
        }
    }
}
