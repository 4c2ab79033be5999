use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod context;
mod format;
mod report;
mod version;

/// Imago - Container Image Availability Auditor
///
/// A CLI tool for auditing container images declared in configuration files
/// against live registry state.
#[derive(Parser, Debug)]
#[command(name = "imago")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    /// Path to a settings file (YAML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// GitHub personal access token for ghcr.io lookups
    #[arg(
        short = 'g',
        long,
        global = true,
        env = "GITHUB_TOKEN",
        hide_env_values = true
    )]
    github_token: Option<String>,

    /// Codeberg API token for codeberg.org lookups
    #[arg(
        short = 'c',
        long,
        global = true,
        env = "CODEBERG_TOKEN",
        hide_env_values = true
    )]
    codeberg_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan configuration files and audit every referenced image
    Scan {
        /// Directory to scan for JSON configuration files
        #[arg(short, long)]
        directory: Option<PathBuf>,

        /// File name to exclude from the scan
        #[arg(long)]
        exclude: Option<String>,

        /// Output format: pretty, json, yaml, markdown
        #[arg(short, long, default_value = "pretty")]
        output: String,

        /// Maximum number of concurrent registry lookups
        #[arg(long)]
        concurrency: Option<usize>,

        /// Abort lookups still in flight after this many seconds
        #[arg(long)]
        deadline: Option<u64>,
    },
    /// Check a single image reference
    Check {
        /// Image reference (e.g. ubuntu:20.04 or ghcr.io/org/app:v2)
        image: String,

        /// Output format: pretty, json, yaml, markdown
        #[arg(short, long, default_value = "pretty")]
        output: String,
    },
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let ctx = context::AppContext::build(
        cli.config.as_deref(),
        format::ColorChoice::from(cli.color.as_str()),
        cli.github_token,
        cli.codeberg_token,
    );

    match cli.command {
        Commands::Scan {
            directory,
            exclude,
            output,
            concurrency,
            deadline,
        } => {
            let fmt = format::OutputFormat::from(output.as_str());
            commands::scan::handle_scan(
                &ctx,
                directory.as_deref(),
                exclude.as_deref(),
                fmt,
                concurrency,
                deadline,
            )
            .await;
        }
        Commands::Check { image, output } => {
            let fmt = format::OutputFormat::from(output.as_str());
            commands::check::handle_check(&ctx, &image, fmt).await;
        }
        Commands::Version => {
            version::print_version();
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}

/// Lookup warnings always show; -v raises the level to info, -vv to debug
/// (which includes the registry API URLs being queried).
fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
