//! Trawl main entry point
//!
//! This is the command-line interface for the Trawl page crawler.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use trawl::config::{load_config_with_hash, Config, OutputFormat};
use trawl::crawler::{crawl, crawl_recursive};
use trawl::report::{render_error, render_report, Report};
use trawl::TrawlError;
use tracing_subscriber::EnvFilter;

/// Trawl: a budgeted same-site page crawler
///
/// Trawl fetches a page, reports its title, word count, images and links,
/// and can follow same-site links breadth-first up to a page budget,
/// reporting averaged metrics across every page visited.
#[derive(Parser, Debug)]
#[command(name = "trawl")]
#[command(version)]
#[command(about = "A budgeted same-site page crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Report format (overrides the config file)
    #[arg(short, long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH", global = true)]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a single page
    Crawl {
        /// Page URL (must start with http)
        url: String,
    },

    /// Analyze a page and follow same-site links up to a page budget
    CrawlRecursive {
        /// Root URL (must start with http)
        url: String,

        /// Maximum number of pages to visit, root included
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        max_pages: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_configuration(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let outcome = match &cli.command {
        Command::Crawl { url } => crawl(&config, url).await.map(Report::Page),
        Command::CrawlRecursive { url, max_pages } => {
            let max_pages = max_pages.unwrap_or_else(|| i64::from(config.crawler.default_max_pages));
            crawl_recursive(&config, url, max_pages)
                .await
                .map(Report::Crawl)
        }
    };

    match outcome {
        Ok(report) => {
            let rendered = render_report(&report, &config.output)?;
            emit(&rendered, cli.output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            println!("{}", render_error(&e, config.output.pretty)?);
            Ok(exit_code(&e))
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("trawl=info,warn"),
            1 => EnvFilter::new("trawl=debug,info"),
            2 => EnvFilter::new("trawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, or the defaults when none is given
fn load_configuration(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Writes the rendered report to `path`, or stdout
fn emit(rendered: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Maps a crawl failure to a process exit code
fn exit_code(err: &TrawlError) -> ExitCode {
    if err.is_validation() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}
