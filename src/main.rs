//! usaspending-report - USAspending console reports
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use usaspending_report::{HttpTransport, ReportConfig, ReportGenerator, SpendingClient};

/// Print USAspending reports for an agency
///
/// Shows new-award counts and federal accounts for one agency (DOJ by
/// default), followed by the government-wide agency reporting overview.
#[derive(Parser, Debug)]
#[command(name = "usaspending-report", version, about)]
struct Cli {
    /// Path to a report.toml configuration file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Filter directive used when `RUST_LOG` is not set.
fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    format!("usaspending_report={level}")
}

/// Route tracing output to stderr so stdout carries only the report.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Load the config file if one was given, otherwise use defaults.
fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    path.map_or_else(
        || Ok(ReportConfig::default()),
        |p| {
            ReportConfig::from_path(p)
                .with_context(|| format!("Failed to load config from '{}'", p.display()))
        },
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(cli.config.as_deref())?;
    info!(
        base_url = %config.base_url,
        agency = %config.agency_code,
        timeout_secs = config.timeout_secs,
        "starting report"
    );

    let transport = HttpTransport::new(&config).context("Failed to initialize HTTP client")?;
    let client = SpendingClient::new(transport, config.agency_code.clone());
    let generator = ReportGenerator::new(client, config.agency_label.clone());

    let mut stdout = std::io::stdout().lock();
    let summary = generator
        .run(&mut stdout)
        .await
        .context("Failed to write report")?;

    info!(
        sections = summary.outcomes.len(),
        failed = summary.failed_count(),
        "report finished"
    );

    Ok(())
}
