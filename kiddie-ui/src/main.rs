use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kiddie_ui::app::{DashboardApp, ReportKind};
use kiddie_ui::config::AppConfig;
use kiddie_ui::export;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Kiddie-tax tracking dashboard for UTMA/UGMA custodial accounts.
///
/// Loads the demonstration book, prints the dashboard summary, and
/// optionally renders or exports one of the canned reports.
#[derive(Debug, Parser)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report to render.
    #[arg(long, value_enum)]
    report: Option<ReportArg>,

    /// Parent marginal rate override (percent).
    #[arg(long)]
    parent_rate: Option<Decimal>,

    /// Write the rendered report as CSV to this path.
    #[arg(long, requires = "report")]
    export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportArg {
    Threshold,
    Gains,
    Status,
    Compliance,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Threshold => Self::Threshold,
            ReportArg::Gains => Self::Gains,
            ReportArg::Status => Self::Status,
            ReportArg::Compliance => Self::Compliance,
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(rate) = cli.parent_rate {
        config.parent_rate = rate;
    }
    debug!(?config, "starting dashboard");

    let app = DashboardApp::seeded(config);
    info!("{}", app.dashboard());

    if let Some(report) = cli.report {
        let tables = app.report(report.into());
        for table in &tables {
            println!("{table}");
        }
        if let Some(path) = &cli.export {
            export::export_to_file(&tables, path)?;
        }
    }

    Ok(())
}
