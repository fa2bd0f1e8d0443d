//! # folio
//!
//! Command-line tooling around `portfolio-site`:
//!
//! - `folio render` - static HTML export
//! - `folio budget` - asset size budget for the production bundle
//! - `folio snapshot` - visual regression check on rendered sections
//! - `folio test` - the full pipeline: unit, integration, production build,
//!   preview server, then accessibility, performance, e2e and visual suites
//!
//! Exit codes of `folio test`: 0 all green, 1 any failure, 130 interrupted.

pub mod args;
pub mod budget;
pub mod config;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod render;
pub mod snapshot;
pub mod summary;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use args::{Cli, Command};
use config::HarnessConfig;
use executor::ProcessExecutor;
use pipeline::{RunOptions, Suite, run_pipeline};
use snapshot::SnapshotOutcome;

pub use error::HarnessError;

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Render { content, out } => {
            render::run(content, out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Budget { dist, root, config } => {
            let config = load_config(&root, config.as_deref())?;
            let report = budget::check(&dist, &config.budget)?;
            print!("{}", report.render());
            if report.within_budget() {
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("{}", "asset budget exceeded".red().bold());
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Snapshot {
            content,
            baseline,
            update,
        } => {
            let content = render::load_content(content.as_deref())?;
            let baseline = baseline.unwrap_or_else(|| PathBuf::from(snapshot::DEFAULT_BASELINE));
            Ok(report_snapshot(snapshot::run(&content, &baseline, update)?, &baseline))
        }
        Command::Test {
            root,
            config,
            report,
            skip,
        } => run_tests(&root, config.as_deref(), report.as_deref(), skip).await,
    }
}

fn load_config(root: &Path, explicit: Option<&Path>) -> Result<HarnessConfig> {
    Ok(match explicit {
        Some(path) => HarnessConfig::load_from_path(path)?,
        None => HarnessConfig::load(root),
    })
}

fn report_snapshot(outcome: SnapshotOutcome, baseline: &Path) -> ExitCode {
    match outcome {
        SnapshotOutcome::Recorded { sections } => {
            println!("recorded {sections} section snapshot(s) in {}", baseline.display());
            ExitCode::SUCCESS
        }
        SnapshotOutcome::Matched { sections } => {
            println!("{} {sections} section(s) match the baseline", "ok".green().bold());
            ExitCode::SUCCESS
        }
        SnapshotOutcome::Mismatch(diff) => {
            for name in &diff.changed {
                println!("  {} {name}", "changed".red().bold());
            }
            for name in &diff.added {
                println!("  {} {name}", "added".yellow().bold());
            }
            for name in &diff.removed {
                println!("  {} {name}", "removed".yellow().bold());
            }
            eprintln!("visual snapshot mismatch; rerun with --update to accept");
            ExitCode::FAILURE
        }
    }
}

async fn run_tests(
    root: &Path,
    config: Option<&Path>,
    report: Option<&Path>,
    skip: Vec<Suite>,
) -> Result<ExitCode> {
    let config = load_config(root, config)?;
    let options = RunOptions {
        skip: skip.into_iter().collect(),
    };

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    let signal = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, cleaning up");
            on_signal.cancel();
        }
    });

    let mut executor = ProcessExecutor::new(root);
    let outcome = run_pipeline(&mut executor, &config, &options, &cancel).await;
    signal.abort();

    print!("{}", summary::render_table(&outcome));
    if let Some(path) = report {
        summary::RunReport::new(&outcome).write(path)?;
        info!(path = %path.display(), "run report written");
    }
    Ok(ExitCode::from(summary::exit_code(&outcome)))
}
