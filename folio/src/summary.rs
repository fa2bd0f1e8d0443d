//! End-of-run summary: terminal table, JSON report and the process exit code.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::pipeline::{PipelineOutcome, SuiteResult, SuiteStatus};

/// Exit code when every suite passed (or was skipped).
pub const EXIT_OK: u8 = 0;
/// Exit code when at least one suite failed.
pub const EXIT_FAILED: u8 = 1;
/// Exit code after Ctrl-C, as shells report SIGINT.
pub const EXIT_INTERRUPTED: u8 = 130;

pub fn exit_code(outcome: &PipelineOutcome) -> u8 {
    if outcome.interrupted {
        EXIT_INTERRUPTED
    } else if outcome.all_passed() {
        EXIT_OK
    } else {
        EXIT_FAILED
    }
}

/// Machine-readable record of a run, written with `folio test --report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub finished_at: DateTime<Utc>,
    pub passed: bool,
    pub interrupted: bool,
    pub exit_code: u8,
    pub suites: Vec<SuiteResult>,
}

impl RunReport {
    pub fn new(outcome: &PipelineOutcome) -> Self {
        RunReport {
            finished_at: Utc::now(),
            passed: outcome.all_passed(),
            interrupted: outcome.interrupted,
            exit_code: exit_code(outcome),
            suites: outcome.results.clone(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }
}

/// Plain-text table, one line per suite. Color is applied by `colored` and
/// disappears when coloring is switched off.
pub fn render_table(outcome: &PipelineOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "Test summary".bold()));
    for result in &outcome.results {
        let status = match result.status {
            SuiteStatus::Passed => "PASS".green().bold(),
            SuiteStatus::Failed => "FAIL".red().bold(),
            SuiteStatus::Skipped => "SKIP".dimmed(),
        };
        let mut line = format!(
            "  {status}  {:<14} {:>8}",
            result.suite.name(),
            format_duration(result)
        );
        if let Some(reason) = &result.reason {
            line.push_str(&format!("  {}", reason.as_str().dimmed()));
        }
        out.push_str(&line);
        out.push('\n');
    }

    let failed = outcome
        .results
        .iter()
        .filter(|r| r.status == SuiteStatus::Failed)
        .count();
    let verdict = if outcome.interrupted {
        "interrupted".yellow().bold()
    } else if failed == 0 {
        "all suites passed".green().bold()
    } else {
        format!("{failed} suite(s) failed").as_str().red().bold()
    };
    out.push_str(&format!("\n  {verdict}\n"));
    out
}

fn format_duration(result: &SuiteResult) -> String {
    if result.status == SuiteStatus::Passed || !result.duration.is_zero() {
        format!("{:.1}s", result.duration.as_secs_f64())
    } else {
        "-".to_string()
    }
}
