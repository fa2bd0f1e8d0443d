//! Test orchestration.
//!
//! Stage order:
//!
//! ```text
//! unit → integration → build ─┬─ preview server ─┬─ accessibility
//!                             │                  ├─ performance
//!                             │                  ├─ e2e
//!                             │                  └─ visual
//!                             └─ (build failed) → dependent suites fail, not run
//! ```
//!
//! Unit and integration always run. The four dependent suites need a
//! production build and a running preview server; if either is missing they
//! are recorded as failed with the reason instead of being run. Cancelling the
//! token stops the run, shuts the preview server down and returns what has
//! been recorded so far.

use std::collections::BTreeSet;
use std::fmt;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::{HarnessConfig, PreviewConfig, StepConfig};
use crate::error::HarnessError;

/// Environment variable carrying the preview server URL to dependent suites.
pub const PREVIEW_URL_ENV: &str = "PREVIEW_URL";

pub const BUILD_FAILED_REASON: &str = "skipped: production build failed";
pub const PREVIEW_FAILED_REASON: &str = "skipped: preview server did not start";

/// A stage of the pipeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Suite {
    Unit,
    Integration,
    Build,
    Accessibility,
    Performance,
    E2e,
    Visual,
}

impl Suite {
    /// Suites that need the production build and the preview server.
    pub const DEPENDENT: [Suite; 4] = [
        Suite::Accessibility,
        Suite::Performance,
        Suite::E2e,
        Suite::Visual,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Suite::Unit => "unit",
            Suite::Integration => "integration",
            Suite::Build => "build",
            Suite::Accessibility => "accessibility",
            Suite::Performance => "performance",
            Suite::E2e => "e2e",
            Suite::Visual => "visual",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteStatus {
    Passed,
    Failed,
    /// Disabled or deselected; does not fail the run.
    Skipped,
}

/// Result of one suite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuiteResult {
    pub suite: Suite,
    pub status: SuiteStatus,
    #[serde(with = "duration_ms")]
    pub duration: Duration,
    pub reason: Option<String>,
}

impl SuiteResult {
    fn new(suite: Suite, status: SuiteStatus, duration: Duration, reason: Option<String>) -> Self {
        SuiteResult {
            suite,
            status,
            duration,
            reason,
        }
    }

    pub fn passed(&self) -> bool {
        self.status != SuiteStatus::Failed
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

/// How a stage process finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub success: bool,
    pub code: Option<i32>,
}

impl StepOutcome {
    pub fn reason(self) -> Option<String> {
        if self.success {
            return None;
        }
        Some(match self.code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        })
    }
}

/// A running preview server.
#[allow(async_fn_in_trait)]
pub trait PreviewServer {
    fn url(&self) -> &str;

    /// Stop the server. Best effort: failures are logged, not returned.
    async fn shutdown(self);
}

/// Runs stage commands. The production implementation spawns processes,
/// tests script the outcomes.
#[allow(async_fn_in_trait)]
pub trait Executor {
    type Preview: PreviewServer;

    async fn run_step(
        &mut self,
        suite: Suite,
        step: &StepConfig,
        extra_env: &[(String, String)],
    ) -> Result<StepOutcome, HarnessError>;

    async fn start_preview(&mut self, preview: &PreviewConfig) -> Result<Self::Preview, HarnessError>;
}

/// Per-run switches.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Suites deselected on the command line
    pub skip: BTreeSet<Suite>,
}

/// Everything a run produced.
#[derive(Clone, Debug, Default)]
pub struct PipelineOutcome {
    pub results: Vec<SuiteResult>,
    pub interrupted: bool,
}

impl PipelineOutcome {
    pub fn all_passed(&self) -> bool {
        !self.interrupted && self.results.iter().all(SuiteResult::passed)
    }

    pub fn result(&self, suite: Suite) -> Option<&SuiteResult> {
        self.results.iter().find(|r| r.suite == suite)
    }
}

struct Interrupted;

/// Run the whole pipeline.
pub async fn run_pipeline<E: Executor>(
    executor: &mut E,
    config: &HarnessConfig,
    options: &RunOptions,
    cancel: &CancellationToken,
) -> PipelineOutcome {
    let mut outcome = PipelineOutcome::default();
    if drive(executor, config, options, cancel, &mut outcome.results)
        .await
        .is_err()
    {
        warn!("pipeline interrupted");
        outcome.interrupted = true;
    }
    outcome.results.sort_by_key(|r| r.suite);
    outcome
}

async fn drive<E: Executor>(
    executor: &mut E,
    config: &HarnessConfig,
    options: &RunOptions,
    cancel: &CancellationToken,
    results: &mut Vec<SuiteResult>,
) -> Result<(), Interrupted> {
    for suite in [Suite::Unit, Suite::Integration] {
        let result = run_suite(executor, config, options, cancel, suite, &[]).await?;
        results.push(result);
    }

    let build = run_suite(executor, config, options, cancel, Suite::Build, &[]).await?;
    let build_ok = build.passed();
    results.push(build);

    let pending: Vec<Suite> = Suite::DEPENDENT
        .into_iter()
        .filter(|s| {
            if is_selected(config, options, *s) {
                true
            } else {
                results.push(skipped(*s));
                false
            }
        })
        .collect();

    if !build_ok {
        error!("production build failed; skipping {} dependent suite(s)", pending.len());
        results.extend(pending.into_iter().map(|s| failed_without_run(s, BUILD_FAILED_REASON)));
        return Ok(());
    }
    if pending.is_empty() {
        return Ok(());
    }

    let mut preview = None;
    let mut env = Vec::new();
    if config.preview.enabled {
        info!(command = %config.preview.command.join(" "), "starting preview server");
        let started = tokio::select! {
            _ = cancel.cancelled() => return Err(Interrupted),
            started = executor.start_preview(&config.preview) => started,
        };
        match started {
            Ok(server) => {
                info!(url = server.url(), "preview server ready");
                env.push((PREVIEW_URL_ENV.to_string(), server.url().to_string()));
                preview = Some(server);
            }
            Err(e) => {
                error!("{e}");
                results.extend(
                    pending
                        .into_iter()
                        .map(|s| failed_without_run(s, PREVIEW_FAILED_REASON)),
                );
                return Ok(());
            }
        }
    }

    let mut interrupted = false;
    for suite in pending {
        match run_suite(executor, config, options, cancel, suite, &env).await {
            Ok(result) => results.push(result),
            Err(Interrupted) => {
                interrupted = true;
                break;
            }
        }
    }

    if let Some(server) = preview {
        info!("stopping preview server");
        server.shutdown().await;
    }

    if interrupted { Err(Interrupted) } else { Ok(()) }
}

fn is_selected(config: &HarnessConfig, options: &RunOptions, suite: Suite) -> bool {
    config.step(suite).enabled && !options.skip.contains(&suite)
}

fn skipped(suite: Suite) -> SuiteResult {
    SuiteResult::new(suite, SuiteStatus::Skipped, Duration::ZERO, None)
}

fn failed_without_run(suite: Suite, reason: &str) -> SuiteResult {
    SuiteResult::new(
        suite,
        SuiteStatus::Failed,
        Duration::ZERO,
        Some(reason.to_string()),
    )
}

async fn run_suite<E: Executor>(
    executor: &mut E,
    config: &HarnessConfig,
    options: &RunOptions,
    cancel: &CancellationToken,
    suite: Suite,
    env: &[(String, String)],
) -> Result<SuiteResult, Interrupted> {
    if !is_selected(config, options, suite) {
        info!(%suite, "skipped");
        return Ok(skipped(suite));
    }

    let step = config.step(suite);
    info!(%suite, command = %step.display_command(), "running");
    let started = Instant::now();

    let finished = tokio::select! {
        _ = cancel.cancelled() => return Err(Interrupted),
        finished = executor.run_step(suite, step, env) => finished,
    };
    let duration = started.elapsed();

    let result = match finished {
        Ok(outcome) if outcome.success => {
            SuiteResult::new(suite, SuiteStatus::Passed, duration, None)
        }
        Ok(outcome) => SuiteResult::new(suite, SuiteStatus::Failed, duration, outcome.reason()),
        Err(e) => SuiteResult::new(suite, SuiteStatus::Failed, duration, Some(e.to_string())),
    };
    match result.status {
        SuiteStatus::Failed => warn!(
            %suite,
            reason = result.reason.as_deref().unwrap_or(""),
            "failed"
        ),
        _ => info!(%suite, elapsed_ms = duration.as_millis() as u64, "passed"),
    }
    Ok(result)
}
