//! Process-backed [`Executor`]: each stage is a child process, the preview
//! server is a long-lived child polled over TCP until it accepts connections.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::process::{Child, Command};
use tokio::time::{Instant, sleep, timeout};
use tracing::{debug, info, warn};

use crate::config::{PreviewConfig, StepConfig};
use crate::error::HarnessError;
use crate::pipeline::{Executor, PreviewServer, StepOutcome, Suite};

const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Spawns stage commands relative to a project root.
pub struct ProcessExecutor {
    root: PathBuf,
}

impl ProcessExecutor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProcessExecutor { root: root.into() }
    }

    fn command(
        &self,
        argv: &[String],
        cwd: Option<&Path>,
        env: impl IntoIterator<Item = (String, String)>,
    ) -> Option<Command> {
        let (program, args) = argv.split_first()?;
        let mut cmd = Command::new(program);
        cmd.args(args)
            .current_dir(match cwd {
                Some(dir) => self.root.join(dir),
                None => self.root.clone(),
            })
            .envs(env)
            .stdin(Stdio::null())
            // Dropping the future (interrupt, timeout) must not leave the child behind.
            .kill_on_drop(true);
        Some(cmd)
    }
}

impl Executor for ProcessExecutor {
    type Preview = PreviewProcess;

    async fn run_step(
        &mut self,
        suite: Suite,
        step: &StepConfig,
        extra_env: &[(String, String)],
    ) -> Result<StepOutcome, HarnessError> {
        let env = step
            .env
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .chain(extra_env.iter().cloned());
        let mut cmd = self
            .command(&step.command, step.cwd.as_deref(), env)
            .ok_or(HarnessError::EmptyCommand { suite })?;

        let mut child = cmd.spawn().map_err(|source| HarnessError::Spawn {
            what: suite.to_string(),
            program: step.command[0].clone(),
            source,
        })?;
        debug!(%suite, pid = child.id(), "spawned");

        let status = match step.timeout_secs {
            Some(secs) => match timeout(Duration::from_secs(secs), child.wait()).await {
                Ok(status) => status,
                Err(_) => {
                    let _ = child.kill().await;
                    return Err(HarnessError::Timeout { suite, secs });
                }
            },
            None => child.wait().await,
        }
        .map_err(|source| HarnessError::Wait {
            what: suite.to_string(),
            source,
        })?;

        Ok(StepOutcome {
            success: status.success(),
            code: status.code(),
        })
    }

    async fn start_preview(&mut self, preview: &PreviewConfig) -> Result<PreviewProcess, HarnessError> {
        let env = preview.env.iter().map(|(k, v)| (k.clone(), v.clone()));
        let mut cmd = self
            .command(&preview.command, preview.cwd.as_deref(), env)
            .ok_or(HarnessError::EmptyPreviewCommand)?;

        let mut child = cmd.spawn().map_err(|source| HarnessError::Spawn {
            what: "preview server".to_string(),
            program: preview.command[0].clone(),
            source,
        })?;

        let addr = preview.addr();
        let deadline = Instant::now() + Duration::from_secs(preview.startup_timeout_secs);
        loop {
            if let Some(status) = child.try_wait().map_err(|source| HarnessError::Wait {
                what: "preview server".to_string(),
                source,
            })? {
                return Err(HarnessError::PreviewExited {
                    status: status.to_string(),
                });
            }
            if accepts_connections(&addr).await {
                break;
            }
            if Instant::now() >= deadline {
                let _ = child.kill().await;
                return Err(HarnessError::PreviewTimeout {
                    addr,
                    secs: preview.startup_timeout_secs,
                });
            }
            sleep(READY_POLL_INTERVAL).await;
        }

        info!(addr = %addr, pid = child.id(), "preview server accepting connections");
        Ok(PreviewProcess {
            child,
            url: preview.url(),
        })
    }
}

/// Handle to the spawned preview server.
pub struct PreviewProcess {
    child: Child,
    url: String,
}

impl PreviewServer for PreviewProcess {
    fn url(&self) -> &str {
        &self.url
    }

    async fn shutdown(mut self) {
        if let Err(e) = self.child.kill().await {
            warn!("failed to stop preview server: {e}");
        }
    }
}

/// One bounded connection attempt. A SYN into a filtered port can hang far
/// past the startup deadline, so each attempt gets a single poll interval.
async fn accepts_connections(addr: &str) -> bool {
    matches!(
        timeout(READY_POLL_INTERVAL, TcpStream::connect(addr)).await,
        Ok(Ok(_))
    )
}
