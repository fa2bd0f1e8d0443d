use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::Suite;

/// Errors raised by the harness itself (not by the suites it runs).
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{suite} has an empty command")]
    EmptyCommand { suite: Suite },
    #[error("preview server has an empty command")]
    EmptyPreviewCommand,
    #[error("failed to spawn `{program}` for {what}: {source}")]
    Spawn {
        what: String,
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to wait for {what}: {source}")]
    Wait {
        what: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{suite} timed out after {secs}s")]
    Timeout { suite: Suite, secs: u64 },
    #[error("preview server exited before accepting connections ({status})")]
    PreviewExited { status: String },
    #[error("preview server not reachable at {addr} after {secs}s")]
    PreviewTimeout { addr: String, secs: u64 },
}
