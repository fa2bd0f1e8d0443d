//! Pipeline configuration.
//!
//! Loads optional `.folio/pipeline.toml` from the project root. Every table is
//! optional; a missing table keeps the built-in default for that stage.
//!
//! ```toml
//! [build]
//! command = ["trunk", "build", "--release"]
//! cwd = "web"
//!
//! [preview]
//! command = ["trunk", "serve", "--release", "--port", "4173"]
//! cwd = "web"
//! port = 4173
//!
//! [visual]
//! command = ["cargo", "run", "-q", "-p", "folio", "--", "snapshot"]
//! timeout_secs = 300
//!
//! [budget]
//! wasm_kb = 800
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::HarnessError;
use crate::pipeline::Suite;

/// Default location of the config file, relative to the project root.
pub const CONFIG_PATH: &str = ".folio/pipeline.toml";

fn default_true() -> bool {
    true
}

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// One pipeline stage: an argv command plus where and how to run it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    /// Program and arguments, e.g. `["cargo", "test"]`
    pub command: Vec<String>,
    /// Working directory, relative to the project root
    #[serde(default)]
    pub cwd: Option<PathBuf>,
    /// Extra environment variables
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    /// Disabled stages are reported as skipped and count as passed
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Kill the stage and fail it after this many seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl StepConfig {
    pub fn new(command: &[&str]) -> Self {
        StepConfig {
            command: argv(command),
            cwd: None,
            env: BTreeMap::new(),
            enabled: true,
            timeout_secs: None,
        }
    }

    pub fn in_dir(mut self, cwd: &str) -> Self {
        self.cwd = Some(PathBuf::from(cwd));
        self
    }

    /// Human-readable command line for logs.
    pub fn display_command(&self) -> String {
        self.command.join(" ")
    }
}

/// The preview server started between the build and the browser-facing suites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub command: Vec<String>,
    #[serde(default)]
    pub cwd: Option<PathBuf>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// How long to wait for the port to accept connections
    #[serde(default = "default_startup_timeout")]
    pub startup_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4173
}

fn default_startup_timeout() -> u64 {
    60
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            command: argv(&["trunk", "serve", "--release", "--port", "4173"]),
            cwd: Some(PathBuf::from("web")),
            env: BTreeMap::new(),
            enabled: true,
            host: default_host(),
            port: default_port(),
            startup_timeout_secs: default_startup_timeout(),
        }
    }
}

impl PreviewConfig {
    /// `host:port` polled until the preview server accepts connections.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL handed to the dependent suites as `PREVIEW_URL`.
    pub fn url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }
}

/// Size limits for the production bundle, in KiB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    pub wasm_kb: u64,
    pub js_kb: u64,
    pub css_kb: u64,
    pub html_kb: u64,
    pub image_kb: u64,
    pub total_kb: u64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        BudgetConfig {
            wasm_kb: 1024,
            js_kb: 150,
            css_kb: 60,
            html_kb: 100,
            image_kb: 1500,
            total_kb: 2500,
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub unit: StepConfig,
    pub integration: StepConfig,
    pub build: StepConfig,
    pub preview: PreviewConfig,
    pub accessibility: StepConfig,
    pub performance: StepConfig,
    pub e2e: StepConfig,
    pub visual: StepConfig,
    pub budget: BudgetConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            unit: StepConfig::new(&["cargo", "test", "--workspace", "--lib"]),
            integration: StepConfig::new(&["cargo", "test", "--workspace", "--test", "*"]),
            build: StepConfig::new(&["trunk", "build", "--release"]).in_dir("web"),
            preview: PreviewConfig::default(),
            accessibility: StepConfig::new(&[
                "cargo", "test", "-p", "portfolio-site", "--test", "accessibility",
            ]),
            performance: StepConfig::new(&[
                "cargo", "run", "-q", "-p", "folio", "--", "budget", "--dist", "web/dist",
            ]),
            e2e: StepConfig::new(&[
                "cargo", "test", "-p", "portfolio-site", "--test", "responsive_layout",
            ]),
            visual: StepConfig::new(&["cargo", "run", "-q", "-p", "folio", "--", "snapshot"]),
            budget: BudgetConfig::default(),
        }
    }
}

impl HarnessConfig {
    /// Load `.folio/pipeline.toml` under `root`.
    /// Returns the default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_PATH);
        if !path.exists() {
            debug!(path = %path.display(), "no pipeline config, using defaults");
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using default pipeline");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Unlike [`HarnessConfig::load`] this
    /// fails when the file is missing or malformed.
    pub fn load_from_path(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| HarnessError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Stage config for a suite.
    pub fn step(&self, suite: Suite) -> &StepConfig {
        match suite {
            Suite::Unit => &self.unit,
            Suite::Integration => &self.integration,
            Suite::Build => &self.build,
            Suite::Accessibility => &self.accessibility,
            Suite::Performance => &self.performance,
            Suite::E2e => &self.e2e,
            Suite::Visual => &self.visual,
        }
    }

    pub fn step_mut(&mut self, suite: Suite) -> &mut StepConfig {
        match suite {
            Suite::Unit => &mut self.unit,
            Suite::Integration => &mut self.integration,
            Suite::Build => &mut self.build,
            Suite::Accessibility => &mut self.accessibility,
            Suite::Performance => &mut self.performance,
            Suite::E2e => &mut self.e2e,
            Suite::Visual => &mut self.visual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) {
        let folder = dir.path().join(".folio");
        std::fs::create_dir_all(&folder).unwrap();
        let mut file = std::fs::File::create(folder.join("pipeline.toml")).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(HarnessConfig::load(dir.path()), HarnessConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[build]
command = ["make", "dist"]
timeout_secs = 600

[preview]
command = ["python3", "-m", "http.server", "9000"]
port = 9000

[budget]
wasm_kb = 800
"#,
        );
        let config = HarnessConfig::load(dir.path());

        assert_eq!(config.build.command, vec!["make", "dist"]);
        assert_eq!(config.build.timeout_secs, Some(600));
        assert!(config.build.enabled);
        assert_eq!(config.preview.port, 9000);
        assert_eq!(config.preview.host, "127.0.0.1");
        assert_eq!(config.preview.url(), "http://127.0.0.1:9000/");
        assert_eq!(config.budget.wasm_kb, 800);
        assert_eq!(config.budget.css_kb, 60);
        assert_eq!(config.unit, HarnessConfig::default().unit);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[build\ncommand = ");
        assert_eq!(HarnessConfig::load(dir.path()), HarnessConfig::default());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = HarnessConfig::load_from_path(Path::new("/nope/pipeline.toml")).unwrap_err();
        assert!(matches!(err, HarnessError::ConfigRead { .. }));
    }

    #[test]
    fn disabled_stage_parses() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[visual]\ncommand = [\"true\"]\nenabled = false\n");
        let config = HarnessConfig::load(dir.path());
        assert!(!config.step(Suite::Visual).enabled);
    }
}
