use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pipeline::Suite;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Portfolio site tooling: static render, asset budgets, visual snapshots, test pipeline")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the site to a static HTML file
    Render {
        /// Site content JSON (defaults to the built-in profile)
        #[arg(long)]
        content: Option<PathBuf>,
        /// Output file [default: dist/index.html]
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Check the production bundle against the asset size budget
    Budget {
        /// Build output directory
        #[arg(long, default_value = "dist")]
        dist: PathBuf,
        /// Project root holding .folio/pipeline.toml
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Explicit config file (must exist)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compare rendered sections against the visual snapshot baseline
    Snapshot {
        /// Site content JSON (defaults to the built-in profile)
        #[arg(long)]
        content: Option<PathBuf>,
        /// Baseline file [default: snapshots/visual.json]
        #[arg(long)]
        baseline: Option<PathBuf>,
        /// Rewrite the baseline instead of comparing
        #[arg(long)]
        update: bool,
    },

    /// Run the full test pipeline
    Test {
        /// Project root; stage working directories are relative to it
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Explicit config file (must exist)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write a JSON run report here
        #[arg(long)]
        report: Option<PathBuf>,
        /// Deselect a suite (repeatable)
        #[arg(long, value_enum)]
        skip: Vec<Suite>,
    },
}
