//! `folio snapshot`: visual regression check on rendered markup.
//!
//! Every section the content fills is rendered on its own and hashed with SHA-256. The digests
//! are compared against a JSON baseline; the first run (or `--update`) writes
//! the baseline instead of comparing.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use portfolio_site::render_section;
use portfolio_site::types::SiteContent;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

pub const DEFAULT_BASELINE: &str = "snapshots/visual.json";

/// Section anchor -> hex digest of its markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baseline {
    pub sections: BTreeMap<String, String>,
}

impl Baseline {
    pub fn capture(content: &SiteContent) -> Self {
        let sections = content
            .sections()
            .into_iter()
            .map(|section| {
                let digest = Sha256::digest(render_section(content, section).as_bytes());
                (section.anchor().to_string(), format!("{digest:x}"))
            })
            .collect();
        Baseline { sections }
    }

    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading baseline {}", path.display()))?;
        let baseline = serde_json::from_str(&raw)
            .with_context(|| format!("parsing baseline {}", path.display()))?;
        Ok(Some(baseline))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json + "\n")
            .with_context(|| format!("writing baseline {}", path.display()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub changed: Vec<String>,
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl SnapshotDiff {
    pub fn between(baseline: &Baseline, current: &Baseline) -> Self {
        let mut diff = SnapshotDiff::default();
        for (name, digest) in &current.sections {
            match baseline.sections.get(name) {
                Some(old) if old != digest => diff.changed.push(name.clone()),
                Some(_) => {}
                None => diff.added.push(name.clone()),
            }
        }
        diff.removed = baseline
            .sections
            .keys()
            .filter(|name| !current.sections.contains_key(*name))
            .cloned()
            .collect();
        diff
    }

    pub fn is_clean(&self) -> bool {
        self.changed.is_empty() && self.added.is_empty() && self.removed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// Baseline written (first run or `--update`).
    Recorded { sections: usize },
    Matched { sections: usize },
    Mismatch(SnapshotDiff),
}

pub fn run(content: &SiteContent, baseline_path: &Path, update: bool) -> Result<SnapshotOutcome> {
    let current = Baseline::capture(content);
    let existing = if update { None } else { Baseline::load(baseline_path)? };

    let Some(baseline) = existing else {
        current.save(baseline_path)?;
        info!(path = %baseline_path.display(), "snapshot baseline recorded");
        return Ok(SnapshotOutcome::Recorded {
            sections: current.sections.len(),
        });
    };

    let diff = SnapshotDiff::between(&baseline, &current);
    if diff.is_clean() {
        Ok(SnapshotOutcome::Matched {
            sections: current.sections.len(),
        })
    } else {
        Ok(SnapshotOutcome::Mismatch(diff))
    }
}
