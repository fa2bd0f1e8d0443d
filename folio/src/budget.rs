//! `folio budget`: asset size limits for the production bundle.
//!
//! Walks the build output, sums file sizes per asset kind and compares each
//! sum (and the grand total) against [`BudgetConfig`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{Result, bail};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::BudgetConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Wasm,
    Js,
    Css,
    Html,
    Image,
    Other,
}

impl AssetKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "wasm" => AssetKind::Wasm,
            "js" | "mjs" => AssetKind::Js,
            "css" => AssetKind::Css,
            "html" | "htm" => AssetKind::Html,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "avif" | "svg" | "ico" => AssetKind::Image,
            _ => AssetKind::Other,
        }
    }

    fn limit_kb(self, budget: &BudgetConfig) -> Option<u64> {
        match self {
            AssetKind::Wasm => Some(budget.wasm_kb),
            AssetKind::Js => Some(budget.js_kb),
            AssetKind::Css => Some(budget.css_kb),
            AssetKind::Html => Some(budget.html_kb),
            AssetKind::Image => Some(budget.image_kb),
            AssetKind::Other => None,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetKind::Wasm => "wasm",
            AssetKind::Js => "js",
            AssetKind::Css => "css",
            AssetKind::Html => "html",
            AssetKind::Image => "image",
            AssetKind::Other => "other",
        })
    }
}

/// One row of the report; `kind == None` is the total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BudgetLine {
    pub kind: Option<AssetKind>,
    pub bytes: u64,
    pub limit_kb: Option<u64>,
}

impl BudgetLine {
    pub fn over(&self) -> bool {
        self.limit_kb.is_some_and(|kb| self.bytes > kb * 1024)
    }

    fn label(&self) -> String {
        self.kind.map_or_else(|| "total".to_string(), |k| k.to_string())
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct BudgetReport {
    pub files: usize,
    pub lines: Vec<BudgetLine>,
}

impl BudgetReport {
    pub fn within_budget(&self) -> bool {
        !self.lines.iter().any(BudgetLine::over)
    }

    pub fn line(&self, kind: AssetKind) -> Option<&BudgetLine> {
        self.lines.iter().find(|l| l.kind == Some(kind))
    }

    pub fn total(&self) -> Option<&BudgetLine> {
        self.lines.iter().find(|l| l.kind.is_none())
    }

    pub fn render(&self) -> String {
        let mut out = format!("{} ({} files)\n", "Asset budget".bold(), self.files);
        for line in &self.lines {
            let limit = line
                .limit_kb
                .map_or_else(|| "-".to_string(), |kb| format!("{kb} KiB"));
            let mark = if line.over() {
                "OVER".red().bold()
            } else {
                "ok".green()
            };
            out.push_str(&format!(
                "  {:<6} {:>10} / {:<10} {mark}\n",
                line.label(),
                format_kib(line.bytes),
                limit
            ));
        }
        out
    }
}

fn format_kib(bytes: u64) -> String {
    format!("{:.1} KiB", bytes as f64 / 1024.0)
}

/// Measure `dist` against `budget`.
pub fn check(dist: &Path, budget: &BudgetConfig) -> Result<BudgetReport> {
    if !dist.is_dir() {
        bail!(
            "build output {} not found; run the production build first",
            dist.display()
        );
    }

    let mut sizes: BTreeMap<AssetKind, u64> = BTreeMap::new();
    let mut files = 0;
    for entry in WalkDir::new(dist).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let len = entry.metadata().map(|m| m.len()).unwrap_or(0);
        let kind = AssetKind::from_path(entry.path());
        debug!(path = %entry.path().display(), %kind, len, "asset");
        *sizes.entry(kind).or_default() += len;
        files += 1;
    }

    let total: u64 = sizes.values().sum();
    let mut lines: Vec<BudgetLine> = sizes
        .into_iter()
        .map(|(kind, bytes)| BudgetLine {
            kind: Some(kind),
            bytes,
            limit_kb: kind.limit_kb(budget),
        })
        .collect();
    lines.push(BudgetLine {
        kind: None,
        bytes: total,
        limit_kb: Some(budget.total_kb),
    });

    Ok(BudgetReport { files, lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, bytes: usize) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, vec![b'x'; bytes]).unwrap();
    }

    #[test]
    fn classifies_by_extension() {
        assert_eq!(AssetKind::from_path(Path::new("app_bg.wasm")), AssetKind::Wasm);
        assert_eq!(AssetKind::from_path(Path::new("app.JS")), AssetKind::Js);
        assert_eq!(AssetKind::from_path(Path::new("img/me.webp")), AssetKind::Image);
        assert_eq!(AssetKind::from_path(Path::new("resume.pdf")), AssetKind::Other);
        assert_eq!(AssetKind::from_path(Path::new("LICENSE")), AssetKind::Other);
    }

    #[test]
    fn sums_per_kind_and_total() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "index.html", 2048);
        write(dir.path(), "app.js", 1024);
        write(dir.path(), "assets/a.png", 512);
        write(dir.path(), "assets/b.png", 512);

        let report = check(dir.path(), &BudgetConfig::default()).unwrap();
        assert_eq!(report.files, 4);
        assert_eq!(report.line(AssetKind::Html).unwrap().bytes, 2048);
        assert_eq!(report.line(AssetKind::Image).unwrap().bytes, 1024);
        assert_eq!(report.total().unwrap().bytes, 4096);
        assert!(report.line(AssetKind::Wasm).is_none());
        assert!(report.within_budget());
    }

    #[test]
    fn flags_overweight_kind() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "style.css", 3 * 1024);
        let budget = BudgetConfig {
            css_kb: 2,
            ..BudgetConfig::default()
        };

        let report = check(dir.path(), &budget).unwrap();
        assert!(!report.within_budget());
        assert!(report.line(AssetKind::Css).unwrap().over());
        assert!(!report.total().unwrap().over());

        colored::control::set_override(false);
        assert!(report.render().contains("OVER"));
    }

    #[test]
    fn other_files_only_count_toward_total() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "resume.pdf", 3 * 1024);
        let budget = BudgetConfig {
            total_kb: 2,
            ..BudgetConfig::default()
        };

        let report = check(dir.path(), &budget).unwrap();
        assert!(!report.line(AssetKind::Other).unwrap().over());
        assert!(report.total().unwrap().over());
    }

    #[test]
    fn missing_dist_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = check(&dir.path().join("dist"), &BudgetConfig::default()).unwrap_err();
        assert!(err.to_string().contains("production build"));
    }
}
