//! `folio render`: write the portfolio as a static HTML document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use portfolio_site::render_site;
use portfolio_site::styles::{audit_css, site_css};
use portfolio_site::types::SiteContent;
use tracing::{info, warn};

pub const DEFAULT_OUT: &str = "dist/index.html";

/// Built-in profile unless a content file is given.
pub fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    match path {
        Some(path) => SiteContent::load(path).with_context(|| format!("loading {}", path.display())),
        None => Ok(SiteContent::builtin()),
    }
}

/// Warn about stylesheet rules that break the layout contract; returns how
/// many were found.
pub fn check_layout(css: &str) -> usize {
    let violations = audit_css(css);
    for violation in &violations {
        warn!("stylesheet: {violation}");
    }
    violations.len()
}

/// Render to `out` and return the number of bytes written.
pub fn render_to_file(content: &SiteContent, out: &Path) -> Result<usize> {
    check_layout(site_css());
    let html = render_site(content);
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(out, &html).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), bytes = html.len(), "rendered site");
    Ok(html.len())
}

pub fn run(content: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let content = load_content(content.as_deref())?;
    let out = out.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));
    let bytes = render_to_file(&content, &out)?;
    println!("wrote {} ({bytes} bytes)", out.display());
    Ok(())
}
