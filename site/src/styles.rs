//! CSS for the portfolio.
//!
//! The stylesheet is generated once from the constants in [`crate::layout`],
//! so the media queries use exactly the breakpoints the layout audits check.
//!
//! ```rust
//! use portfolio_site::styles::site_css;
//!
//! assert!(site_css().contains("@media (min-width: 768px)"));
//! ```

use once_cell::sync::Lazy;

use crate::layout::{
    Breakpoint, DESKTOP_MIN_WIDTH, GRID_GAP_PX, LayoutViolation, MIN_FONT_SIZE_PX,
    MIN_LINE_HEIGHT, MIN_TOUCH_TARGET, TABLET_MIN_WIDTH, TargetBox, Viewport, audit_font_size,
    audit_line_height, audit_touch_targets,
};

static SITE_CSS: Lazy<String> = Lazy::new(build_css);

/// The complete stylesheet.
pub fn site_css() -> &'static str {
    SITE_CSS.as_str()
}

/// Overrides for visitors without scripts. No `load` event ever fires there,
/// so images would stay transparent under the skeleton.
pub const NOSCRIPT_CSS: &str = ".hero-image img, .project-image img { opacity: 1 !important; }
.image-skeleton { display: none; }
";

const BASE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-alt: #f5f7fa;
    --text: #1f2933;
    --text-dim: #52606d;
    --accent: #007bff;
    --accent-dark: #0056b3;
    --border: #e4e7eb;
    --radius: 12px;
    --container-max: 1100px;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    * { transition: none !important; animation: none !important; }
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--text);
    background: var(--bg);
}

img {
    max-width: 100%;
    display: block;
}

a {
    color: var(--accent);
}

a:focus-visible, button:focus-visible, input:focus-visible, textarea:focus-visible {
    outline: 3px solid var(--accent);
    outline-offset: 2px;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 20px;
}

.skip-link {
    position: absolute;
    left: -9999px;
    top: 8px;
    padding: 12px 16px;
    background: var(--accent);
    color: #fff;
    z-index: 100;
}

.skip-link:focus {
    left: 8px;
}

/* Header / navigation */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.95);
    border-bottom: 1px solid var(--border);
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    flex-wrap: wrap;
    padding: 8px 20px;
    max-width: var(--container-max);
    margin: 0 auto;
}

.nav-brand {
    font-weight: 700;
    font-size: 1.25rem;
    color: var(--text);
    text-decoration: none;
}

.nav-toggle {
    align-items: center;
    justify-content: center;
    background: transparent;
    border: 1px solid var(--border);
    border-radius: 8px;
    cursor: pointer;
}

.nav-toggle-bar {
    display: block;
    width: 20px;
    height: 2px;
    margin: 4px 0;
    background: var(--text);
}

.nav-links {
    list-style: none;
    margin: 0;
    padding: 0;
    gap: 8px;
}

.nav-link {
    display: flex;
    align-items: center;
    padding: 0 12px;
    color: var(--text);
    text-decoration: none;
    border-radius: 8px;
}

.nav-link:hover {
    background: var(--bg-alt);
}

/* Main */
main:focus {
    outline: none;
}

.section {
    padding: 64px 0;
}

.section:nth-of-type(even) {
    background: var(--bg-alt);
}

.section-title {
    font-size: 2rem;
    margin: 0 0 24px;
}

/* Hero */
.hero-grid {
    display: grid;
    gap: 32px;
    align-items: center;
}

.hero-title {
    font-size: 2.5rem;
    margin: 0 0 8px;
}

.hero-headline {
    font-size: 1.25rem;
    color: var(--accent);
    margin: 0 0 16px;
}

.hero-tagline {
    color: var(--text-dim);
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 12px;
    margin-top: 24px;
}

.hero-image {
    position: relative;
    width: 100%;
    max-width: 360px;
    aspect-ratio: 1 / 1;
    margin: 0 auto;
    border-radius: 50%;
    overflow: hidden;
}

.hero-image img,
.project-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.project-image {
    position: relative;
    width: 100%;
    aspect-ratio: 16 / 9;
    margin-bottom: 1rem;
    border-radius: 8px;
    overflow: hidden;
    background: #e4e7eb;
}

.image-skeleton {
    position: absolute;
    inset: 0;
    background: linear-gradient(90deg, #e4e7eb 25%, #f5f7fa 50%, #e4e7eb 75%);
    background-size: 200% 100%;
    animation: skeleton-shimmer 1.5s infinite;
}

@keyframes skeleton-shimmer {
    0% { background-position: 200% 0; }
    100% { background-position: -200% 0; }
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0 20px;
    border-radius: 8px;
    border: 2px solid var(--accent);
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
}

.btn-primary {
    background: var(--accent);
    color: #fff;
}

.btn-primary:hover {
    background: var(--accent-dark);
}

.btn-secondary {
    background: transparent;
    color: var(--accent);
}

/* Cards */
.card {
    background: var(--bg);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 24px;
}

.card-title {
    margin: 0 0 8px;
}

.tag-list {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    list-style: none;
    padding: 0;
}

.tag {
    padding: 2px 10px;
    border-radius: 999px;
    background: var(--bg-alt);
    font-size: 1rem;
}

.card-links {
    display: flex;
    gap: 12px;
}

/* Resume */
.timeline {
    list-style: none;
    padding: 0;
    border-left: 2px solid var(--border);
}

.timeline-entry {
    padding: 0 0 24px 24px;
}

.timeline-period {
    color: var(--text-dim);
    font-size: 1rem;
}

/* Contact */
.contact-form {
    display: grid;
    gap: 16px;
    max-width: 640px;
}

.form-field {
    display: grid;
    gap: 6px;
}

.form-field input, .form-field textarea {
    font: inherit;
    padding: 10px 12px;
    border: 1px solid var(--border);
    border-radius: 8px;
}

.form-field textarea {
    min-height: 140px;
    resize: vertical;
}

.field-error {
    color: #c81e1e;
    font-size: 1rem;
}

/* Footer */
.site-footer {
    padding: 32px 0;
    border-top: 1px solid var(--border);
    text-align: center;
    color: var(--text-dim);
}

.footer-links {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 16px;
    list-style: none;
    padding: 0;
}
"#;

fn build_css() -> String {
    let touch = MIN_TOUCH_TARGET;
    let font = MIN_FONT_SIZE_PX;
    let line_height = MIN_LINE_HEIGHT;
    let mobile_grid = Breakpoint::Mobile.grid().css_template();
    let wide_grid = Breakpoint::Tablet.grid().css_template();
    let mobile_max = TABLET_MIN_WIDTH - 1;
    let gap = GRID_GAP_PX;

    format!(
        r#"{BASE_CSS}
/* Typography floor, every viewport */
body, p, li, input, textarea, button {{
    font-size: max(1rem, {font}px);
    line-height: {line_height};
}}

.btn, .nav-link, .form-submit {{
    min-height: {touch}px;
}}

.content-grid {{
    display: grid;
    gap: {gap}px;
    grid-template-columns: {mobile_grid};
}}

/* Mobile: collapsed navigation, single column, touch-sized controls */
@media (max-width: {mobile_max}px) {{
    .nav-toggle {{
        display: inline-flex;
        min-width: {touch}px;
        min-height: {touch}px;
    }}
    .nav-links {{
        display: none;
        flex-direction: column;
        width: 100%;
        padding: 8px 0;
    }}
    .nav-links.open {{
        display: flex;
    }}
    .nav-link {{
        min-height: {touch}px;
    }}
    button, .btn, input[type="submit"] {{
        min-height: {touch}px;
        min-width: {touch}px;
    }}
    .hero-grid {{
        grid-template-columns: 1fr;
        text-align: center;
    }}
    .hero-actions {{
        justify-content: center;
    }}
}}

/* Tablet and up: inline navigation, responsive grid */
@media (min-width: {TABLET_MIN_WIDTH}px) {{
    .nav-toggle {{
        display: none;
    }}
    .nav-links {{
        display: flex;
        flex-direction: row;
    }}
    .content-grid {{
        grid-template-columns: {wide_grid};
    }}
}}

@media (min-width: {DESKTOP_MIN_WIDTH}px) {{
    .hero-grid {{
        grid-template-columns: 3fr 2fr;
    }}
    .hero-title {{
        font-size: 3.25rem;
    }}
}}
"#
    )
}

/// Root font size used to resolve `rem`/`em` lengths.
const ROOT_FONT_PX: f64 = 16.0;

/// A style rule, with the `@media` prelude it is nested in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CssRule<'a> {
    pub media: Option<&'a str>,
    pub selector: &'a str,
    pub body: &'a str,
}

impl<'a> CssRule<'a> {
    /// `property: value` pairs, trimmed.
    pub fn declarations(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.body
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .map(|(prop, value)| (prop.trim(), value.trim()))
    }

    fn px(&self, property: &str) -> Option<f64> {
        self.declarations()
            .find(|(prop, _)| *prop == property)
            .and_then(|(_, value)| css_px(value))
    }
}

/// Style rules of a stylesheet in source order. `@keyframes` and other
/// at-rules besides `@media` are skipped.
pub fn css_rules(css: &str) -> Vec<CssRule<'_>> {
    let mut rules = Vec::new();
    collect_rules(css, None, &mut rules);
    rules
}

fn collect_rules<'a>(css: &'a str, media: Option<&'a str>, out: &mut Vec<CssRule<'a>>) {
    let mut rest = css;
    while let Some(open) = rest.find('{') {
        let prelude = strip_comments(&rest[..open]);
        let Some(close) = matching_brace(&rest[open..]) else {
            break;
        };
        let body = &rest[open + 1..open + close];
        if prelude.starts_with("@media") {
            collect_rules(body, Some(prelude), out);
        } else if !prelude.starts_with('@') {
            out.push(CssRule {
                media,
                selector: prelude,
                body,
            });
        }
        rest = &rest[open + close + 1..];
    }
}

fn matching_brace(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in s.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn strip_comments(prelude: &str) -> &str {
    match prelude.rfind("*/") {
        Some(end) => prelude[end + 2..].trim(),
        None => prelude.trim(),
    }
}

/// Resolve a length to CSS pixels: `px`, `rem`, `em` and `max(..)` of those.
pub fn css_px(value: &str) -> Option<f64> {
    let value = value.trim_end_matches("!important").trim();
    if let Some(args) = value.strip_prefix("max(").and_then(|v| v.strip_suffix(')')) {
        return args.split(',').filter_map(css_px).reduce(f64::max);
    }
    if let Some(n) = value.strip_suffix("rem").or_else(|| value.strip_suffix("em")) {
        return n.trim().parse::<f64>().ok().map(|n| n * ROOT_FONT_PX);
    }
    value.strip_suffix("px")?.trim().parse().ok()
}

/// Check a stylesheet against the layout contract: every `font-size` and
/// `line-height` meets the typography floor at any width, and every sized
/// control in the mobile block meets the touch minimum.
pub fn audit_css(css: &str) -> Vec<LayoutViolation> {
    let mobile_query = format!("(max-width: {}px)", TABLET_MIN_WIDTH - 1);
    let rules = css_rules(css);
    let mut violations = Vec::new();

    for rule in &rules {
        for (prop, value) in rule.declarations() {
            match prop {
                "font-size" => violations.extend(css_px(value).and_then(audit_font_size)),
                "line-height" => {
                    violations.extend(value.parse::<f64>().ok().and_then(audit_line_height))
                }
                _ => {}
            }
        }
    }

    let targets: Vec<TargetBox> = rules
        .iter()
        .filter(|rule| rule.media.is_some_and(|m| m.contains(&mobile_query)))
        .filter_map(|rule| {
            let height = rule.px("min-height")?;
            Some(TargetBox::new(
                rule.selector,
                rule.px("min-width").unwrap_or(0.0),
                height,
            ))
        })
        .collect();
    violations.extend(audit_touch_targets(Viewport::MOBILE, &targets));
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_queries_follow_breakpoints() {
        let css = site_css();
        assert!(css.contains("@media (max-width: 767px)"));
        assert!(css.contains("@media (min-width: 768px)"));
        assert!(css.contains("@media (min-width: 1024px)"));
    }

    #[test]
    fn touch_and_typography_floors_present() {
        let css = site_css();
        assert!(css.contains("min-height: 44px"));
        assert!(css.contains("min-width: 44px"));
        assert!(css.contains("font-size: max(1rem, 16px)"));
        assert!(css.contains("line-height: 1.5"));
    }

    #[test]
    fn generated_stylesheet_passes_layout_audit() {
        assert_eq!(audit_css(site_css()), Vec::new());
    }

    #[test]
    fn every_font_size_meets_the_floor() {
        let sizes: Vec<(&str, f64)> = css_rules(site_css())
            .into_iter()
            .filter_map(|rule| rule.px("font-size").map(|px| (rule.selector, px)))
            .collect();
        assert!(sizes.iter().any(|(sel, _)| *sel == ".tag"));
        for (selector, px) in sizes {
            assert!(px >= MIN_FONT_SIZE_PX, "{selector} is {px}px");
        }
    }

    #[test]
    fn class_level_small_text_is_flagged() {
        let css = ".tag { font-size: 0.875rem; }\n.field-error { font-size: 0.9rem; }";
        assert_eq!(
            audit_css(css),
            vec![
                LayoutViolation::FontTooSmall(14.0),
                LayoutViolation::FontTooSmall(14.4),
            ]
        );
    }

    #[test]
    fn undersized_mobile_control_is_flagged() {
        let css = "@media (max-width: 767px) {\n    .icon-btn { min-height: 32px; min-width: 32px; }\n}\n\
                   .wide-only { min-height: 20px; }";
        let violations = audit_css(css);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0],
            LayoutViolation::TouchTarget { label, .. } if label == ".icon-btn"
        ));
    }

    #[test]
    fn resolves_lengths() {
        assert_eq!(css_px("16px"), Some(16.0));
        assert_eq!(css_px("1.25rem"), Some(20.0));
        assert_eq!(css_px("max(1rem, 16px)"), Some(16.0));
        assert_eq!(css_px("50%"), None);
    }

    #[test]
    fn rules_keep_their_media_context() {
        let rules = css_rules(site_css());
        let toggle: Vec<_> = rules.iter().filter(|r| r.selector == ".nav-toggle").collect();
        assert_eq!(toggle.len(), 3);
        assert!(toggle[0].media.is_none());
        assert!(toggle[1].media.is_some_and(|m| m.contains("max-width: 767px")));
        assert!(rules.iter().all(|r| !r.selector.contains("skeleton-shimmer")));
    }

    #[test]
    fn grid_templates_match_layout() {
        let css = site_css();
        assert!(css.contains("grid-template-columns: 1fr;"));
        assert!(css.contains("grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));"));
    }
}
