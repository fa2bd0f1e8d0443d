//! Responsive layout contract across viewport sizes.
//!
//! Mirrors what a browser run checks: which navigation controls are visible at
//! each width, how grids reflow, the touch target floor on mobile, and that
//! the generated stylesheet implements the same thresholds.

use portfolio_site::components::NAV_LIST_ID;
use portfolio_site::layout::{
    Breakpoint, GridLayout, LayoutViolation, NavMode, NavVisibility, TargetBox, Viewport,
    ViewportSession, audit_touch_targets, audit_typography,
};
use portfolio_site::render_site;
use portfolio_site::styles::{audit_css, site_css};
use portfolio_site::types::SiteContent;

/// Body of the first `@media` block matching `query`.
fn media_block<'a>(css: &'a str, query: &str) -> &'a str {
    let start = css
        .find(&format!("@media {query}"))
        .unwrap_or_else(|| panic!("missing @media {query}"));
    let open = start + css[start..].find('{').unwrap();
    let mut depth = 0;
    for (offset, ch) in css[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return &css[open + 1..open + offset];
                }
            }
            _ => {}
        }
    }
    panic!("unterminated @media {query}");
}

/// Declarations of `selector` inside a block.
fn rule<'a>(block: &'a str, selector: &str) -> &'a str {
    let start = block
        .find(&format!("{selector} {{"))
        .unwrap_or_else(|| panic!("missing rule {selector}"));
    let open = start + block[start..].find('{').unwrap();
    let close = open + block[open..].find('}').unwrap();
    &block[open + 1..close]
}

mod viewports {
    use super::*;

    #[test]
    fn mobile_shows_toggle_only() {
        for width in [320, 375, 414, 767] {
            let nav = NavVisibility::for_viewport(Viewport::new(width, 800), false);
            assert!(nav.toggle_visible, "toggle hidden at {width}");
            assert!(!nav.links_visible, "links visible at {width}");
        }
    }

    #[test]
    fn tablet_and_desktop_show_full_nav() {
        for width in [768, 800, 1023, 1024, 1280, 1920] {
            let nav = NavVisibility::for_viewport(Viewport::new(width, 800), false);
            assert!(!nav.toggle_visible, "toggle visible at {width}");
            assert!(nav.links_visible, "links hidden at {width}");
        }
    }

    #[test]
    fn tiers_and_nav_modes() {
        assert_eq!(Viewport::MOBILE.breakpoint(), Breakpoint::Mobile);
        assert_eq!(Viewport::TABLET.breakpoint(), Breakpoint::Tablet);
        assert_eq!(Viewport::DESKTOP.breakpoint(), Breakpoint::Desktop);
        assert_eq!(Breakpoint::Mobile.nav_mode(), NavMode::Toggle);
        assert_eq!(Breakpoint::Tablet.nav_mode(), NavMode::Inline);
        assert_eq!(Breakpoint::Desktop.nav_mode(), NavMode::Inline);
    }

    #[test]
    fn grids_reflow() {
        assert_eq!(Breakpoint::Mobile.grid(), GridLayout::SingleColumn);
        assert!(matches!(Breakpoint::Tablet.grid(), GridLayout::AutoFit { min_column_px: 280 }));
        assert_eq!(Breakpoint::Mobile.grid().css_template(), "1fr");
        assert_eq!(
            Breakpoint::Desktop.grid().css_template(),
            "repeat(auto-fit, minmax(280px, 1fr))"
        );
    }
}

mod resizing {
    use super::*;

    #[test]
    fn desktop_to_mobile_and_back_toggles_every_time() {
        let mut session = ViewportSession::new(Viewport::DESKTOP);

        for _ in 0..3 {
            let nav = session.resize(Viewport::MOBILE);
            assert!(nav.toggle_visible);
            assert!(!nav.links_visible);

            let nav = session.resize(Viewport::DESKTOP);
            assert!(!nav.toggle_visible);
            assert!(nav.links_visible);
        }
    }

    #[test]
    fn open_menu_does_not_survive_a_round_trip() {
        let mut session = ViewportSession::new(Viewport::MOBILE);
        assert!(session.toggle_menu().links_visible);

        session.resize(Viewport::DESKTOP);
        let nav = session.resize(Viewport::MOBILE);

        assert!(!session.menu_open());
        assert!(!nav.links_visible);
        assert!(nav.toggle_visible);
    }

    #[test]
    fn toggle_opens_and_closes_on_mobile() {
        let mut session = ViewportSession::new(Viewport::MOBILE);
        assert!(session.toggle_menu().links_visible);
        assert!(!session.toggle_menu().links_visible);
    }
}

mod touch_targets {
    use super::*;

    #[test]
    fn small_buttons_fail_on_mobile_only() {
        let targets = vec![
            TargetBox::new("menu toggle", 44.0, 44.0),
            TargetBox::new("send message", 160.0, 44.0),
            TargetBox::new("icon link", 24.0, 24.0),
        ];

        let violations = audit_touch_targets(Viewport::MOBILE, &targets);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0],
            LayoutViolation::TouchTarget { label, .. } if label == "icon link"
        ));

        assert!(audit_touch_targets(Viewport::DESKTOP, &targets).is_empty());
    }

    #[test]
    fn typography_floor_applies_everywhere() {
        assert!(audit_typography(16.0, 1.5).is_empty());
        assert_eq!(
            audit_typography(14.0, 1.2),
            vec![
                LayoutViolation::FontTooSmall(14.0),
                LayoutViolation::LineHeightTooTight(1.2)
            ]
        );
    }
}

mod stylesheet {
    use super::*;

    #[test]
    fn mobile_block_collapses_navigation() {
        let css = site_css();
        let mobile = media_block(css, "(max-width: 767px)");

        let toggle = rule(mobile, ".nav-toggle");
        assert!(toggle.contains("display: inline-flex"));
        assert!(toggle.contains("min-width: 44px"));
        assert!(toggle.contains("min-height: 44px"));

        assert!(rule(mobile, ".nav-links").contains("display: none"));
        assert!(rule(mobile, ".nav-links.open").contains("display: flex"));
        assert!(rule(mobile, r#"button, .btn, input[type="submit"]"#).contains("min-height: 44px"));
    }

    #[test]
    fn wide_block_shows_inline_navigation() {
        let css = site_css();
        let wide = media_block(css, "(min-width: 768px)");

        assert!(rule(wide, ".nav-toggle").contains("display: none"));
        assert!(rule(wide, ".nav-links").contains("display: flex"));
        assert!(
            rule(wide, ".content-grid")
                .contains("grid-template-columns: repeat(auto-fit, minmax(280px, 1fr))")
        );
    }

    #[test]
    fn shipped_stylesheet_has_no_layout_violations() {
        assert_eq!(audit_css(site_css()), Vec::<LayoutViolation>::new());
    }

    #[test]
    fn content_grid_defaults_to_one_column() {
        let css = site_css();
        assert!(rule(css, ".content-grid").contains("grid-template-columns: 1fr"));
    }
}

mod markup {
    use super::*;

    #[test]
    fn toggle_controls_the_link_list() {
        let html = render_site(&SiteContent::builtin());

        assert!(html.contains(r#"class="nav-toggle""#));
        assert!(html.contains(&format!(r#"aria-controls="{NAV_LIST_ID}""#)));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(&format!(r#"id="{NAV_LIST_ID}" class="nav-links""#)));
    }

    #[test]
    fn grids_use_the_responsive_class() {
        let html = render_site(&SiteContent::builtin());
        assert_eq!(html.matches(r#"class="content-grid""#).count(), 2);
    }
}
