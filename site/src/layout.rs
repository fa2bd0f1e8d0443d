//! Responsive layout contract.
//!
//! The numbers here drive both the generated stylesheet ([`crate::styles`])
//! and the layout audits used by the responsive and accessibility test
//! suites, so the CSS and the checks cannot drift apart.
//!
//! | Width          | Breakpoint | Navigation      | Content grid                  |
//! |----------------|------------|-----------------|-------------------------------|
//! | `< 768`        | Mobile     | toggle (menu)   | single column                 |
//! | `768 ..= 1023` | Tablet     | inline          | `auto-fit, minmax(280px, 1fr)`|
//! | `>= 1024`      | Desktop    | inline          | `auto-fit, minmax(280px, 1fr)`|

use std::fmt;

use thiserror::Error;

/// First width that is no longer mobile.
pub const TABLET_MIN_WIDTH: u32 = 768;
/// First desktop width.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;
/// Minimum size of an interactive control on touch layouts, in CSS pixels.
pub const MIN_TOUCH_TARGET: f64 = 44.0;
/// Minimum body font size, in CSS pixels.
pub const MIN_FONT_SIZE_PX: f64 = 16.0;
/// Minimum body line-height (unitless).
pub const MIN_LINE_HEIGHT: f64 = 1.5;
/// Narrowest column of the responsive content grid.
pub const GRID_MIN_COLUMN_PX: u32 = 280;
/// Gap between grid columns.
pub const GRID_GAP_PX: u32 = 24;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const MOBILE: Viewport = Viewport::new(375, 667);
    pub const TABLET: Viewport = Viewport::new(768, 1024);
    pub const DESKTOP: Viewport = Viewport::new(1280, 720);

    pub const fn new(width: u32, height: u32) -> Self {
        Viewport { width, height }
    }

    pub fn breakpoint(self) -> Breakpoint {
        Breakpoint::from_width(self.width)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Layout tier selected by viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: u32) -> Self {
        if width < TABLET_MIN_WIDTH {
            Breakpoint::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn nav_mode(self) -> NavMode {
        match self {
            Breakpoint::Mobile => NavMode::Toggle,
            Breakpoint::Tablet | Breakpoint::Desktop => NavMode::Inline,
        }
    }

    pub fn grid(self) -> GridLayout {
        match self {
            Breakpoint::Mobile => GridLayout::SingleColumn,
            Breakpoint::Tablet | Breakpoint::Desktop => GridLayout::AutoFit {
                min_column_px: GRID_MIN_COLUMN_PX,
            },
        }
    }

    /// Touch target minimums apply to the touch-first tier only.
    pub fn requires_touch_targets(self) -> bool {
        self == Breakpoint::Mobile
    }
}

/// How the primary navigation is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// Collapsed behind a menu toggle button.
    Toggle,
    /// Full link list shown in the header.
    Inline,
}

/// Column strategy of content grids (projects, skills).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridLayout {
    SingleColumn,
    AutoFit { min_column_px: u32 },
}

impl GridLayout {
    /// `grid-template-columns` value.
    pub fn css_template(self) -> String {
        match self {
            GridLayout::SingleColumn => "1fr".to_string(),
            GridLayout::AutoFit { min_column_px } => {
                format!("repeat(auto-fit, minmax({min_column_px}px, 1fr))")
            }
        }
    }
}

/// Which navigation controls are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavVisibility {
    pub toggle_visible: bool,
    pub links_visible: bool,
}

impl NavVisibility {
    pub fn for_viewport(viewport: Viewport, menu_open: bool) -> Self {
        match viewport.breakpoint().nav_mode() {
            NavMode::Toggle => NavVisibility {
                toggle_visible: true,
                links_visible: menu_open,
            },
            NavMode::Inline => NavVisibility {
                toggle_visible: false,
                links_visible: true,
            },
        }
    }
}

/// Navigation state of one browsing session across resizes.
///
/// The menu only exists in toggle mode; crossing a breakpoint closes it, so a
/// resize never carries state over from the previous size.
#[derive(Clone, Debug)]
pub struct ViewportSession {
    viewport: Viewport,
    menu_open: bool,
}

impl ViewportSession {
    pub fn new(viewport: Viewport) -> Self {
        ViewportSession {
            viewport,
            menu_open: false,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn resize(&mut self, viewport: Viewport) -> NavVisibility {
        if viewport.breakpoint() != self.viewport.breakpoint() {
            self.menu_open = false;
        }
        self.viewport = viewport;
        self.nav()
    }

    /// Toggle the mobile menu. Ignored while the navigation is inline.
    pub fn toggle_menu(&mut self) -> NavVisibility {
        if self.viewport.breakpoint().nav_mode() == NavMode::Toggle {
            self.menu_open = !self.menu_open;
        }
        self.nav()
    }

    /// Close the menu, e.g. after a link was followed.
    pub fn close_menu(&mut self) -> NavVisibility {
        self.menu_open = false;
        self.nav()
    }

    pub fn nav(&self) -> NavVisibility {
        NavVisibility::for_viewport(self.viewport, self.menu_open)
    }
}

/// Rendered size of an interactive element.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetBox {
    pub label: String,
    pub width: f64,
    pub height: f64,
}

impl TargetBox {
    pub fn new(label: impl Into<String>, width: f64, height: f64) -> Self {
        TargetBox {
            label: label.into(),
            width,
            height,
        }
    }

    /// A target passes when its larger dimension reaches the minimum.
    pub fn meets_touch_minimum(&self) -> bool {
        self.width.max(self.height) >= MIN_TOUCH_TARGET
    }
}

/// A breach of the layout contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutViolation {
    #[error("`{label}` is {size:.1}px at {viewport}, touch targets need {min}px", min = MIN_TOUCH_TARGET)]
    TouchTarget {
        label: String,
        size: f64,
        viewport: Viewport,
    },
    #[error("font size {0:.1}px is below the {min}px minimum", min = MIN_FONT_SIZE_PX)]
    FontTooSmall(f64),
    #[error("line-height {0:.2} is below the {min} minimum", min = MIN_LINE_HEIGHT)]
    LineHeightTooTight(f64),
}

/// Check interactive elements against the touch target minimum.
pub fn audit_touch_targets(viewport: Viewport, targets: &[TargetBox]) -> Vec<LayoutViolation> {
    if !viewport.breakpoint().requires_touch_targets() {
        return Vec::new();
    }
    targets
        .iter()
        .filter(|t| !t.meets_touch_minimum())
        .map(|t| LayoutViolation::TouchTarget {
            label: t.label.clone(),
            size: t.width.max(t.height),
            viewport,
        })
        .collect()
}

/// Check a font size against the legibility floor. Applies at every width.
pub fn audit_font_size(font_size_px: f64) -> Option<LayoutViolation> {
    (font_size_px < MIN_FONT_SIZE_PX).then_some(LayoutViolation::FontTooSmall(font_size_px))
}

/// Check a unitless line-height against the floor.
pub fn audit_line_height(line_height: f64) -> Option<LayoutViolation> {
    (line_height < MIN_LINE_HEIGHT).then_some(LayoutViolation::LineHeightTooTight(line_height))
}

/// Check body typography. Applies at every viewport width.
pub fn audit_typography(font_size_px: f64, line_height: f64) -> Vec<LayoutViolation> {
    audit_font_size(font_size_px)
        .into_iter()
        .chain(audit_line_height(line_height))
        .collect()
}
