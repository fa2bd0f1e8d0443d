//! Inline SVG icons (24px grid, stroked).

use leptos::prelude::*;

/// Renders a stroked inline SVG icon from path data.
///
/// Icons are decorative: they are hidden from assistive technology, so the
/// surrounding control must carry its own label.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_EXTERNAL size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            focusable="false"
        >
            <path d=path></path>
        </svg>
    }
}

/// Box with an arrow leaving the top-right corner
pub const ICON_EXTERNAL: &str = "M14 4h6v6M20 4l-9 9M18 14v5a1 1 0 0 1-1 1H5a1 1 0 0 1-1-1V7a1 1 0 0 1 1-1h5";

/// Angle brackets
pub const ICON_CODE: &str = "M8 7l-5 5 5 5M16 7l5 5-5 5";

/// Arrow into a tray
pub const ICON_DOWNLOAD: &str = "M12 4v11M7 10l5 5 5-5M4 20h16";

/// Envelope
pub const ICON_MAIL: &str = "M3 6h18v12H3zM3 6l9 7 9-7";
