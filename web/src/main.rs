// Browser entry for the portfolio: `trunk build --release` from this directory.

use leptos::prelude::*;
use portfolio_site::components::PortfolioApp;
use portfolio_site::styles::site_css;
use portfolio_site::types::SiteContent;

fn main() {
    console_error_panic_hook::set_once();
    inject_styles();
    leptos::mount::mount_to_body(|| {
        view! { <PortfolioApp content=SiteContent::builtin() /> }
    });
}

/// The stylesheet is generated from the layout constants, so it ships inside
/// the wasm bundle instead of as a static asset.
fn inject_styles() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_text_content(Some(site_css()));
    if let Err(err) = head.append_child(&style) {
        web_sys::console::warn_2(&"portfolio: could not attach stylesheet".into(), &err);
    }
}
