//! Page shell: skip link, header, main landmark, footer.

use leptos::prelude::*;

use super::{Footer, Nav};
use crate::types::{SectionId, SocialLink};

/// Id of the main landmark. Skip links and accessibility tooling target it.
pub const MAIN_CONTENT_ID: &str = "main-content";

/// Fixed page frame around arbitrary content.
///
/// Regions render in document order: header, `<main id="main-content">`,
/// footer. The id never changes, whatever children or class are passed.
#[component]
pub fn PageShell(
    /// Name shown in the header brand and the footer
    #[prop(into)]
    brand: String,
    /// Sections linked from the navigation
    #[prop(default = SectionId::ALL.to_vec())]
    links: Vec<SectionId>,
    /// Footer links
    #[prop(optional)]
    socials: Vec<SocialLink>,
    /// Extra class for the main element
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let main_class = match class {
        Some(extra) if !extra.trim().is_empty() => format!("site-main {}", extra.trim()),
        _ => "site-main".to_string(),
    };

    view! {
        <a class="skip-link" href=format!("#{MAIN_CONTENT_ID}")>"Skip to main content"</a>
        <Nav brand=brand.clone() links=links />
        <main id=MAIN_CONTENT_ID class=main_class tabindex="-1">
            {children()}
        </main>
        <Footer name=brand socials=socials />
    }
}
