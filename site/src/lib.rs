//! # portfolio-site
//!
//! Leptos components for a personal portfolio, plus a static renderer.
//!
//! The page is a fixed shell (header, `<main id="main-content">`, footer)
//! around six sections: hero, about, projects, skills, resume and contact.
//! Everything is driven by a [`types::SiteContent`] value.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_site::{render_site, types::SiteContent};
//!
//! let html = render_site(&SiteContent::builtin());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"id="main-content""#));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] / [`content`] - content model, built-in profile, JSON loading
//! - [`image`] - image load state machine and generated-avatar fallback URL
//! - [`layout`] - responsive breakpoints, touch target and typography audits
//! - [`contact`] - contact form validation
//! - [`styles`] - stylesheet generated from the layout constants
//! - [`components`] - Leptos UI components
//!
//! ## Features
//!
//! - `ssr` (default) - static HTML through Leptos' `RenderHtml`
//! - `csr` - browser build, used by the `web/` entry crate

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod contact;
pub mod content;
pub mod image;
pub mod layout;
pub mod styles;
pub mod types;

pub use content::ContentError;

#[cfg(feature = "ssr")]
pub use render::{render_section, render_site};

#[cfg(feature = "ssr")]
mod render {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    use crate::components::{About, Contact, Hero, Projects, ResumeSection, SiteDocument, Skills};
    use crate::types::{SectionId, SiteContent};

    /// Render the complete portfolio as a static HTML document.
    ///
    /// ```rust
    /// use portfolio_site::{render_site, types::SiteContent};
    ///
    /// let html = render_site(&SiteContent::builtin());
    /// assert!(html.contains("image-skeleton"));
    /// ```
    pub fn render_site(content: &SiteContent) -> String {
        let doc = view! { <SiteDocument content=content.clone() /> };

        // Leptos doesn't include DOCTYPE, so we add it
        format!("<!DOCTYPE html>\n{}", doc.to_html())
    }

    /// Render one section on its own, without shell or stylesheet.
    pub fn render_section(content: &SiteContent, section: SectionId) -> String {
        let content = content.clone();
        let view = match section {
            SectionId::Hero => {
                let link_projects = !content.projects.is_empty();
                view! { <Hero profile=content.profile link_projects=link_projects /> }.into_any()
            }
            SectionId::About => view! { <About paragraphs=content.about /> }.into_any(),
            SectionId::Projects => view! { <Projects projects=content.projects /> }.into_any(),
            SectionId::Skills => view! { <Skills groups=content.skills /> }.into_any(),
            SectionId::Resume => view! { <ResumeSection resume=content.resume /> }.into_any(),
            SectionId::Contact => view! { <Contact contact=content.contact /> }.into_any(),
        };
        view.to_html()
    }
}
