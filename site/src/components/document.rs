//! Root components: the app body and the full HTML document.

use leptos::prelude::*;

use super::{About, Contact, Hero, PageShell, Projects, ResumeSection, Skills};
use crate::styles::{NOSCRIPT_CSS, site_css};
use crate::types::{SectionId, SiteContent};

/// Everything inside `<body>`. The browser build mounts this directly.
#[component]
pub fn PortfolioApp(content: SiteContent) -> impl IntoView {
    let sections = content.sections();
    let has = |id: SectionId| sections.contains(&id);
    let (show_about, show_projects, show_skills, show_resume) = (
        has(SectionId::About),
        has(SectionId::Projects),
        has(SectionId::Skills),
        has(SectionId::Resume),
    );
    let SiteContent {
        profile,
        about,
        projects,
        skills,
        resume,
        contact,
        socials,
    } = content;
    let brand = profile.display_name.clone();

    view! {
        <PageShell brand=brand socials=socials links=sections>
            <Hero profile=profile link_projects=show_projects />
            {show_about.then(|| view! { <About paragraphs=about /> })}
            {show_projects.then(|| view! { <Projects projects=projects /> })}
            {show_skills.then(|| view! { <Skills groups=skills /> })}
            {show_resume.then(|| view! { <ResumeSection resume=resume /> })}
            <Contact contact=contact />
        </PageShell>
    }
}

/// The complete static HTML document.
#[component]
pub fn SiteDocument(content: SiteContent) -> impl IntoView {
    let title = format!(
        "{} · {}",
        content.profile.display_name, content.profile.headline
    );
    let description = content.profile.tagline.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{site_css()}</style>
                <noscript>
                    <style>{NOSCRIPT_CSS}</style>
                </noscript>
            </head>
            <body>
                <PortfolioApp content=content />
            </body>
        </html>
    }
}
