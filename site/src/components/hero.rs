use leptos::prelude::*;

use super::HeroImage;
use crate::types::{Profile, SectionId};

#[component]
pub fn Hero(
    profile: Profile,
    /// Offer the "View my work" button; off when there is no projects section
    #[prop(default = true)]
    link_projects: bool,
) -> impl IntoView {
    let Profile {
        display_name,
        headline,
        tagline,
        photo_url,
        photo_alt,
    } = profile;

    view! {
        <section id=SectionId::Hero.anchor() class="section hero" aria-labelledby="hero-title">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 id="hero-title" class="hero-title">
                        "Hi, I'm " {display_name.clone()}
                    </h1>
                    <p class="hero-headline">{headline}</p>
                    <p class="hero-tagline">{tagline}</p>
                    <div class="hero-actions">
                        {link_projects
                            .then(|| {
                                view! {
                                    <a
                                        href=format!("#{}", SectionId::Projects.anchor())
                                        class="btn btn-primary"
                                    >
                                        "View my work"
                                    </a>
                                }
                            })}
                        <a href=format!("#{}", SectionId::Contact.anchor()) class="btn btn-secondary">
                            "Get in touch"
                        </a>
                    </div>
                </div>
                <HeroImage src=photo_url alt=photo_alt name=display_name />
            </div>
        </section>
    }
}
