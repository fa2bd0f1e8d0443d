use leptos::prelude::*;

use super::{HeroImage, ICON_CODE, ICON_EXTERNAL, Icon};
use crate::image::ImageFrame;
use crate::types::{Project, SectionId};

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section
            id=SectionId::Projects.anchor()
            class="section projects"
            aria-labelledby="projects-title"
        >
            <div class="container">
                <h2 id="projects-title" class="section-title">"Projects"</h2>
                <div class="content-grid">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// A project card; the optional screenshot falls back to a generated tile.
#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        summary,
        tags,
        repo_url,
        live_url,
        image_url,
    } = project;

    let image = image_url.map(|src| {
        let alt = format!("Screenshot of {title}");
        view! { <HeroImage src=src alt=alt name=title.clone() frame=ImageFrame::Banner /> }
    });

    view! {
        <article class="card project-card">
            {image}
            <h3 class="card-title">{title.clone()}</h3>
            <p class="card-summary">{summary}</p>
            <ul class="tag-list" aria-label="Technologies">
                {tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
            </ul>
            <div class="card-links">
                {repo_url
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                class="btn btn-secondary"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=format!("Source code for {title}")
                            >
                                <Icon path=ICON_CODE size="16" />
                                " Code"
                            </a>
                        }
                    })}
                {live_url
                    .map(|url| {
                        view! {
                            <a href=url class="btn btn-primary" target="_blank" rel="noopener noreferrer">
                                <Icon path=ICON_EXTERNAL size="16" />
                                " Live"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
