use leptos::prelude::*;

use super::{ICON_DOWNLOAD, Icon};
use crate::types::{Resume, ResumeEntry, SectionId};

#[component]
pub fn ResumeSection(resume: Resume) -> impl IntoView {
    let Resume {
        entries,
        resume_url,
    } = resume;

    view! {
        <section id=SectionId::Resume.anchor() class="section resume" aria-labelledby="resume-title">
            <div class="container">
                <h2 id="resume-title" class="section-title">"Resume"</h2>
                <ol class="timeline">
                    {entries
                        .into_iter()
                        .map(|entry| view! { <TimelineEntry entry=entry /> })
                        .collect_view()}
                </ol>
                {resume_url
                    .map(|url| {
                        view! {
                            <a href=url class="btn btn-primary resume-download" download="">
                                <Icon path=ICON_DOWNLOAD size="16" />
                                " Download CV"
                            </a>
                        }
                    })}
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: ResumeEntry) -> impl IntoView {
    let class = format!("timeline-entry timeline-entry--{}", entry.kind.label());

    view! {
        <li class=class>
            <h3 class="timeline-role">{entry.role}</h3>
            <p class="timeline-org">{entry.organisation}</p>
            <p class="timeline-period">{entry.period}</p>
            <ul class="timeline-highlights">
                {entry.highlights.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </li>
    }
}
