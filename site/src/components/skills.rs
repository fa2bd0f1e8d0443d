use leptos::prelude::*;

use crate::types::{SectionId, SkillGroup};

#[component]
pub fn Skills(groups: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <section id=SectionId::Skills.anchor() class="section skills" aria-labelledby="skills-title">
            <div class="container">
                <h2 id="skills-title" class="section-title">"Skills"</h2>
                <div class="content-grid">
                    {groups
                        .into_iter()
                        .map(|group| {
                            view! {
                                <div class="card skill-group">
                                    <h3 class="card-title">{group.name}</h3>
                                    <ul class="tag-list">
                                        {group
                                            .skills
                                            .into_iter()
                                            .map(|skill| view! { <li class="tag">{skill}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
