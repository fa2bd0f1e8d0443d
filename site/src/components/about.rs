use leptos::prelude::*;

use crate::types::SectionId;

#[component]
pub fn About(paragraphs: Vec<String>) -> impl IntoView {
    view! {
        <section id=SectionId::About.anchor() class="section about" aria-labelledby="about-title">
            <div class="container">
                <h2 id="about-title" class="section-title">"About me"</h2>
                {paragraphs
                    .into_iter()
                    .map(|text| view! { <p class="about-text">{text}</p> })
                    .collect_view()}
            </div>
        </section>
    }
}
