use leptos::prelude::*;

use super::{ICON_EXTERNAL, Icon};
use crate::types::SocialLink;

#[component]
pub fn Footer(#[prop(into)] name: String, socials: Vec<SocialLink>) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <ul class="footer-links">
                    {socials
                        .into_iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a
                                        href=link.url
                                        class="footer-link"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {link.label}
                                        <Icon path=ICON_EXTERNAL size="14" />
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <p class="footer-copyright">"© " {name} ". Built with Rust and Leptos."</p>
            </div>
        </footer>
    }
}
