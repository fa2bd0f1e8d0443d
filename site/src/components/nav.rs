use leptos::prelude::*;

use crate::layout::{Viewport, ViewportSession};
use crate::types::SectionId;

/// Id of the navigation link list, referenced by the toggle's `aria-controls`.
pub const NAV_LIST_ID: &str = "primary-nav";

/// Site header with the primary navigation.
///
/// Below the tablet breakpoint the link list is hidden behind `.nav-toggle`.
/// The stylesheet decides visibility; the open/closed state lives in a
/// [`ViewportSession`], so toggles are ignored while the navigation is inline
/// and crossing a breakpoint closes the menu.
#[component]
pub fn Nav(#[prop(into)] brand: String, links: Vec<SectionId>) -> impl IntoView {
    let session = RwSignal::new(ViewportSession::new(initial_viewport()));
    let menu_open = move || session.with(|s| s.menu_open());

    #[cfg(feature = "csr")]
    follow_window_resizes(session);

    view! {
        <header class="site-header">
            <nav class="nav" aria-label="Primary">
                <div class="nav-inner">
                    <a href=format!("#{}", SectionId::Hero.anchor()) class="nav-brand">
                        {brand}
                    </a>
                    <button
                        type="button"
                        class="nav-toggle"
                        aria-controls=NAV_LIST_ID
                        aria-expanded=move || if menu_open() { "true" } else { "false" }
                        aria-label=move || if menu_open() { "Close menu" } else { "Open menu" }
                        on:click=move |_| {
                            session.update(|s| {
                                s.toggle_menu();
                            })
                        }
                    >
                        <span class="nav-toggle-bar"></span>
                        <span class="nav-toggle-bar"></span>
                        <span class="nav-toggle-bar"></span>
                    </button>
                    <ul
                        id=NAV_LIST_ID
                        class=move || if menu_open() { "nav-links open" } else { "nav-links" }
                    >
                        {links
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <a
                                            class="nav-link"
                                            href=format!("#{}", section.anchor())
                                            on:click=move |_| {
                                                session.update(|s| {
                                                    s.close_menu();
                                                })
                                            }
                                        >
                                            {section.title()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </nav>
        </header>
    }
}

// Static output has no window; render for the touch-first tier so the toggle
// markup is the one a phone sees first.
#[cfg(not(feature = "csr"))]
fn initial_viewport() -> Viewport {
    Viewport::MOBILE
}

#[cfg(feature = "csr")]
fn initial_viewport() -> Viewport {
    window_viewport().unwrap_or(Viewport::MOBILE)
}

#[cfg(feature = "csr")]
fn window_viewport() -> Option<Viewport> {
    let window = window();
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as u32, height as u32))
}

// Every resize goes through the session, which closes the menu when a
// breakpoint is crossed.
#[cfg(feature = "csr")]
fn follow_window_resizes(session: RwSignal<ViewportSession>) {
    let handle = window_event_listener(leptos::ev::resize, move |_| {
        if let Some(viewport) = window_viewport() {
            session.update(|s| {
                s.resize(viewport);
            });
        }
    });
    on_cleanup(move || handle.remove());
}
