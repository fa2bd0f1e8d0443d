//! Image with skeleton loader and generated-avatar fallback.

use leptos::prelude::*;

use crate::image::{ImageFrame, ImageState, fallback_avatar_url};

/// Remote image that fades in once loaded and swaps to a generated avatar if
/// the primary source fails.
///
/// While nothing has arrived a skeleton placeholder covers the image. A load
/// failure is handled here and never reported to the parent.
#[component]
pub fn HeroImage(
    /// Primary image URL
    #[prop(into)]
    src: String,
    /// Alternate text
    #[prop(into)]
    alt: String,
    /// Display name used to generate the fallback avatar
    #[prop(into)]
    name: String,
    /// Wrapper shape, round portrait unless set
    #[prop(optional)]
    frame: ImageFrame,
    /// Extra class for the wrapper
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let state = RwSignal::new(ImageState::Unloaded);
    let fallback = fallback_avatar_url(&name);

    view! {
        <HeroImageFrame state=state src=src alt=alt fallback=fallback frame=frame class=class />
    }
}

/// Rendering half of [`HeroImage`], driven by an externally owned state.
#[component]
pub fn HeroImageFrame(
    state: RwSignal<ImageState>,
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] fallback: String,
    #[prop(optional)] frame: ImageFrame,
    #[prop(optional_no_strip)] class: Option<String>,
) -> impl IntoView {
    let base = frame.class_name();
    let wrapper_class = match class {
        Some(extra) if !extra.trim().is_empty() => format!("{base} {}", extra.trim()),
        _ => base.to_string(),
    };

    view! {
        <div class=wrapper_class data-state=move || state.get().label()>
            <Show when=move || state.get().shows_skeleton()>
                <div class="image-skeleton" aria-hidden="true"></div>
            </Show>
            <img
                src=move || state.get().source(&src, &fallback).to_string()
                alt=alt
                style=move || state.get().image_style()
                decoding="async"
                on:load=move |_| state.update(|s| *s = s.on_load())
                on:error=move |_| state.update(|s| *s = s.on_error())
            />
        </div>
    }
}
