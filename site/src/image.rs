//! Image load state and the generated fallback avatar.
//!
//! An image starts [`ImageState::Unloaded`] and moves exactly once to
//! [`ImageState::Loaded`], either because the browser fired `load` or because
//! it fired `error`. Both end states are terminal: there are no retries and no
//! timeout. After an error the widget points at [`fallback_avatar_url`] for the
//! rest of its life.

/// Base URL of the avatar generator used when the primary image fails.
pub const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

/// Fixed avatar parameters: 400px square, brand blue background, white text.
pub const AVATAR_PARAMS: &str = "size=400&background=007bff&color=fff";

/// Build the fallback avatar URL for a display name.
///
/// The name is percent-encoded, so spaces become `%20`.
///
/// ```rust
/// use portfolio_site::image::fallback_avatar_url;
///
/// assert_eq!(
///     fallback_avatar_url("Jane Doe"),
///     "https://ui-avatars.com/api/?name=Jane%20Doe&size=400&background=007bff&color=fff"
/// );
/// ```
pub fn fallback_avatar_url(display_name: &str) -> String {
    format!(
        "{AVATAR_SERVICE}?name={}&{AVATAR_PARAMS}",
        urlencoding::encode(display_name)
    )
}

/// Shape of the box an image sits in. Each frame has its own wrapper class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFrame {
    /// Round profile photo in the hero.
    #[default]
    Portrait,
    /// Wide screenshot at the top of a project card.
    Banner,
}

impl ImageFrame {
    pub fn class_name(self) -> &'static str {
        match self {
            ImageFrame::Portrait => "hero-image",
            ImageFrame::Banner => "project-image",
        }
    }
}

/// Load state of a single image instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageState {
    /// Nothing has been delivered yet; the skeleton is visible.
    #[default]
    Unloaded,
    /// The browser finished with the resource. `errored` is set when it failed
    /// and the fallback source is in use.
    Loaded { errored: bool },
}

impl ImageState {
    /// Transition for the `load` event.
    pub fn on_load(self) -> Self {
        match self {
            ImageState::Unloaded => ImageState::Loaded { errored: false },
            done => done,
        }
    }

    /// Transition for the `error` event. Loaded and errored are set together.
    pub fn on_error(self) -> Self {
        match self {
            ImageState::Unloaded => ImageState::Loaded { errored: true },
            done => done,
        }
    }

    pub fn is_loaded(self) -> bool {
        matches!(self, ImageState::Loaded { .. })
    }

    pub fn is_errored(self) -> bool {
        matches!(self, ImageState::Loaded { errored: true })
    }

    /// The skeleton placeholder is shown only before any event.
    pub fn shows_skeleton(self) -> bool {
        !self.is_loaded()
    }

    /// Image opacity: hidden behind the skeleton, then faded in.
    pub fn opacity(self) -> u8 {
        if self.is_loaded() { 1 } else { 0 }
    }

    /// Inline style for the `<img>` element.
    pub fn image_style(self) -> String {
        format!(
            "opacity: {}; transition: opacity 0.3s ease-in-out;",
            self.opacity()
        )
    }

    /// Source to render: the fallback once errored, otherwise the primary.
    pub fn source<'a>(self, primary: &'a str, fallback: &'a str) -> &'a str {
        if self.is_errored() { fallback } else { primary }
    }

    /// Value for the `data-state` attribute, handy for styling and tests.
    pub fn label(self) -> &'static str {
        match self {
            ImageState::Unloaded => "loading",
            ImageState::Loaded { errored: false } => "loaded",
            ImageState::Loaded { errored: true } => "fallback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn frames_have_distinct_classes() {
        assert_eq!(ImageFrame::default().class_name(), "hero-image");
        assert_eq!(ImageFrame::Banner.class_name(), "project-image");
    }

    #[test]
    fn fallback_url_encodes_spaces() {
        assert_eq!(
            fallback_avatar_url("Jane Doe"),
            "https://ui-avatars.com/api/?name=Jane%20Doe&size=400&background=007bff&color=fff"
        );
    }

    #[test]
    fn fallback_url_encodes_reserved_and_unicode() {
        let url = fallback_avatar_url("Zoë O'Neil & Co");
        assert!(url.starts_with("https://ui-avatars.com/api/?name=Zo%C3%AB%20O%27Neil%20%26%20Co&"));
        assert!(url.ends_with("&size=400&background=007bff&color=fff"));
    }

    #[test]
    fn success_path() {
        let state = ImageState::default();
        assert!(state.shows_skeleton());
        assert_eq!(state.opacity(), 0);

        let state = state.on_load();
        assert_eq!(state, ImageState::Loaded { errored: false });
        assert!(!state.shows_skeleton());
        assert_eq!(state.opacity(), 1);
        assert_eq!(state.source("a.jpg", "b.png"), "a.jpg");
    }

    #[test]
    fn failure_path_sets_loaded_and_errored_together() {
        let state = ImageState::Unloaded.on_error();
        assert!(state.is_loaded());
        assert!(state.is_errored());
        assert!(!state.shows_skeleton());
        assert_eq!(state.source("a.jpg", "b.png"), "b.png");
    }

    #[test]
    fn terminal_states_ignore_later_events() {
        let errored = ImageState::Unloaded.on_error();
        assert_eq!(errored.on_load(), errored);
        assert_eq!(errored.on_error(), errored);

        let loaded = ImageState::Unloaded.on_load();
        assert_eq!(loaded.on_error(), loaded);
    }

    #[test]
    fn style_tracks_opacity() {
        assert!(ImageState::Unloaded.image_style().starts_with("opacity: 0;"));
        assert!(ImageState::Unloaded.on_load().image_style().starts_with("opacity: 1;"));
    }
}
