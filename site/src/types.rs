//! Site content types.
//!
//! Everything the portfolio renders comes from a [`SiteContent`] value. The
//! types are:
//!
//! - **Serializable** - content lives in a JSON file next to the site
//! - **Clone-friendly** - components take owned props
//! - **Default-able** - build partial content with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use portfolio_site::types::{Profile, Project, SiteContent};
//!
//! let content = SiteContent {
//!     profile: Profile {
//!         display_name: "Jane Doe".into(),
//!         headline: "Systems engineer".into(),
//!         ..Default::default()
//!     },
//!     projects: vec![Project {
//!         title: "tinykv".into(),
//!         summary: "An embedded key-value store".into(),
//!         tags: vec!["rust".into(), "storage".into()],
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(content.projects.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Full content of the portfolio.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    /// Who the site is about
    pub profile: Profile,
    /// Paragraphs of the about section
    pub about: Vec<String>,
    /// Project cards
    pub projects: Vec<Project>,
    /// Skills grouped by area
    pub skills: Vec<SkillGroup>,
    /// Resume timeline
    pub resume: Resume,
    /// Contact details and form target
    pub contact: ContactInfo,
    /// Links shown in the footer
    pub socials: Vec<SocialLink>,
}

/// Identity shown in the hero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name, also the seed for the generated fallback avatar
    pub display_name: String,
    /// One-line role description
    pub headline: String,
    /// Short pitch under the headline
    pub tagline: String,
    /// Remote portrait URL
    pub photo_url: String,
    /// Alternate text for the portrait
    pub photo_alt: String,
}

/// A project card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
}

/// A named group of skills.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

/// Resume timeline plus an optional downloadable CV.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub entries: Vec<ResumeEntry>,
    /// Link to a PDF or similar
    pub resume_url: Option<String>,
}

/// What a resume entry describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Work,
    Education,
}

impl EntryKind {
    /// Label used as a CSS modifier and badge text
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Work => "work",
            EntryKind::Education => "education",
        }
    }
}

/// One position or degree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeEntry {
    pub role: String,
    pub organisation: String,
    /// Free-form period, e.g. "2021 – present"
    pub period: String,
    pub highlights: Vec<String>,
    pub kind: EntryKind,
}

/// Contact details.
///
/// When `form_action` is set the contact form posts there (a form backend such
/// as Formspree); otherwise the form falls back to a `mailto:` action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub form_action: Option<String>,
    pub location: Option<String>,
}

impl ContactInfo {
    /// Target of the contact form.
    pub fn action(&self) -> String {
        match &self.form_action {
            Some(action) if !action.trim().is_empty() => action.clone(),
            _ => format!("mailto:{}", self.email),
        }
    }
}

/// A footer link (GitHub, LinkedIn, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Sections of the page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Skills,
    Resume,
    Contact,
}

impl SectionId {
    /// All sections in the order they appear on the page.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Resume,
        SectionId::Contact,
    ];

    /// DOM id of the section element, also the navigation anchor.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Resume => "resume",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Resume => "Resume",
            SectionId::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_action_prefers_form_backend() {
        let contact = ContactInfo {
            email: "jane@example.com".into(),
            form_action: Some("https://formspree.io/f/abc".into()),
            location: None,
        };
        assert_eq!(contact.action(), "https://formspree.io/f/abc");
    }

    #[test]
    fn contact_action_falls_back_to_mailto() {
        let contact = ContactInfo {
            email: "jane@example.com".into(),
            form_action: Some("   ".into()),
            location: None,
        };
        assert_eq!(contact.action(), "mailto:jane@example.com");
    }

    #[test]
    fn section_anchors_are_unique() {
        let mut anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    #[test]
    fn entry_kind_deserializes_lowercase() {
        let entry: ResumeEntry =
            serde_json::from_str(r#"{"role":"BSc","kind":"education"}"#).unwrap();
        assert_eq!(entry.kind, EntryKind::Education);
        assert!(entry.highlights.is_empty());
    }
}
