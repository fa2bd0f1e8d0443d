//! Loading and validating [`SiteContent`].
//!
//! The site ships with a built-in profile so it renders out of the box; a JSON
//! file with the same shape replaces it.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::types::{
    ContactInfo, EntryKind, Profile, Project, Resume, ResumeEntry, SectionId, SiteContent,
    SkillGroup, SocialLink,
};

/// Errors raised while loading site content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("profile display name must not be empty")]
    MissingDisplayName,
    #[error("project #{index} has no title")]
    UntitledProject { index: usize },
    #[error("duplicate project title: {0}")]
    DuplicateProject(String),
}

impl SiteContent {
    /// Content used when no content file is provided.
    pub fn builtin() -> Self {
        SiteContent {
            profile: Profile {
                display_name: "Alex Morgan".into(),
                headline: "Software engineer".into(),
                tagline: "I build fast, accessible web applications and the tooling behind them."
                    .into(),
                photo_url: "https://avatars.githubusercontent.com/u/9919?v=4".into(),
                photo_alt: "Portrait of Alex Morgan".into(),
            },
            about: vec![
                "I'm a software engineer who enjoys turning rough ideas into dependable products. \
                 Most of my work sits between the browser and the systems that feed it."
                    .into(),
                "Outside of work I contribute to open source, mentor junior developers and \
                 spend too much time tuning build pipelines."
                    .into(),
            ],
            projects: vec![
                Project {
                    title: "Trailhead".into(),
                    summary: "Offline-first hiking planner with route sharing and elevation profiles."
                        .into(),
                    tags: vec!["rust".into(), "wasm".into(), "leaflet".into()],
                    repo_url: Some("https://github.com/example/trailhead".into()),
                    live_url: Some("https://trailhead.example.com".into()),
                    image_url: None,
                },
                Project {
                    title: "Ledgerline".into(),
                    summary: "Personal finance dashboard that reconciles bank exports locally."
                        .into(),
                    tags: vec!["typescript".into(), "sqlite".into()],
                    repo_url: Some("https://github.com/example/ledgerline".into()),
                    live_url: None,
                    image_url: None,
                },
                Project {
                    title: "Shelfie".into(),
                    summary: "Book tracking app with barcode scanning and reading stats.".into(),
                    tags: vec!["react".into(), "node".into()],
                    repo_url: None,
                    live_url: Some("https://shelfie.example.com".into()),
                    image_url: None,
                },
            ],
            skills: vec![
                SkillGroup {
                    name: "Languages".into(),
                    skills: vec!["Rust".into(), "TypeScript".into(), "Python".into(), "SQL".into()],
                },
                SkillGroup {
                    name: "Frontend".into(),
                    skills: vec!["Leptos".into(), "React".into(), "CSS Grid".into(), "Accessibility".into()],
                },
                SkillGroup {
                    name: "Tooling".into(),
                    skills: vec!["Docker".into(), "GitHub Actions".into(), "Playwright".into()],
                },
            ],
            resume: Resume {
                entries: vec![
                    ResumeEntry {
                        role: "Senior Software Engineer".into(),
                        organisation: "Northwind Labs".into(),
                        period: "2021 – present".into(),
                        highlights: vec![
                            "Led the migration of the customer portal to a component library".into(),
                            "Cut median page load time by 40%".into(),
                        ],
                        kind: EntryKind::Work,
                    },
                    ResumeEntry {
                        role: "Software Engineer".into(),
                        organisation: "Contoso".into(),
                        period: "2017 – 2021".into(),
                        highlights: vec!["Built internal reporting tools used by 300+ staff".into()],
                        kind: EntryKind::Work,
                    },
                    ResumeEntry {
                        role: "BSc Computer Science".into(),
                        organisation: "University of Leeds".into(),
                        period: "2013 – 2017".into(),
                        highlights: vec![],
                        kind: EntryKind::Education,
                    },
                ],
                resume_url: Some("/assets/resume.pdf".into()),
            },
            contact: ContactInfo {
                email: "alex@example.com".into(),
                form_action: None,
                location: Some("Remote".into()),
            },
            socials: vec![
                SocialLink {
                    label: "GitHub".into(),
                    url: "https://github.com/example".into(),
                },
                SocialLink {
                    label: "LinkedIn".into(),
                    url: "https://www.linkedin.com/in/example".into(),
                },
            ],
        }
    }

    /// Parse and validate content from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Load content from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let content = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            projects = content.projects.len(),
            "loaded site content"
        );
        Ok(content)
    }

    /// Sections this content fills, in page order. Hero and contact are always
    /// present; the others are left out while they have nothing to show.
    pub fn sections(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|section| match section {
                SectionId::Hero | SectionId::Contact => true,
                SectionId::About => self.about.iter().any(|p| !p.trim().is_empty()),
                SectionId::Projects => !self.projects.is_empty(),
                SectionId::Skills => !self.skills.is_empty(),
                SectionId::Resume => {
                    !self.resume.entries.is_empty() || self.resume.resume_url.is_some()
                }
            })
            .collect()
    }

    /// Check the invariants the components rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.display_name.trim().is_empty() {
            return Err(ContentError::MissingDisplayName);
        }
        let mut seen = HashSet::new();
        for (index, project) in self.projects.iter().enumerate() {
            let title = project.title.trim();
            if title.is_empty() {
                return Err(ContentError::UntitledProject { index });
            }
            if !seen.insert(title.to_lowercase()) {
                return Err(ContentError::DuplicateProject(title.to_string()));
            }
        }
        Ok(())
    }
}
