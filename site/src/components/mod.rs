//! Leptos components of the portfolio.
//!
//! Every component is isomorphic: with the `ssr` feature it renders to static
//! HTML, with `csr` the same code runs in the browser and the event handlers
//! (image load/error, menu toggle, form submit) come alive.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (ssr only: <html>, <head>, stylesheet)
//! └── PortfolioApp
//!     └── PageShell
//!         ├── skip link → #main-content
//!         ├── Nav (header, mobile toggle)
//!         ├── <main id="main-content">
//!         │   ├── Hero
//!         │   │   └── HeroImage → HeroImageFrame
//!         │   ├── About
//!         │   ├── Projects
//!         │   │   └── ProjectCard (optional HeroImage)
//!         │   ├── Skills
//!         │   ├── ResumeSection
//!         │   └── Contact (form)
//!         └── Footer
//! ```

mod about;
mod contact;
mod document;
mod footer;
mod hero;
mod hero_image;
mod icons;
mod nav;
mod projects;
mod resume;
mod shell;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use document::{PortfolioApp, SiteDocument};
pub use footer::Footer;
pub use hero::Hero;
pub use hero_image::{HeroImage, HeroImageFrame};
pub use icons::*;
pub use nav::{NAV_LIST_ID, Nav};
pub use projects::Projects;
pub use resume::ResumeSection;
pub use shell::{MAIN_CONTENT_ID, PageShell};
pub use skills::Skills;
