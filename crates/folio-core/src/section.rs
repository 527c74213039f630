//! Page sections built from parsed front-matter records.
//!
//! Each section reads the keys it knows about and ignores the rest. Single
//! sections keep absent fields as `None` so the page keeps its static text;
//! cards in a grid fall back to placeholder text instead.

use serde::Serialize;

use crate::order::{parse_order, Ordered};
use crate::record::Record;

const DEFAULT_SKILL_ICON: &str = "fas fa-code";
const DEFAULT_SKILL_TITLE: &str = "Skill";
const DEFAULT_PROJECT_ICON: &str = "fas fa-project-diagram";
const DEFAULT_PROJECT_TITLE: &str = "Project";

fn owned(record: &Record, key: &str) -> Option<String> {
    record.text(key).map(str::to_string)
}

/// Hero banner: `hero.md`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hero {
    pub name: Option<String>,
    pub title: Option<String>,
}

impl From<&Record> for Hero {
    fn from(record: &Record) -> Self {
        Self {
            name: owned(record, "name"),
            title: owned(record, "title"),
        }
    }
}

/// About section: `about.md`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct About {
    pub title: Option<String>,
    pub image: Option<String>,
    pub resume: Option<String>,
    pub description1: Option<String>,
    pub description2: Option<String>,
}

impl About {
    /// Whether either description paragraph is present.
    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description1.is_some() || self.description2.is_some()
    }
}

impl From<&Record> for About {
    fn from(record: &Record) -> Self {
        Self {
            title: owned(record, "title"),
            image: owned(record, "image"),
            resume: owned(record, "resume"),
            description1: owned(record, "description1"),
            description2: owned(record, "description2"),
        }
    }
}

/// Contact section: `contact.md`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    pub title: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl From<&Record> for Contact {
    fn from(record: &Record) -> Self {
        Self {
            title: owned(record, "title"),
            description: owned(record, "description"),
            email: owned(record, "email"),
            github: owned(record, "github"),
            linkedin: owned(record, "linkedin"),
        }
    }
}

/// One card in the skills grid: `skills/<stem>.md`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub order: f64,
}

impl From<&Record> for Skill {
    fn from(record: &Record) -> Self {
        Self {
            icon: record.text("icon").unwrap_or(DEFAULT_SKILL_ICON).to_string(),
            title: record.text("title").unwrap_or(DEFAULT_SKILL_TITLE).to_string(),
            description: record.scalar("description").unwrap_or_default().to_string(),
            order: parse_order(record.scalar("order")),
        }
    }
}

impl Ordered for Skill {
    fn order(&self) -> f64 {
        self.order
    }
}

/// One card in the projects grid: `projects/<stem>.md`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub order: f64,
}

impl From<&Record> for Project {
    fn from(record: &Record) -> Self {
        Self {
            icon: record.text("icon").unwrap_or(DEFAULT_PROJECT_ICON).to_string(),
            title: record.text("title").unwrap_or(DEFAULT_PROJECT_TITLE).to_string(),
            description: record.scalar("description").unwrap_or_default().to_string(),
            technologies: record
                .list("technologies")
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
            live_url: owned(record, "live_url"),
            github_url: owned(record, "github_url"),
            order: parse_order(record.scalar("order")),
        }
    }
}

impl Ordered for Project {
    fn order(&self) -> f64 {
        self.order
    }
}

/// Everything the loader managed to fetch for one page.
///
/// A `None` section (or grid) was not fetched; its slots keep their static
/// content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteContent {
    pub hero: Option<Hero>,
    pub about: Option<About>,
    pub contact: Option<Contact>,
    pub skills: Option<Vec<Skill>>,
    pub projects: Option<Vec<Project>>,
}
