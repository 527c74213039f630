//! Section loader: fetch, parse, and collect everything a page needs.

use folio_core::config::SiteConfig;
use folio_core::error::Result;
use folio_core::frontmatter;
use folio_core::order::{sort_by_order, Ordered};
use folio_core::record::Record;
use folio_core::section::{About, Contact, Hero, Project, SiteContent, Skill};

use crate::source::ContentSource;

pub const HERO_PATH: &str = "hero.md";
pub const ABOUT_PATH: &str = "about.md";
pub const CONTACT_PATH: &str = "contact.md";
pub const SKILLS_DIR: &str = "skills";
pub const PROJECTS_DIR: &str = "projects";

/// Loads page sections from a [`ContentSource`].
///
/// Every `load_*` method swallows fetch failures: they are logged at `warn`
/// and reported as `None`, never as errors.
pub struct ContentLoader<S> {
    source: S,
    config: SiteConfig,
}

impl<S: ContentSource + Sync> ContentLoader<S> {
    pub fn new(source: S, config: SiteConfig) -> Self {
        Self { source, config }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Fetch one resource and parse its front matter.
    ///
    /// # Errors
    ///
    /// Propagates the source's fetch error. Parsing itself cannot fail.
    pub async fn fetch_record(&self, path: &str) -> Result<Record> {
        let text = self.source.fetch(path).await?;
        let record = frontmatter::parse(&text);
        tracing::debug!(path, keys = record.len(), "parsed front matter");
        Ok(record)
    }

    async fn load_section<T>(&self, path: &str) -> Option<T>
    where
        T: for<'a> From<&'a Record>,
    {
        match self.fetch_record(path).await {
            Ok(record) => Some(T::from(&record)),
            Err(e) => {
                tracing::warn!(path, error = %e, "failed to load section, keeping fallback content");
                None
            }
        }
    }

    async fn load_grid<T>(&self, dir: &str, stems: &[String]) -> Option<Vec<T>>
    where
        T: for<'a> From<&'a Record> + Ordered,
    {
        let mut items = Vec::with_capacity(stems.len());
        for stem in stems {
            let path = format!("{dir}/{stem}.md");
            match self.fetch_record(&path).await {
                Ok(record) => items.push(T::from(&record)),
                Err(e) => tracing::warn!(path, error = %e, "skipping content item"),
            }
        }

        if items.is_empty() {
            tracing::warn!(dir, "no items loaded, keeping fallback content");
            return None;
        }
        sort_by_order(&mut items);
        Some(items)
    }

    pub async fn load_hero(&self) -> Option<Hero> {
        self.load_section(HERO_PATH).await
    }

    pub async fn load_about(&self) -> Option<About> {
        self.load_section(ABOUT_PATH).await
    }

    pub async fn load_contact(&self) -> Option<Contact> {
        self.load_section(CONTACT_PATH).await
    }

    /// Skills in display order; `None` if none could be fetched.
    pub async fn load_skills(&self) -> Option<Vec<Skill>> {
        self.load_grid(SKILLS_DIR, &self.config.skills).await
    }

    /// Projects in display order; `None` if none could be fetched.
    pub async fn load_projects(&self) -> Option<Vec<Project>> {
        self.load_grid(PROJECTS_DIR, &self.config.projects).await
    }

    /// Load all sections concurrently.
    pub async fn load_site(&self) -> SiteContent {
        let (hero, about, contact, skills, projects) = tokio::join!(
            self.load_hero(),
            self.load_about(),
            self.load_contact(),
            self.load_skills(),
            self.load_projects(),
        );
        SiteContent {
            hero,
            about,
            contact,
            skills,
            projects,
        }
    }
}
