//! Map loaded sections onto the page's slots.
//!
//! Every slot is optional: a section that was not loaded, or a field that is
//! absent, yields no patch and the page keeps whatever it already shows.

use folio_core::config::LinksConfig;
use folio_core::section::{About, Contact, Hero, SiteContent};

use crate::cards;
use crate::patch::Patch;

pub const HERO_NAME: &str = ".hero-title";
pub const HERO_TITLE: &str = ".hero-subtitle";
pub const ABOUT_TITLE: &str = "#about .section-title";
pub const ABOUT_TEXT: &str = ".about-text";
pub const ABOUT_IMAGE: &str = ".about-image img";
pub const RESUME_LINK: &str = ".resume-btn";
pub const CONTACT_TITLE: &str = "#contact .section-title";
pub const CONTACT_DESCRIPTION: &str = "#contact p";
pub const EMAIL_LINK: &str = "a[href*=\"mailto\"]";
pub const GITHUB_LINK: &str = "a[href*=\"github\"]";
pub const LINKEDIN_LINK: &str = "a[href*=\"linkedin\"]";
pub const SKILLS_GRID: &str = ".skills-grid";
pub const PROJECTS_GRID: &str = ".projects-grid";

/// Build every patch for the loaded content, section by section.
#[must_use]
pub fn hydrate(site: &SiteContent, links: &LinksConfig) -> Vec<Patch> {
    let mut patches = Vec::new();
    if let Some(hero) = &site.hero {
        patches.extend(hero_patches(hero));
    }
    if let Some(about) = &site.about {
        patches.extend(about_patches(about));
    }
    if let Some(contact) = &site.contact {
        patches.extend(contact_patches(contact, links));
    }
    if let Some(skills) = &site.skills {
        patches.push(Patch::html(SKILLS_GRID, cards::skill_grid(skills)));
    }
    if let Some(projects) = &site.projects {
        patches.push(Patch::html(
            PROJECTS_GRID,
            cards::project_grid(projects, &links.fallback_github),
        ));
    }
    tracing::debug!(count = patches.len(), "built hydration patches");
    patches
}

#[must_use]
pub fn hero_patches(hero: &Hero) -> Vec<Patch> {
    let mut patches = Vec::new();
    if let Some(name) = &hero.name {
        patches.push(Patch::text(HERO_NAME, name));
    }
    if let Some(title) = &hero.title {
        patches.push(Patch::text(HERO_TITLE, title));
    }
    patches
}

#[must_use]
pub fn about_patches(about: &About) -> Vec<Patch> {
    let mut patches = Vec::new();
    if let Some(title) = &about.title {
        patches.push(Patch::text(ABOUT_TITLE, title));
    }
    if let Some(image) = &about.image {
        patches.push(Patch::attr(ABOUT_IMAGE, "src", image));
    }
    if let Some(resume) = &about.resume {
        patches.push(Patch::attr(RESUME_LINK, "href", resume));
    }
    if about.has_description() {
        patches.push(Patch::html(ABOUT_TEXT, cards::about_text(about)));
    }
    patches
}

#[must_use]
pub fn contact_patches(contact: &Contact, links: &LinksConfig) -> Vec<Patch> {
    let mut patches = Vec::new();
    if let Some(title) = &contact.title {
        patches.push(Patch::text(CONTACT_TITLE, title));
    }
    if let Some(description) = &contact.description {
        patches.push(Patch::text(CONTACT_DESCRIPTION, description));
    }
    if let Some(email) = &contact.email {
        patches.push(Patch::attr(EMAIL_LINK, "href", mailto(email, links)));
        patches.push(Patch::text(EMAIL_LINK, email));
    }
    if let Some(github) = &contact.github {
        patches.push(Patch::attr(GITHUB_LINK, "href", github));
        patches.push(Patch::text(GITHUB_LINK, display_url(github)));
    }
    if let Some(linkedin) = &contact.linkedin {
        patches.push(Patch::attr(LINKEDIN_LINK, "href", linkedin));
        patches.push(Patch::text(LINKEDIN_LINK, display_url(linkedin)));
    }
    patches
}

/// `mailto:` link with the configured subject and body, percent-encoded.
#[must_use]
pub fn mailto(email: &str, links: &LinksConfig) -> String {
    let mut params = Vec::new();
    if let Some(subject) = &links.mail_subject {
        params.push(format!("subject={}", urlencoding::encode(subject)));
    }
    if let Some(body) = &links.mail_body {
        params.push(format!("body={}", urlencoding::encode(body)));
    }
    if params.is_empty() {
        format!("mailto:{email}")
    } else {
        format!("mailto:{email}?{}", params.join("&"))
    }
}

/// Link text for a profile URL: the first `https://` is dropped.
#[must_use]
pub fn display_url(url: &str) -> String {
    url.replacen("https://", "", 1)
}
