//! HTML fragments for the grids and the about text.
//!
//! All content values are escaped; only the surrounding markup is literal.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use folio_core::section::{About, Project, Skill};

/// Markup for the about text block: up to two paragraphs and a resume link.
#[must_use]
pub fn about_text(about: &About) -> String {
    let mut out = String::new();
    for paragraph in [&about.description1, &about.description2].into_iter().flatten() {
        out.push_str(&format!("<p>{}</p><br>\n", text(paragraph)));
    }
    let resume = about.resume.as_deref().unwrap_or("#");
    out.push_str(&format!(
        "<div class=\"resume-section\">\n    <a href=\"{}\" download class=\"resume-btn\">\n        <i class=\"fas fa-download\"></i> Download Resume\n    </a>\n</div>\n",
        attr(resume)
    ));
    out
}

/// Markup for one skill card.
#[must_use]
pub fn skill_card(skill: &Skill) -> String {
    format!(
        "<div class=\"skill-card\">\n    <div class=\"skill-icon\">\n        <i class=\"{}\"></i>\n    </div>\n    <h3 class=\"skill-title\">{}</h3>\n    <p class=\"skill-description\">{}</p>\n</div>\n",
        attr(&skill.icon),
        text(&skill.title),
        text(&skill.description),
    )
}

/// Markup for one project card.
///
/// Projects without a `live_url` get an inert "View Details" link; without a
/// `github_url` the card links to `fallback_github`.
#[must_use]
pub fn project_card(project: &Project, fallback_github: &str) -> String {
    let tags: String = project
        .technologies
        .iter()
        .map(|tech| format!("<span class=\"tech-tag\">{}</span>", text(tech)))
        .collect();

    let primary = match &project.live_url {
        Some(url) => format!(
            "<a href=\"{}\" class=\"project-link primary-link\" target=\"_blank\">View Live</a>",
            attr(url)
        ),
        None => "<a href=\"#\" class=\"project-link primary-link\">View Details</a>".to_string(),
    };
    let github = project.github_url.as_deref().unwrap_or(fallback_github);
    let secondary = format!(
        "<a href=\"{}\" class=\"project-link secondary-link\" target=\"_blank\">GitHub</a>",
        attr(github)
    );

    format!(
        "<div class=\"project-card\">\n    <div class=\"project-image\">\n        <i class=\"{}\"></i>\n    </div>\n    <div class=\"project-content\">\n        <h3 class=\"project-title\">{}</h3>\n        <p class=\"project-description\">{}</p>\n        <div class=\"project-tech\">{}</div>\n        <div class=\"project-links\">\n            {}\n            {}\n        </div>\n    </div>\n</div>\n",
        attr(&project.icon),
        text(&project.title),
        text(&project.description),
        tags,
        primary,
        secondary,
    )
}

#[must_use]
pub fn skill_grid(skills: &[Skill]) -> String {
    skills.iter().map(skill_card).collect()
}

#[must_use]
pub fn project_grid(projects: &[Project], fallback_github: &str) -> String {
    projects
        .iter()
        .map(|p| project_card(p, fallback_github))
        .collect()
}
