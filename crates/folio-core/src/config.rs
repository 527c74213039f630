//! Site configuration loaded from `folio.toml`.
//!
//! ```toml
//! content_root = "content"
//! skills = ["frontend-development", "backend-development"]
//! projects = ["ecommerce-platform"]
//!
//! [links]
//! fallback_github = "https://github.com/someone"
//! mail_subject = "Hello"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "folio.toml";

/// Which content files make up the page, and the link settings the render
/// layer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory that content paths are resolved against.
    pub content_root: PathBuf,
    /// Skill file stems, fetched as `skills/<stem>.md`.
    pub skills: Vec<String>,
    /// Project file stems, fetched as `projects/<stem>.md`.
    pub projects: Vec<String>,
    pub links: LinksConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("content"),
            skills: [
                "frontend-development",
                "backend-development",
                "magento-development",
                "full-stack-solutions",
            ]
            .map(String::from)
            .into(),
            projects: [
                "ecommerce-platform",
                "hospital-management-system",
                "laravel-web-application",
            ]
            .map(String::from)
            .into(),
            links: LinksConfig::default(),
        }
    }
}

/// Link targets that do not come from content files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// GitHub link for project cards without a `github_url`.
    pub fallback_github: String,
    /// `subject` query parameter for the contact mailto link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_subject: Option<String>,
    /// `body` query parameter for the contact mailto link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_body: Option<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            fallback_github: "https://github.com/krishnan7027".to_string(),
            mail_subject: None,
            mail_body: None,
        }
    }
}

impl SiteConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if the TOML is malformed or has unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| FolioError::Config(e.to_string()))
    }

    /// Load a config file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if the file exists but cannot be read
    /// or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "loaded site config");
                Self::from_toml_str(&text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no site config, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(FolioError::Config(format!("{}: {e}", path.display()))),
        }
    }

    /// Serialize back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Serialization`] if the config cannot be encoded.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FolioError::Serialization(e.to_string()))
    }
}
