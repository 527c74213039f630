//! Patches: a value to write into one slot of the rendered page.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What part of the matched element a patch writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Replace the element's text content.
    Text,
    /// Replace the element's inner HTML.
    Html,
    /// Set the named attribute.
    Attr(String),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Html => f.write_str("html"),
            Self::Attr(name) => write!(f, "attr:{name}"),
        }
    }
}

/// A single write into the page, addressed by CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub selector: String,
    pub target: Target,
    pub value: String,
}

impl Patch {
    pub fn text(selector: &str, value: impl Into<String>) -> Self {
        Self {
            selector: selector.to_string(),
            target: Target::Text,
            value: value.into(),
        }
    }

    pub fn html(selector: &str, value: impl Into<String>) -> Self {
        Self {
            selector: selector.to_string(),
            target: Target::Html,
            value: value.into(),
        }
    }

    pub fn attr(selector: &str, name: &str, value: impl Into<String>) -> Self {
        Self {
            selector: selector.to_string(),
            target: Target::Attr(name.to_string()),
            value: value.into(),
        }
    }
}
