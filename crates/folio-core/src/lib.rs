//! # folio-core
//!
//! Core types for folio, the content layer of a static portfolio page.
//!
//! This crate defines the types shared by the fetch and render crates:
//! - [`Record`] and [`FieldValue`] — flat front-matter data
//! - Front-matter parsing ([`frontmatter`])
//! - Display ordering ([`order`])
//! - Page sections ([`Hero`], [`About`], [`Contact`], [`Skill`], [`Project`])
//! - [`SiteConfig`] — which content files make up the page
//! - Error type ([`FolioError`])

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod order;
pub mod record;
pub mod section;

pub use config::{LinksConfig, SiteConfig};
pub use error::{FolioError, Result};
pub use frontmatter::parse;
pub use order::{sort_by_order, Ordered, DEFAULT_ORDER};
pub use record::{FieldValue, Record};
pub use section::{About, Contact, Hero, Project, SiteContent, Skill};
