//! # folio-content
//!
//! Fetch layer for folio.
//!
//! Content lives as small markdown files with front matter under a content
//! root. The loader fetches each page section, parses its front matter and
//! turns it into a section model. A section that cannot be fetched is
//! logged and skipped so the page keeps its static fallback.

pub mod loader;
pub mod source;
pub mod watcher;

pub use loader::ContentLoader;
pub use source::{ContentSource, FsSource};
pub use watcher::{ContentEvent, ContentWatcher};
