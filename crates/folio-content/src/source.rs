//! Where raw content text comes from.

use std::future::Future;
use std::path::{Path, PathBuf};

use folio_core::error::{FolioError, Result};

/// Supplies the raw text of a content resource.
///
/// `path` is relative to the source's root, e.g. `skills/rust.md`.
pub trait ContentSource {
    /// Fetch the full text of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Fetch`] if the resource cannot be retrieved.
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Reads content files from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for FsSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|e| FolioError::Fetch {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }
}
