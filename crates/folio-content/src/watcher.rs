//! Content directory watcher for re-hydrating the page on edits.
//!
//! Uses the `notify` crate for cross-platform file system events
//! (FSEvents on macOS, inotify on Linux, ReadDirectoryChanges on Windows).

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use folio_core::error::FolioError;

/// Events emitted by the content watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    /// A markdown file was created or modified.
    Changed(PathBuf),
    /// A markdown file was deleted.
    Removed(PathBuf),
}

impl ContentEvent {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Changed(path) | Self::Removed(path) => path,
        }
    }
}

/// Watches a content directory for markdown changes and emits events.
pub struct ContentWatcher {
    _watcher: RecommendedWatcher,
    receiver: mpsc::Receiver<ContentEvent>,
}

impl ContentWatcher {
    /// Start watching a content directory for changes.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Watch`] if the watcher cannot be created.
    pub fn start(content_root: &Path) -> Result<Self, FolioError> {
        let (tx, rx) = mpsc::channel();
        let root = content_root.to_path_buf();

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(error = %e, "content watcher error");
                    return;
                }
            };
            for path in &event.paths {
                if !is_content_file(&root, path) {
                    continue;
                }
                let content_event = match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) => {
                        ContentEvent::Changed(path.clone())
                    }
                    EventKind::Remove(_) => ContentEvent::Removed(path.clone()),
                    _ => continue,
                };
                let _ = tx.send(content_event);
            }
        })
        .map_err(|e| FolioError::Watch(e.to_string()))?;

        watcher
            .watch(content_root, RecursiveMode::Recursive)
            .map_err(|e| FolioError::Watch(e.to_string()))?;

        tracing::info!(root = %content_root.display(), "watching content");
        Ok(Self {
            _watcher: watcher,
            receiver: rx,
        })
    }

    /// Wait for the next event, up to `timeout`.
    ///
    /// Returns `None` if no event is available within the timeout.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ContentEvent> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<ContentEvent> {
        self.receiver.try_recv().ok()
    }

    /// Discard queued events, returning how many were dropped.
    ///
    /// One save usually fires several events; callers re-hydrate once and
    /// drain the rest.
    pub fn drain(&self) -> usize {
        self.receiver.try_iter().count()
    }
}

/// Markdown files outside hidden directories.
fn is_content_file(root: &Path, path: &Path) -> bool {
    if path.extension().and_then(|e| e.to_str()) != Some("md") {
        return false;
    }
    let hidden = path
        .strip_prefix(root)
        .ok()
        .and_then(|rel| rel.components().next())
        .and_then(|c| c.as_os_str().to_str())
        .is_some_and(|s| s.starts_with('.'));
    !hidden
}
