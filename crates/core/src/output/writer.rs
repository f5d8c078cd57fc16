use crate::fs::FileSystem;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// One output resource: a path relative to the output root, plus its full
/// text content. Written once per pass, never appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Writes artifacts under a single root directory.
///
/// The root is either a build-tool-managed resource root or an explicit
/// output directory; the writer does not care which. Parent directories are
/// created on demand. Writes are plain create/write/close.
pub struct ResourceWriter {
    root: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl ResourceWriter {
    pub fn new(root: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            root: root.into(),
            fs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative resource path against the root.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Write one artifact, creating missing parent directories.
    ///
    /// Returns the absolute path written.
    pub fn write(&self, artifact: &Artifact) -> Result<PathBuf> {
        let target = self.resolve(&artifact.path);

        if let Some(parent) = target.parent() {
            self.fs
                .create_dir_all(parent)
                .with_context(|| format!("Failed to create parent of {:?}", target))?;
        }

        self.fs
            .write_string(&target, &artifact.content)
            .with_context(|| format!("Failed to write artifact {:?}", target))?;

        debug!(path = %target.display(), bytes = artifact.content.len(), "Artifact written");
        Ok(target)
    }

    /// Read a resource under the root, if it exists.
    pub fn read_if_present(&self, relative: &Path) -> Result<Option<String>> {
        let target = self.resolve(relative);
        if !self.fs.exists(&target) {
            return Ok(None);
        }
        self.fs.read_to_string(&target).map(Some)
    }
}
