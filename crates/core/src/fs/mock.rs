use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
enum MockEntry {
    File(String),
    Directory,
}

/// In-memory filesystem for tests that should not touch disk.
pub struct MockFileSystem {
    entries: RwLock<HashMap<PathBuf, MockEntry>>,
    fail_writes_under: RwLock<Option<PathBuf>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            fail_writes_under: RwLock::new(None),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref().to_path_buf();
        let mut entries = self.entries.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut entries, parent);
        }

        entries.insert(path, MockEntry::File(content.to_string()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut entries = self.entries.write().unwrap();
        Self::ensure_parents(&mut entries, path.as_ref());
        entries.insert(path.as_ref().to_path_buf(), MockEntry::Directory);
    }

    /// Make every write under `prefix` fail, for write-error-path tests.
    pub fn fail_writes_under(&self, prefix: impl AsRef<Path>) {
        *self.fail_writes_under.write().unwrap() = Some(prefix.as_ref().to_path_buf());
    }

    fn ensure_parents(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            entries
                .entry(current.clone())
                .or_insert(MockEntry::Directory);
        }
    }

    fn write_should_fail(&self, path: &Path) -> bool {
        self.fail_writes_under
            .read()
            .unwrap()
            .as_ref()
            .map(|prefix| path.starts_with(prefix))
            .unwrap_or(false)
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.entries.read().unwrap().contains_key(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(
            self.entries.read().unwrap().get(path),
            Some(MockEntry::File(_))
        )
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        match self.entries.read().unwrap().get(path) {
            Some(MockEntry::File(content)) => Ok(content.clone()),
            Some(MockEntry::Directory) => Err(anyhow!("Not a file: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn write_string(&self, path: &Path, content: &str) -> Result<()> {
        if self.write_should_fail(path) {
            return Err(anyhow!("Write refused: {:?}", path));
        }

        let mut entries = self.entries.write().unwrap();
        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut entries, parent);
        }
        entries.insert(path.to_path_buf(), MockEntry::File(content.to_string()));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        Self::ensure_parents(&mut entries, path);
        entries.insert(path.to_path_buf(), MockEntry::Directory);
        Ok(())
    }
}
