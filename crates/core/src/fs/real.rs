use super::FileSystem;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn write_string(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).context(format!("Failed to write file {:?}", path))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).context(format!("Failed to create directory {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let fs = RealFileSystem::new();
        let path = temp.path().join("record.stapler");

        fs.write_string(&path, "constructor=a,b\n").unwrap();

        assert!(fs.exists(&path));
        assert!(fs.is_file(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "constructor=a,b\n");
    }

    #[test]
    fn test_write_truncates_prior_content() {
        let temp = TempDir::new().unwrap();
        let fs = RealFileSystem::new();
        let path = temp.path().join("names");

        fs.write_string(&path, "org.A\norg.B\n").unwrap();
        fs.write_string(&path, "org.A\n").unwrap();

        assert_eq!(fs.read_to_string(&path).unwrap(), "org.A\n");
    }

    #[test]
    fn test_create_dir_all() {
        let temp = TempDir::new().unwrap();
        let fs = RealFileSystem::new();
        let dir = temp.path().join("META-INF/deep/nested");

        fs.create_dir_all(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let fs = RealFileSystem::new();

        assert!(fs.read_to_string(&temp.path().join("absent")).is_err());
    }

    #[test]
    fn test_exists_on_missing_path() {
        let temp = TempDir::new().unwrap();
        let fs = RealFileSystem::new();

        assert!(!fs.exists(&temp.path().join("absent")));
    }
}
