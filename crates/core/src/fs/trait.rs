//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Abstraction over the file operations a pass performs: reading the prior
/// registry and declaration input, and writing artifacts.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write a string, creating or truncating the file.
    ///
    /// A plain open/write/close with no atomic rename; a crash mid-write can
    /// leave a truncated file.
    fn write_string(&self, path: &Path, content: &str) -> Result<()>;

    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}
