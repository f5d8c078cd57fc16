//! Declaration sources: where a pass gets its types from.

use crate::declaration::TypeDeclaration;
use staplergen_core::fs::FileSystem;
use staplergen_core::PassError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Supplies every type declaration visible to one pass, in input order.
///
/// This is the seam to the compiler front end. A source is read exactly once
/// per pass; repeated passes may see different (partial) views of the same
/// codebase.
pub trait DeclarationSource {
    fn types(&self) -> Result<Vec<TypeDeclaration>, PassError>;
}

/// Reads a JSON declaration dump: an array of type declarations as emitted
/// by the compiler-side exporter.
pub struct JsonDeclarationSource {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl JsonDeclarationSource {
    pub fn new(path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeclarationSource for JsonDeclarationSource {
    fn types(&self) -> Result<Vec<TypeDeclaration>, PassError> {
        let content =
            self.fs
                .read_to_string(&self.path)
                .map_err(|e| PassError::DeclarationsUnreadable {
                    path: self.path.clone(),
                    source: e,
                })?;

        let types: Vec<TypeDeclaration> =
            serde_json::from_str(&content).map_err(|e| PassError::InvalidDeclarations {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(path = %self.path.display(), types = types.len(), "Declaration dump parsed");
        Ok(types)
    }
}

/// Fixed in-memory source for tests.
pub struct InMemorySource {
    types: Vec<TypeDeclaration>,
}

impl InMemorySource {
    pub fn new(types: Vec<TypeDeclaration>) -> Self {
        Self { types }
    }
}

impl DeclarationSource for InMemorySource {
    fn types(&self) -> Result<Vec<TypeDeclaration>, PassError> {
        Ok(self.types.clone())
    }
}
