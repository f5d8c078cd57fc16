//! The cross-pass registry of exposed type names.

use crate::summary::RegistrySummary;
use staplergen_core::{Artifact, PassError, ResourceWriter};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Well-known registry location under the output root.
pub const REGISTRY_PATH: &str = "META-INF/exposed.stapler-beans";

/// Maintains the registry artifact: read, union with this pass's discovered
/// names, rewrite sorted and deduplicated.
///
/// The merge is idempotent (an unchanged discovered set rewrites identical
/// bytes) and monotonic (a name recorded by any earlier pass is never
/// dropped, however partial the current pass's view is). The read-merge-write
/// sequence takes no lock; callers are expected to serialize passes that
/// share a registry path.
pub struct RegistryMerger<'a> {
    writer: &'a ResourceWriter,
}

impl<'a> RegistryMerger<'a> {
    pub fn new(writer: &'a ResourceWriter) -> Self {
        Self { writer }
    }

    /// Names currently on record. Absent registry means empty; a registry
    /// that exists but cannot be read is fatal - merging over a partial
    /// read would rewrite a truncated name list.
    pub fn load(&self) -> Result<BTreeSet<String>, PassError> {
        let content = self
            .writer
            .read_if_present(Path::new(REGISTRY_PATH))
            .map_err(|e| PassError::RegistryCorruption {
                path: self.writer.resolve(Path::new(REGISTRY_PATH)),
                source: e,
            })?;

        let names = match content {
            None => BTreeSet::new(),
            Some(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        };

        debug!(known = names.len(), "Registry loaded");
        Ok(names)
    }

    /// Merge and rewrite. Runs even when `discovered` is empty, which
    /// normalizes whatever content the file had.
    pub fn run(&self, discovered: &BTreeSet<String>) -> Result<RegistrySummary, PassError> {
        let known = self.load()?;

        let mut merged = known.clone();
        merged.extend(discovered.iter().cloned());

        let mut content = String::new();
        for name in &merged {
            content.push_str(name);
            content.push('\n');
        }

        self.writer
            .write(&Artifact::new(REGISTRY_PATH, content))
            .map_err(|e| PassError::RegistryWrite {
                path: self.writer.resolve(Path::new(REGISTRY_PATH)),
                source: e,
            })?;

        Ok(RegistrySummary {
            known: known.len(),
            added: merged.len() - known.len(),
            total: merged.len(),
        })
    }
}
