//! Mutable state threaded through one pass.

use crate::summary::PassSummary;
use staplergen_core::{Artifact, PassEvent, ProgressHandler, ResourceWriter, StaplergenConfig};
use staplergen_model::{DeclarationSource, TypeDeclaration};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Everything a phase needs, passed explicitly.
///
/// A pass has no state outside this struct: no statics, no thread-locals.
pub struct PassContext {
    pub config: StaplergenConfig,
    pub writer: ResourceWriter,
    pub progress: Arc<dyn ProgressHandler>,
    pub source: Box<dyn DeclarationSource>,

    /// Filled by the scan phase, read by the rest.
    pub types: Vec<TypeDeclaration>,
    /// Owner names staged for the registry merge.
    pub pending_names: BTreeSet<String>,
    pub summary: PassSummary,
}

impl PassContext {
    pub fn new(
        config: StaplergenConfig,
        writer: ResourceWriter,
        progress: Arc<dyn ProgressHandler>,
        source: Box<dyn DeclarationSource>,
    ) -> Self {
        Self {
            config,
            writer,
            progress,
            source,
            types: Vec::new(),
            pending_names: BTreeSet::new(),
            summary: PassSummary::default(),
        }
    }

    /// Write one artifact; a failure skips the element, not the pass.
    ///
    /// Returns whether the artifact landed.
    pub fn emit(&mut self, owner: &str, artifact: &Artifact) -> bool {
        self.progress.on_event(&PassEvent::ArtifactGenerated {
            path: artifact.path.display().to_string(),
        });

        match self.writer.write(artifact) {
            Ok(_) => {
                self.summary.artifacts_written += 1;
                true
            }
            Err(e) => {
                self.progress.on_event(&PassEvent::ElementSkipped {
                    owner: owner.to_string(),
                    reason: format!("{:#}", e),
                });
                self.summary.skipped += 1;
                false
            }
        }
    }
}
