//! Pass event definitions and the handler trait

use std::time::Duration;

/// Events emitted while a pass runs.
///
/// This is the single channel through which the pass talks to whatever build
/// tool is driving it: notices for generated artifacts, warnings for skipped
/// elements, and a terminal completed/failed event.
#[derive(Debug, Clone)]
pub enum PassEvent {
    /// Pass started
    Started { output_root: String },

    /// Declarations pulled from the source
    DeclarationsLoaded { types: usize, elapsed: Duration },

    /// One artifact written (notice severity)
    ArtifactGenerated { path: String },

    /// One element skipped after a non-fatal failure (warning severity)
    ElementSkipped { owner: String, reason: String },

    /// Registry rewritten
    RegistryMerged {
        known: usize,
        added: usize,
        total: usize,
    },

    /// Pass finished successfully
    Completed {
        artifacts: usize,
        skipped: usize,
        elapsed: Duration,
    },

    /// Pass aborted (error severity)
    Failed { error: String },
}

/// Trait for handling pass events
pub trait ProgressHandler: Send + Sync {
    /// Called when a pass event occurs
    fn on_event(&self, event: &PassEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_event(&self, _event: &PassEvent) {
        // Intentionally empty
    }
}
