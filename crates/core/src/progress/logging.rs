//! Logging-based pass event handler

use super::{PassEvent, ProgressHandler};
use tracing::{error, info, warn};

/// Handler that reports pass events through tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_event(&self, event: &PassEvent) {
        match event {
            PassEvent::Started { output_root } => {
                info!(root = %output_root, "Starting extraction pass");
            }
            PassEvent::DeclarationsLoaded { types, elapsed } => {
                info!(
                    types,
                    elapsed_ms = elapsed.as_millis(),
                    "Declarations loaded"
                );
            }
            PassEvent::ArtifactGenerated { path } => {
                info!(path = %path, "Generating artifact");
            }
            PassEvent::ElementSkipped { owner, reason } => {
                warn!(owner = %owner, reason = %reason, "Element skipped");
            }
            PassEvent::RegistryMerged {
                known,
                added,
                total,
            } => {
                info!(known, added, total, "Registry merged");
            }
            PassEvent::Completed {
                artifacts,
                skipped,
                elapsed,
            } => {
                if *skipped > 0 {
                    warn!(
                        artifacts,
                        skipped,
                        elapsed_ms = elapsed.as_millis(),
                        "Pass complete with skipped elements"
                    );
                } else {
                    info!(
                        artifacts,
                        elapsed_ms = elapsed.as_millis(),
                        "Pass complete"
                    );
                }
            }
            PassEvent::Failed { error: message } => {
                error!(error = %message, "Pass failed");
            }
        }
    }
}
