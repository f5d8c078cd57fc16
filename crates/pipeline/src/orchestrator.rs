use crate::context::PassContext;
use crate::phase::PassPhase;
use crate::phases::{BeanPhase, ConstructorPhase, MethodPhase, RegistryPhase, ScanPhase};
use crate::summary::PassSummary;
use staplergen_core::{PassError, PassEvent};
use std::time::Instant;
use tracing::info;

/// Drives one pass: scan, extract, write, merge.
///
/// Write failures inside the extraction phases skip the affected element
/// and keep going; a scan or registry failure aborts the pass.
pub struct PassOrchestrator;

impl Default for PassOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl PassOrchestrator {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, context: &mut PassContext) -> Result<PassSummary, PassError> {
        let start = Instant::now();
        context.progress.on_event(&PassEvent::Started {
            output_root: context.writer.root().display().to_string(),
        });
        info!(
            root = %context.writer.root().display(),
            "Starting extraction pass"
        );

        let phases: Vec<Box<dyn PassPhase>> = vec![
            Box::new(ScanPhase),
            Box::new(ConstructorPhase),
            Box::new(MethodPhase),
            Box::new(BeanPhase),
            Box::new(RegistryPhase),
        ];

        for phase in phases {
            let phase_name = phase.name();
            let phase_start = Instant::now();

            if let Err(e) = phase.execute(context) {
                context.progress.on_event(&PassEvent::Failed {
                    error: e.to_string(),
                });
                return Err(e);
            }

            info!(
                phase = %phase_name,
                duration_ms = phase_start.elapsed().as_millis(),
                "Phase complete"
            );
        }

        context.progress.on_event(&PassEvent::Completed {
            artifacts: context.summary.artifacts_written,
            skipped: context.summary.skipped,
            elapsed: start.elapsed(),
        });
        info!(
            artifacts = context.summary.artifacts_written,
            skipped = context.summary.skipped,
            total_time_ms = start.elapsed().as_millis(),
            "Pass complete"
        );

        Ok(std::mem::take(&mut context.summary))
    }
}
