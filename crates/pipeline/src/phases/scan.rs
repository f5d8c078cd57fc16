use crate::context::PassContext;
use crate::phase::PassPhase;
use staplergen_core::{PassError, PassEvent};
use std::time::Instant;
use tracing::debug;

/// Pulls every declaration visible to this pass out of the source.
pub struct ScanPhase;

impl PassPhase for ScanPhase {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn execute(&self, context: &mut PassContext) -> Result<(), PassError> {
        let start = Instant::now();
        let types = context.source.types()?;

        context.summary.types_scanned = types.len();
        context.progress.on_event(&PassEvent::DeclarationsLoaded {
            types: types.len(),
            elapsed: start.elapsed(),
        });
        debug!(types = types.len(), "Scan complete");

        context.types = types;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staplergen_core::{
        MockFileSystem, NoOpHandler, OutputMode, ResourceWriter, StaplergenConfig,
    };
    use staplergen_model::{InMemorySource, TypeDeclaration, TypeKind};
    use std::sync::Arc;

    fn type_named(name: &str) -> TypeDeclaration {
        TypeDeclaration {
            qualified_name: name.to_string(),
            kind: TypeKind::Class,
            constructors: vec![],
            methods: vec![],
            fields: vec![],
        }
    }

    #[test]
    fn test_scan_fills_context() {
        let mut ctx = PassContext::new(
            StaplergenConfig {
                log_level: "info".to_string(),
                output_mode: OutputMode::OutputDir,
            },
            ResourceWriter::new("/out", Arc::new(MockFileSystem::new())),
            Arc::new(NoOpHandler),
            Box::new(InMemorySource::new(vec![
                type_named("org.A"),
                type_named("org.B"),
            ])),
        );

        ScanPhase.execute(&mut ctx).unwrap();

        assert_eq!(ctx.types.len(), 2);
        assert_eq!(ctx.summary.types_scanned, 2);
    }
}
