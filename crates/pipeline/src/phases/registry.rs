use crate::context::PassContext;
use crate::phase::PassPhase;
use crate::registry::RegistryMerger;
use staplergen_core::{PassError, PassEvent};

/// Merges the staged owner names into the persistent registry.
///
/// Runs every pass, even with nothing staged, so the registry file is
/// always left sorted and deduplicated. Failures here are fatal.
pub struct RegistryPhase;

impl PassPhase for RegistryPhase {
    fn name(&self) -> &'static str {
        "registry"
    }

    fn execute(&self, context: &mut PassContext) -> Result<(), PassError> {
        let stats = RegistryMerger::new(&context.writer).run(&context.pending_names)?;

        context.summary.registry = stats;
        context.progress.on_event(&PassEvent::RegistryMerged {
            known: stats.known,
            added: stats.added,
            total: stats.total,
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::REGISTRY_PATH;
    use staplergen_core::{
        FileSystem, MockFileSystem, NoOpHandler, OutputMode, ResourceWriter, StaplergenConfig,
    };
    use staplergen_model::InMemorySource;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn context_with(fs: Arc<MockFileSystem>) -> PassContext {
        PassContext::new(
            StaplergenConfig {
                log_level: "info".to_string(),
                output_mode: OutputMode::OutputDir,
            },
            ResourceWriter::new("/out", fs),
            Arc::new(NoOpHandler),
            Box::new(InMemorySource::new(vec![])),
        )
    }

    #[test]
    fn test_staged_names_reach_the_registry() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("/out/META-INF/exposed.stapler-beans", "org.A\n");

        let mut ctx = context_with(fs.clone());
        ctx.pending_names.insert("org.B".to_string());

        RegistryPhase.execute(&mut ctx).unwrap();

        assert_eq!(
            fs.read_to_string(&PathBuf::from("/out").join(REGISTRY_PATH))
                .unwrap(),
            "org.A\norg.B\n"
        );
        assert_eq!(ctx.summary.registry.total, 2);
    }

    #[test]
    fn test_corrupt_registry_aborts() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_dir("/out/META-INF/exposed.stapler-beans");

        let mut ctx = context_with(fs);
        ctx.pending_names.insert("org.B".to_string());

        let err = RegistryPhase.execute(&mut ctx).unwrap_err();
        assert!(matches!(err, PassError::RegistryCorruption { .. }));
    }
}
