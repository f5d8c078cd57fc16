use crate::context::PassContext;
use crate::phase::PassPhase;
use staplergen_core::PassError;
use staplergen_extract::beans::collect_exposed;
use staplergen_extract::ExposedType;
use tracing::debug;

/// Writes one documentation record per exposed type and stages every
/// exposed owner for the registry merge.
///
/// An owner is staged even when its record write fails, and even when it
/// has no documented members: carrying a marker is what puts a type in the
/// registry, documentation text is optional.
pub struct BeanPhase;

impl PassPhase for BeanPhase {
    fn name(&self) -> &'static str {
        "beans"
    }

    fn execute(&self, context: &mut PassContext) -> Result<(), PassError> {
        let exposed: Vec<ExposedType> = context
            .types
            .iter()
            .filter(|t| t.is_class())
            .filter_map(collect_exposed)
            .collect();

        context.summary.exposed_types = exposed.len();
        debug!(exposed = exposed.len(), "Exposed types collected");

        for record in &exposed {
            context.pending_names.insert(record.owner.clone());
            context.emit(&record.owner, &record.to_artifact());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staplergen_core::{
        FileSystem, MockFileSystem, NoOpHandler, OutputMode, ResourceWriter, StaplergenConfig,
    };
    use staplergen_model::{FieldDecl, InMemorySource, TypeDeclaration, TypeKind};
    use std::path::Path;
    use std::sync::Arc;

    fn exposed_type(name: &str, field_doc: Option<&str>) -> TypeDeclaration {
        TypeDeclaration {
            qualified_name: name.to_string(),
            kind: TypeKind::Class,
            constructors: vec![],
            methods: vec![],
            fields: vec![FieldDecl {
                name: "name".to_string(),
                annotations: vec!["Exported".to_string()],
                doc: field_doc.map(|s| s.to_string()),
            }],
        }
    }

    fn run_phase(types: Vec<TypeDeclaration>, fs: Arc<MockFileSystem>) -> PassContext {
        let mut ctx = PassContext::new(
            StaplergenConfig {
                log_level: "info".to_string(),
                output_mode: OutputMode::OutputDir,
            },
            ResourceWriter::new("/out", fs),
            Arc::new(NoOpHandler),
            Box::new(InMemorySource::new(vec![])),
        );
        ctx.types = types;
        BeanPhase.execute(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_documented_members_land_in_the_record() {
        let fs = Arc::new(MockFileSystem::new());
        let ctx = run_phase(vec![exposed_type("org.acme.Bar", Some("the name"))], fs.clone());

        assert_eq!(ctx.summary.exposed_types, 1);
        assert_eq!(
            fs.read_to_string(Path::new("/out/org/acme/Bar.javadoc"))
                .unwrap(),
            "name=the\\ name\n"
        );
        assert!(ctx.pending_names.contains("org.acme.Bar"));
    }

    #[test]
    fn test_undocumented_owner_still_staged_for_registry() {
        let fs = Arc::new(MockFileSystem::new());
        let ctx = run_phase(vec![exposed_type("org.acme.Bare", None)], fs.clone());

        assert!(ctx.pending_names.contains("org.acme.Bare"));
        // the record exists but is empty
        assert_eq!(
            fs.read_to_string(Path::new("/out/org/acme/Bare.javadoc"))
                .unwrap(),
            ""
        );
    }

    #[test]
    fn test_failed_record_write_still_stages_the_owner() {
        let fs = Arc::new(MockFileSystem::new());
        fs.fail_writes_under("/out/org");
        let ctx = run_phase(vec![exposed_type("org.acme.Bar", Some("doc"))], fs);

        assert_eq!(ctx.summary.skipped, 1);
        assert!(ctx.pending_names.contains("org.acme.Bar"));
    }

    #[test]
    fn test_unexposed_types_are_not_staged() {
        let fs = Arc::new(MockFileSystem::new());
        let plain = TypeDeclaration {
            qualified_name: "org.acme.Plain".to_string(),
            kind: TypeKind::Class,
            constructors: vec![],
            methods: vec![],
            fields: vec![],
        };

        let ctx = run_phase(vec![plain], fs);
        assert!(ctx.pending_names.is_empty());
        assert_eq!(ctx.summary.exposed_types, 0);
    }
}
