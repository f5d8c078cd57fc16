use crate::context::PassContext;
use crate::phase::PassPhase;
use staplergen_core::PassError;
use staplergen_extract::params::collect_methods;
use staplergen_extract::MarkedMethod;
use tracing::debug;

/// Writes one parameter record per marked method, under the owning type's
/// directory.
pub struct MethodPhase;

impl PassPhase for MethodPhase {
    fn name(&self) -> &'static str {
        "methods"
    }

    fn execute(&self, context: &mut PassContext) -> Result<(), PassError> {
        let marked: Vec<MarkedMethod> = context
            .types
            .iter()
            .filter(|t| t.is_class())
            .flat_map(collect_methods)
            .collect();

        context.summary.methods = marked.len();
        debug!(marked = marked.len(), "Marked methods collected");

        for record in &marked {
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
    use staplergen_model::{InMemorySource, MethodDecl, ParamDecl, TypeDeclaration, TypeKind};
    use std::path::Path;
    use std::sync::Arc;

    #[test]
    fn test_each_marked_method_gets_its_own_record() {
        let decl = TypeDeclaration {
            qualified_name: "org.acme.Api".to_string(),
            kind: TypeKind::Class,
            constructors: vec![],
            methods: vec![
                MethodDecl {
                    name: "doSubmit".to_string(),
                    parameters: vec![ParamDecl {
                        name: "value".to_string(),
                        annotations: vec!["QueryParameter".to_string()],
                    }],
                    annotations: vec!["WebMethod".to_string()],
                    doc: None,
                },
                MethodDecl {
                    name: "doCheck".to_string(),
                    parameters: vec![
                        ParamDecl {
                            name: "name".to_string(),
                            annotations: vec!["QueryParameter".to_string()],
                        },
                        ParamDecl {
                            name: "strict".to_string(),
                            annotations: vec![],
                        },
                    ],
                    annotations: vec!["WebMethod".to_string()],
                    doc: None,
                },
            ],
            fields: vec![],
        };

        let fs = Arc::new(MockFileSystem::new());
        let mut ctx = PassContext::new(
            StaplergenConfig {
                log_level: "info".to_string(),
                output_mode: OutputMode::OutputDir,
            },
            ResourceWriter::new("/out", fs.clone()),
            Arc::new(NoOpHandler),
            Box::new(InMemorySource::new(vec![])),
        );
        ctx.types = vec![decl];

        MethodPhase.execute(&mut ctx).unwrap();

        assert_eq!(ctx.summary.methods, 2);
        assert_eq!(
            fs.read_to_string(Path::new("/out/org/acme/Api/doSubmit.stapler"))
                .unwrap(),
            "constructor=value\n"
        );
        assert_eq!(
            fs.read_to_string(Path::new("/out/org/acme/Api/doCheck.stapler"))
                .unwrap(),
            "constructor=name,strict\n"
        );
    }
}
