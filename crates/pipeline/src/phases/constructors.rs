use crate::context::PassContext;
use crate::phase::PassPhase;
use staplergen_core::PassError;
use staplergen_extract::params::collect_constructors;
use staplergen_extract::MarkedConstructor;
use tracing::debug;

/// Writes one parameter record per marked constructor.
pub struct ConstructorPhase;

impl PassPhase for ConstructorPhase {
    fn name(&self) -> &'static str {
        "constructors"
    }

    fn execute(&self, context: &mut PassContext) -> Result<(), PassError> {
        let marked: Vec<MarkedConstructor> = context
            .types
            .iter()
            .filter(|t| t.is_class())
            .flat_map(collect_constructors)
            .collect();

        context.summary.constructors = marked.len();
        debug!(marked = marked.len(), "Marked constructors collected");

        for record in &marked {
            context.emit(&record.owner, &record.to_artifact());
        }

        Ok(())
    }
}
