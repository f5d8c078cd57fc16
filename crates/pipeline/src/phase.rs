use crate::context::PassContext;
use staplergen_core::PassError;

/// One step of a pass. Phases run in a fixed order, synchronously; a phase
/// returning an error aborts the pass.
pub trait PassPhase {
    fn name(&self) -> &'static str;

    fn execute(&self, context: &mut PassContext) -> Result<(), PassError>;
}
