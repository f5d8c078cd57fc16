use serde::Serialize;

/// What one pass did, for reporting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PassSummary {
    pub types_scanned: usize,
    pub constructors: usize,
    pub methods: usize,
    pub exposed_types: usize,
    pub artifacts_written: usize,
    pub skipped: usize,
    pub registry: RegistrySummary,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RegistrySummary {
    /// Names already present before this pass
    pub known: usize,
    /// Names this pass contributed that were not yet present
    pub added: usize,
    /// Names in the rewritten registry
    pub total: usize,
}
