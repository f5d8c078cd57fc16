use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for one extraction pass.
///
/// Per-element artifact write failures are reported through the diagnostics
/// channel and the element is skipped; they only appear here when a caller
/// chooses to surface them. Registry failures are always fatal: continuing
/// after a partial registry read would risk rewriting a truncated name list.
#[derive(Debug, Error)]
pub enum PassError {
    #[error("declaration input {path} could not be read: {source}")]
    DeclarationsUnreadable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("declaration input {path} could not be parsed: {source}")]
    InvalidDeclarations {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write artifact {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("registry {path} exists but could not be read: {source}")]
    RegistryCorruption {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to rewrite registry {path}: {source}")]
    RegistryWrite {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl PassError {
    /// Fatal errors abort the whole pass; the rest are reported and skipped.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, PassError::ArtifactWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_artifact_write_is_not_fatal() {
        let err = PassError::ArtifactWrite {
            path: PathBuf::from("org/acme/Foo.stapler"),
            source: anyhow!("disk full"),
        };
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_registry_errors_are_fatal() {
        let corrupt = PassError::RegistryCorruption {
            path: PathBuf::from("META-INF/exposed.stapler-beans"),
            source: anyhow!("invalid UTF-8"),
        };
        let write = PassError::RegistryWrite {
            path: PathBuf::from("META-INF/exposed.stapler-beans"),
            source: anyhow!("permission denied"),
        };
        assert!(corrupt.is_fatal());
        assert!(write.is_fatal());
    }

    #[test]
    fn test_display_names_the_offending_path() {
        let err = PassError::RegistryCorruption {
            path: PathBuf::from("META-INF/exposed.stapler-beans"),
            source: anyhow!("bad bytes"),
        };
        let msg = err.to_string();
        assert!(msg.contains("META-INF/exposed.stapler-beans"));
        assert!(msg.contains("could not be read"));
    }
}
