use std::env;
use std::fmt;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";

/// How artifact paths are rooted.
///
/// Both strategies feed the same writer; the distinction is only where the
/// root directory comes from: a build-tool-managed resource root, or an
/// explicit output directory given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    ResourceRoot,
    OutputDir,
}

impl OutputMode {
    pub fn from_env() -> Self {
        let mode = env::var("STAPLERGEN_OUTPUT_MODE").ok();

        match mode.as_deref() {
            Some(m) if m.eq_ignore_ascii_case("resource-root") => OutputMode::ResourceRoot,
            _ => OutputMode::OutputDir,
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::ResourceRoot => write!(f, "resource-root"),
            OutputMode::OutputDir => write!(f, "output-dir"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct StaplergenConfig {
    pub log_level: String,
    pub output_mode: OutputMode,
}

impl Default for StaplergenConfig {
    fn default() -> Self {
        let log_level = env::var("STAPLERGEN_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            log_level,
            output_mode: OutputMode::from_env(),
        }
    }
}

impl StaplergenConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }
}

impl fmt::Display for StaplergenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Staplergen Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Output Mode: {}", self.output_mode)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        env::remove_var("STAPLERGEN_LOG_LEVEL");
        env::remove_var("STAPLERGEN_OUTPUT_MODE");

        let config = StaplergenConfig::default();

        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.output_mode, OutputMode::OutputDir);
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = [
            EnvGuard::set("STAPLERGEN_LOG_LEVEL", "DEBUG"),
            EnvGuard::set("STAPLERGEN_OUTPUT_MODE", "resource-root"),
        ];

        let config = StaplergenConfig::default();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_mode, OutputMode::ResourceRoot);
    }

    #[test]
    #[serial]
    fn test_output_mode_invalid_defaults_to_output_dir() {
        let _guard = EnvGuard::set("STAPLERGEN_OUTPUT_MODE", "somewhere-else");

        assert_eq!(OutputMode::from_env(), OutputMode::OutputDir);
    }

    #[test]
    #[serial]
    fn test_output_mode_case_insensitive() {
        let _guard = EnvGuard::set("STAPLERGEN_OUTPUT_MODE", "RESOURCE-ROOT");

        assert_eq!(OutputMode::from_env(), OutputMode::ResourceRoot);
    }

    #[test]
    fn test_validation_valid() {
        let config = StaplergenConfig {
            log_level: "info".to_string(),
            output_mode: OutputMode::OutputDir,
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let config = StaplergenConfig {
            log_level: "loud".to_string(),
            output_mode: OutputMode::OutputDir,
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_display() {
        let config = StaplergenConfig {
            log_level: "info".to_string(),
            output_mode: OutputMode::ResourceRoot,
        };
        let display = format!("{}", config);
        assert!(display.contains("Staplergen Configuration:"));
        assert!(display.contains("resource-root"));
    }
}
