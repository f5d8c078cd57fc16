//! Summary formatting for the staplergen CLI.

use anyhow::{Context, Result};
use staplergen_pipeline::PassSummary;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

/// Formats pass summaries and registry listings
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_summary(&self, summary: &PassSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(summary)
                .context("Failed to serialize summary to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(summary).context("Failed to serialize summary to YAML")
            }
            OutputFormat::Human => Ok(Self::human_summary(summary)),
        }
    }

    pub fn format_registry(&self, names: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(names).context("Failed to serialize registry to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(names).context("Failed to serialize registry to YAML")
            }
            OutputFormat::Human => Ok(names.join("\n")),
        }
    }

    fn human_summary(summary: &PassSummary) -> String {
        let mut out = String::new();
        out.push_str("Extraction pass complete\n");
        out.push_str(&format!("  Types scanned:      {}\n", summary.types_scanned));
        out.push_str(&format!("  Constructor records: {}\n", summary.constructors));
        out.push_str(&format!("  Method records:      {}\n", summary.methods));
        out.push_str(&format!("  Exposed types:       {}\n", summary.exposed_types));
        out.push_str(&format!(
            "  Artifacts written:   {}\n",
            summary.artifacts_written
        ));
        if summary.skipped > 0 {
            out.push_str(&format!("  Skipped:             {}\n", summary.skipped));
        }
        out.push_str(&format!(
            "  Registry:            {} names ({} new)\n",
            summary.registry.total, summary.registry.added
        ));
        out
    }
}
