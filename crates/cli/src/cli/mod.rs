pub mod commands;
pub mod output;

pub use commands::{CliArgs, Commands, ExtractArgs, RegistryArgs};
pub use output::{OutputFormat, OutputFormatter};
