use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Extracts data-binding metadata from compiled declarations
#[derive(Parser, Debug)]
#[command(
    name = "staplergen",
    about = "Extracts data-binding metadata from compiled declarations",
    version,
    long_about = "staplergen scans a declaration dump for binding markers and writes \
                  parameter-name records, per-member documentation records, and the \
                  exposed-type registry next to the compiled output."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Verbose output")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Run one extraction pass over a declaration dump",
        long_about = "Runs one extraction pass: scans the declaration dump, writes one \
                      .stapler record per marked constructor or method and one .javadoc \
                      record per exposed type, then merges discovered owners into the \
                      exposed-type registry.\n\n\
                      Examples:\n  \
                      staplergen extract declarations.json --out target/classes\n  \
                      staplergen extract declarations.json --resource-root build/resources\n  \
                      staplergen extract declarations.json --out out --format json"
    )]
    Extract(ExtractArgs),

    #[command(
        about = "Inspect or normalize the exposed-type registry",
        long_about = "Prints the registry under the given root. With --normalize, rewrites \
                      it sorted and deduplicated without discovering anything new.\n\n\
                      Examples:\n  \
                      staplergen registry --root target/classes\n  \
                      staplergen registry --root target/classes --normalize"
    )]
    Registry(RegistryArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(value_name = "DECLARATIONS", help = "Path to the JSON declaration dump")]
    pub declarations: PathBuf,

    #[arg(
        long,
        value_name = "DIR",
        conflicts_with = "resource_root",
        help = "Explicit output directory to root artifacts under"
    )]
    pub out: Option<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Build-tool-managed resource root to root artifacts under"
    )]
    pub resource_root: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Summary output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the summary to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct RegistryArgs {
    #[arg(long, value_name = "DIR", help = "Output root containing the registry")]
    pub root: PathBuf,

    #[arg(long, help = "Rewrite the registry sorted and deduplicated")]
    pub normalize: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
