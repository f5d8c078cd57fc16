use staplergen_cli::cli::commands::{CliArgs, Commands, ExtractArgs, RegistryArgs};
use staplergen_cli::cli::output::{OutputFormat, OutputFormatter};
use staplergen_cli::{NAME, VERSION};
use staplergen_core::{
    LoggingHandler, OutputMode, RealFileSystem, ResourceWriter, StaplergenConfig,
};
use staplergen_model::JsonDeclarationSource;
use staplergen_pipeline::{PassContext, PassOrchestrator, RegistryMerger, REGISTRY_PATH};

use clap::Parser;
use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{debug, error, info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Extract(extract_args) => handle_extract(extract_args, args.quiet),
        Commands::Registry(registry_args) => handle_registry(registry_args),
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let level = if let Some(level_str) = &args.log_level {
            parse_level(level_str)
        } else if args.verbose {
            Level::DEBUG
        } else if args.quiet {
            Level::ERROR
        } else {
            let level_str =
                env::var("STAPLERGEN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
            parse_level(&level_str)
        };

        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            filter = filter.add_directive(format!("staplergen={}", level).parse().unwrap());
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn handle_extract(args: &ExtractArgs, quiet: bool) -> i32 {
    info!("Starting extraction pass");

    if !args.declarations.is_file() {
        error!(
            "Declaration dump does not exist: {}",
            args.declarations.display()
        );
        return 1;
    }

    let (root, output_mode): (PathBuf, OutputMode) = match (&args.out, &args.resource_root) {
        (Some(out), None) => (out.clone(), OutputMode::OutputDir),
        (None, Some(resource_root)) => (resource_root.clone(), OutputMode::ResourceRoot),
        _ => {
            error!("No output root given");
            eprintln!("Error: pass either --out <DIR> or --resource-root <DIR>.");
            return 1;
        }
    };

    let config = StaplergenConfig {
        output_mode,
        ..StaplergenConfig::default()
    };
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return 1;
    }
    debug!("Output root: {} ({})", root.display(), config.output_mode);

    let fs = Arc::new(RealFileSystem::new());
    if let Err(e) = std::fs::create_dir_all(&root) {
        error!("Failed to create output root {}: {}", root.display(), e);
        return 1;
    }

    let source = JsonDeclarationSource::new(&args.declarations, fs.clone());
    let mut context = PassContext::new(
        config,
        ResourceWriter::new(&root, fs),
        Arc::new(LoggingHandler),
        Box::new(source),
    );

    let summary = match PassOrchestrator::new().execute(&mut context) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Extraction pass failed: {}", e);
            return 1;
        }
    };

    let format: OutputFormat = args.format.into();
    let formatter = OutputFormatter::new(format);

    let output = match formatter.format_summary(&summary) {
        Ok(out) => out,
        Err(e) => {
            error!("Failed to format summary: {}", e);
            return 1;
        }
    };

    if let Some(output_file) = &args.output {
        match std::fs::write(output_file, &output) {
            Ok(_) => {
                info!("Summary written to: {}", output_file.display());
                if !quiet {
                    println!("Summary written to: {}", output_file.display());
                }
            }
            Err(e) => {
                error!("Failed to write summary to file: {}", e);
                return 1;
            }
        }
    } else {
        println!("{}", output);
    }

    0
}

fn handle_registry(args: &RegistryArgs) -> i32 {
    if !args.root.is_dir() {
        error!("Output root does not exist: {}", args.root.display());
        return 1;
    }

    let fs = Arc::new(RealFileSystem::new());
    let writer = ResourceWriter::new(&args.root, fs);
    let merger = RegistryMerger::new(&writer);

    if args.normalize {
        if let Err(e) = merger.run(&BTreeSet::new()) {
            error!("Failed to normalize registry: {}", e);
            return 1;
        }
        info!("Registry normalized: {}", writer.resolve(REGISTRY_PATH.as_ref()).display());
    }

    let names: Vec<String> = match merger.load() {
        Ok(names) => names.into_iter().collect(),
        Err(e) => {
            error!("Failed to read registry: {}", e);
            return 1;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_registry(&names) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format registry: {}", e);
            1
        }
    }
}
