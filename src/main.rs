//! authz-inspect: summarize authorization policies and proxy TLS settings.
//!
//! ```text
//! authz-inspect policies rbac.yaml bindings.yaml
//! authz-inspect tls config_dump.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use authz_inspect::config::{load_config, InspectConfig, OutputFormat};
use authz_inspect::observability::logging::init_logging;
use authz_inspect::output::{render_policy_summary, render_tls_rows};
use authz_inspect::policy::get_configs_from_files;
use authz_inspect::tls::ConfigDump;

#[derive(Parser)]
#[command(name = "authz-inspect")]
#[command(about = "Inspect authorization policies and proxy TLS settings", long_about = None)]
struct Cli {
    /// Settings file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format, overriding the settings file.
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load policy files and list their configs grouped by type
    Policies {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Summarize listener certificates and validation from a config dump
    Tls {
        /// JSON output of the proxy admin /config_dump endpoint
        config_dump: PathBuf,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => InspectConfig::default(),
    };
    if let Some(format) = cli.output {
        config.output.format = format;
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::debug!(format = ?config.output.format, "Configuration loaded");

    let rendered = match cli.command {
        Commands::Policies { files } => {
            let configs = get_configs_from_files(files.as_slice())?;
            render_policy_summary(&configs, config.output.format)?
        }
        Commands::Tls { config_dump } => {
            let dump = ConfigDump::from_file(&config_dump)?;
            render_tls_rows(&dump.tls_rows(), config.output.format)?
        }
    };

    print!("{}", rendered);
    if config.output.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
