use crate::generator::names::to_kebab_case;
use crate::generator::{build_endpoints, generate_client, render_client_from_api, ClientConfig};
use crate::spec::load_spec;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command-line interface for raml2ts
///
/// Provides commands for generating a TypeScript client from a RAML
/// API description and for inspecting what the generator extracts.
#[derive(Parser)]
#[command(name = "raml2ts")]
#[command(about = "RAML-driven TypeScript API client generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the TypeScript client from an API description
    Generate {
        /// Path to the API description (RAML/YAML)
        #[arg(short, long)]
        spec: PathBuf,

        /// Output file (default: api.ts beside the spec)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Client output configuration (default: raml2ts.yaml beside the spec)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Render and validate without writing anything
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// List the endpoints extracted from an API description
    Endpoints {
        /// Path to the API description (RAML/YAML)
        #[arg(short, long)]
        spec: PathBuf,
    },
}

fn load(spec: &Path) -> anyhow::Result<crate::spec::ApiSpec> {
    load_spec(spec.to_str().context("spec path is not valid UTF-8")?)
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            spec,
            output,
            config,
            force,
            dry_run,
        } => {
            if *dry_run {
                let api = load(spec)?;
                let cfg = ClientConfig::load(config.as_deref(), spec)?;
                let rendered = render_client_from_api(&api, &cfg)?;
                println!(
                    "✅ Dry run: client renders cleanly ({} lines), nothing written",
                    rendered.lines().count()
                );
                return Ok(());
            }
            generate_client(spec, output.as_deref(), config.as_deref(), *force)?;
            Ok(())
        }
        Commands::Endpoints { spec } => {
            let api = load(spec)?;
            let endpoints = build_endpoints(&api)?;
            for endpoint in &endpoints {
                println!(
                    "{:6} {:44} → {} ({})",
                    endpoint.method.verb(),
                    endpoint.uri,
                    endpoint.function_name,
                    to_kebab_case(&endpoint.function_name)
                );
            }
            println!("{} endpoint(s)", endpoints.len());
            Ok(())
        }
    }
}
