//! Mosaic CLI - component-based static site generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod manifest;
mod sink;

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(about = "Component-based static site generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the site manifest
    #[arg(short, long, default_value = "mosaic.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter manifest
    Init {
        /// Overwrite an existing manifest
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate the site
    Build {
        /// Output directory (defaults to the manifest's site.output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Build { output } => {
            commands::build::run(&cli.config, output)?;
        }
    }

    Ok(())
}
