//! Site build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::manifest::Manifest;
use crate::sink::DirSink;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building site...");

    let manifest = Manifest::load(config_path)?;
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&manifest.site.output));

    let site = manifest
        .into_site()
        .with_context(|| format!("Invalid manifest {}", config_path.display()))?;

    let mut sink = DirSink::new(&output_dir);
    let summary = site
        .generate(&mut sink)
        .with_context(|| format!("Failed to generate site into {}", output_dir.display()))?;

    tracing::info!(
        "Built {} pages with {} CSS and {} JS blocks in {}ms",
        summary.pages,
        summary.css_blocks,
        summary.js_blocks,
        summary.duration_ms
    );

    tracing::info!("Output: {}", sink.root().display());

    Ok(())
}
