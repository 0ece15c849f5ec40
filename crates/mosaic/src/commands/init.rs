//! Write a starter manifest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing mosaic...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    fs::write(config_path, DEFAULT_MANIFEST)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'mosaic build' to generate the site.");

    Ok(())
}

const DEFAULT_MANIFEST: &str = r##"# Mosaic site manifest

[site]
# Site title, used as the application name of every page
title = "My Site"

# Output directory for generated files
output = "dist"

# Document language
lang = "en"

[theme]
primary = "#3f88bf"
secondary = "#ff9300"

[[pages]]
title = "Home"
output = "index.html"
head = ['<meta name="description" content="Welcome to my site">']

[[pages.sections]]
title = "Welcome"

[[pages.sections.components]]
type = "section_head"
title = "What we offer"
subtitle = "Everything you need, in one place"
centered = true
border = true

[[pages.sections.components]]
type = "card"
title = "Fast"
description = "Pages are plain HTML with one shared stylesheet and script."

[[pages.sections.components]]
type = "card"
title = "Safe"
description = "Every title and description is escaped."

[[pages]]
title = "Contact"
output = "contact.html"

[[pages.sections]]
title = "Contact Us"

[[pages.sections.components]]
type = "form"
action = "/contact"
submit_label = "Send"

[[pages.sections.components.fields]]
type = "text"
name = "name"
placeholder = "Your name"
required = true

[[pages.sections.components.fields]]
type = "email"
name = "email"
placeholder = "Your email"
required = true

[[pages.sections.components.fields]]
type = "textarea"
name = "message"
placeholder = "Your message"
"##;
