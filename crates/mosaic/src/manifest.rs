//! Site manifest (mosaic.toml) loading.
//!
//! The manifest declares pages, their sections, and the built-in components
//! placed in each section. Loading it yields a fully built [`Site`] ready
//! for generation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use mosaic_components::{
    Banner, Card, Carousel, ContactForm, DoctorCard, Footer, Form, Hero, Navbar, PackageCard,
    PostCard, RawHtml, Script, SectionHead, ServiceCard, Stylesheet,
};
use mosaic_site::{Component, Site, SiteConfig, Theme};

/// Errors raised while loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Page {index} ({title}) has an empty output name")]
    EmptyOutputName { index: usize, title: String },
}

/// Top-level manifest structure.
#[derive(Debug, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub site: SiteTable,
    pub theme: Option<Theme>,
    #[serde(default)]
    pub pages: Vec<PageSpec>,
}

#[derive(Debug, Deserialize)]
pub struct SiteTable {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl Default for SiteTable {
    fn default() -> Self {
        Self {
            title: default_title(),
            output: default_output(),
            lang: default_lang(),
        }
    }
}

fn default_title() -> String {
    SiteConfig::default().title
}
fn default_output() -> String {
    SiteConfig::default().output
}
fn default_lang() -> String {
    SiteConfig::default().lang
}

#[derive(Debug, Deserialize)]
pub struct PageSpec {
    pub title: String,
    pub output: String,
    #[serde(default)]
    pub head: Vec<String>,
    #[serde(default)]
    pub raw: Vec<String>,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

#[derive(Debug, Deserialize)]
pub struct SectionSpec {
    #[serde(default)]
    pub title: String,
    pub id: Option<String>,
    #[serde(default)]
    pub components: Vec<ComponentSpec>,
}

/// A component entry, selected by its `type` key.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComponentSpec {
    Card(Card),
    Carousel(Carousel),
    Form(Form),
    Hero(Hero),
    Banner(Banner),
    Footer(Footer),
    Navbar(Navbar),
    SectionHead(SectionHead),
    ServiceCard(ServiceCard),
    PackageCard(PackageCard),
    PostCard(PostCard),
    DoctorCard(DoctorCard),
    ContactForm(ContactForm),
    RawHtml(RawHtml),
    Stylesheet(Stylesheet),
    Script(Script),
}

impl ComponentSpec {
    pub fn into_component(self) -> Box<dyn Component> {
        match self {
            ComponentSpec::Card(c) => Box::new(c),
            ComponentSpec::Carousel(c) => Box::new(c),
            ComponentSpec::Form(c) => Box::new(c),
            ComponentSpec::Hero(c) => Box::new(c),
            ComponentSpec::Banner(c) => Box::new(c),
            ComponentSpec::Footer(c) => Box::new(c),
            ComponentSpec::Navbar(c) => Box::new(c),
            ComponentSpec::SectionHead(c) => Box::new(c),
            ComponentSpec::ServiceCard(c) => Box::new(c),
            ComponentSpec::PackageCard(c) => Box::new(c),
            ComponentSpec::PostCard(c) => Box::new(c),
            ComponentSpec::DoctorCard(c) => Box::new(c),
            ComponentSpec::ContactForm(c) => Box::new(c),
            ComponentSpec::RawHtml(c) => Box::new(c),
            ComponentSpec::Stylesheet(c) => Box::new(c),
            ComponentSpec::Script(c) => Box::new(c),
        }
    }
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&content, path)?;
        tracing::info!("Loaded manifest from {}", path.display());
        Ok(manifest)
    }

    /// Parse manifest text; `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        toml::from_str(content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn site_config(&self) -> SiteConfig {
        SiteConfig {
            title: self.site.title.clone(),
            output: self.site.output.clone(),
            lang: self.site.lang.clone(),
            theme: self.theme.clone(),
        }
    }

    /// Build the site tree, registering every component's assets.
    pub fn into_site(self) -> Result<Site, ManifestError> {
        let mut site = Site::new(self.site_config());

        for (index, page_spec) in self.pages.into_iter().enumerate() {
            if page_spec.output.trim().is_empty() {
                return Err(ManifestError::EmptyOutputName {
                    index,
                    title: page_spec.title,
                });
            }

            let mut page = site.new_page(page_spec.title, page_spec.output);
            for fragment in page_spec.head {
                page.add_head(fragment);
            }

            for section_spec in page_spec.sections {
                let mut section = page.new_section(section_spec.title);
                if let Some(id) = section_spec.id {
                    section.with_id(id);
                }
                for component in section_spec.components {
                    section.add_boxed(component.into_component());
                }
            }

            for fragment in page_spec.raw {
                page.add_raw(fragment);
            }
        }

        tracing::debug!(
            "Built {} pages with {} CSS and {} JS blocks",
            site.pages().len(),
            site.css().len(),
            site.js().len()
        );

        Ok(site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_site::MemorySink;
    use pretty_assertions::assert_eq;

    const CLINIC: &str = r##"
[site]
title = "Clinic"

[theme]
primary = "#112233"

[[pages]]
title = "Home"
output = "index.html"
head = ['<meta name="description" content="Welcome">']

[[pages.sections]]
title = "Welcome"

[[pages.sections.components]]
type = "card"
title = "Checkups"
description = "Yearly exams"

[[pages.sections.components]]
type = "card"
title = "Vaccines"
description = "All ages"

[[pages]]
title = "Contact"
output = "contact.html"

[[pages.sections]]
title = "Contact Us"
id = "reach"

[[pages.sections.components]]
type = "form"
action = "/send"

[[pages.sections.components.fields]]
type = "email"
name = "email"
required = true
"##;

    fn parse(content: &str) -> Manifest {
        Manifest::parse(content, Path::new("mosaic.toml")).unwrap()
    }

    #[test]
    fn empty_manifest_uses_defaults() {
        let manifest = parse("");
        assert_eq!(manifest.site.title, "My Site");
        assert_eq!(manifest.site.output, "dist");
        assert_eq!(manifest.site.lang, "en");
        assert!(manifest.theme.is_none());
        assert!(manifest.pages.is_empty());
    }

    #[test]
    fn parses_nested_pages_sections_and_components() {
        let manifest = parse(CLINIC);
        assert_eq!(manifest.site.title, "Clinic");
        assert_eq!(manifest.theme.as_ref().unwrap().primary, "#112233");
        assert_eq!(manifest.pages.len(), 2);
        assert_eq!(manifest.pages[0].sections[0].components.len(), 2);
        assert_eq!(manifest.pages[1].sections[0].id.as_deref(), Some("reach"));
        assert!(matches!(
            &manifest.pages[1].sections[0].components[0],
            ComponentSpec::Form(form) if form.fields[0].kind == "email"
        ));
    }

    #[test]
    fn builds_and_generates_site() {
        let site = parse(CLINIC).into_site().unwrap();
        let mut sink = MemorySink::new();
        site.generate(&mut sink).unwrap();

        assert_eq!(
            sink.names(),
            vec!["index.html", "contact.html", "style.css", "script.js"]
        );

        let index = sink.get("index.html").unwrap();
        assert!(index.contains("<meta name=\"description\" content=\"Welcome\">"));
        assert!(index.contains("<h3>Checkups</h3>"));

        let contact = sink.get("contact.html").unwrap();
        assert!(contact.contains("<section id=\"reach\" class=\"page\">"));

        let css = sink.get("style.css").unwrap();
        assert!(css.starts_with(":root {"));
        assert_eq!(css.matches(".card h3").count(), 1);
        assert!(sink.get("script.js").unwrap().contains("[required]"));
    }

    #[test]
    fn unknown_component_type_is_a_parse_error() {
        let err = Manifest::parse(
            r#"
[[pages]]
title = "Home"
output = "index.html"

[[pages.sections]]
title = "S"

[[pages.sections.components]]
type = "marquee"
"#,
            Path::new("mosaic.toml"),
        )
        .unwrap_err();

        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse mosaic.toml"));
    }

    #[test]
    fn empty_output_name_is_rejected() {
        let manifest = parse(
            r#"
[[pages]]
title = "Home"
output = "index.html"

[[pages]]
title = "Broken"
output = ""
"#,
        );

        let err = manifest.into_site().unwrap_err();
        assert_eq!(err.to_string(), "Page 1 (Broken) has an empty output name");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }

    #[test]
    fn raw_fragments_follow_sections() {
        let site = parse(
            r#"
[[pages]]
title = "Home"
output = "index.html"
raw = ["<aside>after</aside>"]

[[pages.sections]]
title = "First"

[[pages.sections.components]]
type = "raw_html"
html = "<p>inside</p>"
"#,
        )
        .into_site()
        .unwrap();

        let html = site.render_page(site.pages()[0].id()).unwrap();
        let inside = html.find("<p>inside</p>").unwrap();
        let after = html.find("<aside>after</aside>").unwrap();
        assert!(inside < after);
    }

    #[test]
    fn navbar_entries_build_with_items() {
        let manifest = parse(
            r#"
[[pages]]
title = "Home"
output = "index.html"

[[pages.sections]]
title = "Header"

[[pages.sections.components]]
type = "navbar"
logo_src = "logo.png"
logo_alt = "Clinic"
search = true
items = [{ label = "Home", href = "index.html" }, { label = "Contact", href = "contact.html" }]
"#,
        );

        assert!(matches!(
            &manifest.pages[0].sections[0].components[0],
            ComponentSpec::Navbar(navbar) if navbar.items.len() == 2 && navbar.search
        ));

        let site = manifest.into_site().unwrap();
        assert_eq!(site.js().len(), 1);
        let html = site.render_page(site.pages()[0].id()).unwrap();
        assert!(html.contains("<img src=\"logo.png\" alt=\"Clinic\">"));
    }
}
