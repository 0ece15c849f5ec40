//! Trusted markup and asset-only contributors.
//!
//! [`RawHtml`] is the one component that emits caller markup unescaped.
//! [`Stylesheet`] and [`Script`] render no markup at all; they exist to put
//! a block into the shared bundles from a section.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::Component;

/// Trusted markup, emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawHtml {
    pub html: String,
}

impl RawHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl Component for RawHtml {
    fn render_html(&self) -> String {
        self.html.clone()
    }
}

/// A CSS block for the shared stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Stylesheet {
    pub css: String,
}

impl Stylesheet {
    pub fn new(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }
}

impl Component for Stylesheet {
    fn render_html(&self) -> String {
        String::new()
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Owned(self.css.clone()))
    }
}

/// A JS block for the shared script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Script {
    pub js: String,
}

impl Script {
    pub fn new(js: impl Into<String>) -> Self {
        Self { js: js.into() }
    }
}

impl Component for Script {
    fn render_html(&self) -> String {
        String::new()
    }

    fn render_js(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Owned(self.js.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_site::{MemorySink, Site, SiteConfig};

    #[test]
    fn raw_html_is_not_escaped() {
        assert_eq!(RawHtml::new("<b>bold</b>").render_html(), "<b>bold</b>");
    }

    #[test]
    fn asset_only_components_reach_bundles_without_markup() {
        let mut site = Site::new(SiteConfig::new("Assets", "dist"));
        site.new_page("Home", "index.html")
            .new_section("Extras")
            .add(Stylesheet::new(".extra{}"))
            .add(Script::new("console.log('extra');"));

        let mut sink = MemorySink::new();
        site.generate(&mut sink).unwrap();

        assert!(sink.get("style.css").unwrap().ends_with("}\n.extra{}\n"));
        assert_eq!(sink.get("script.js"), Some("console.log('extra');\n"));
        let index = sink.get("index.html").unwrap();
        assert!(index.contains("<div class=\"card-container\">\n  </div>"));
    }
}
