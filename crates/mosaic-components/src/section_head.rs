//! Section heading with optional subtitle and decorations.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

use crate::parts::class_list;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SectionHead {
    pub title: String,
    pub subtitle: String,
    /// Draw a short rule under the heading
    pub border: bool,
    /// Dots image for the line-art decoration; none when unset
    pub line_art: Option<String>,
    pub centered: bool,
    pub class: String,
}

impl SectionHead {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_border(mut self) -> Self {
        self.border = true;
        self
    }

    pub fn with_line_art(mut self, dots_src: impl Into<String>) -> Self {
        self.line_art = Some(dots_src.into());
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

impl Component for SectionHead {
    fn render_html(&self) -> String {
        let mut class = "section-head".to_string();
        if self.centered {
            class.push_str(" text-center");
        }
        let class = class_list(&class, &self.class);

        let mut out = format!(
            "<div class=\"{}\">\n  <h2>{}</h2>\n",
            escape_attr(&class),
            escape_text(&self.title)
        );
        if !self.subtitle.is_empty() {
            out.push_str("  <p class=\"text text-lg\">");
            out.push_str(&escape_text(&self.subtitle));
            out.push_str("</p>\n");
        }
        if self.border {
            out.push_str("  <div class=\"border-line\"></div>\n");
        }
        if let Some(dots) = &self.line_art {
            out.push_str("  <div class=\"line-art flex\">\n    <div></div>\n    <img src=\"");
            out.push_str(&escape_attr(dots));
            out.push_str("\" alt=\"\">\n    <div></div>\n  </div>\n");
        }
        out.push_str("</div>\n");
        out
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(SECTION_HEAD_CSS))
    }
}

const SECTION_HEAD_CSS: &str = r#".section-head { margin-bottom: 2rem; }
.section-head.text-center { text-align: center; }
.section-head .border-line { width: 80px; height: 3px; margin: 1rem auto; background: var(--color-secondary); }
.section-head .line-art { display: flex; align-items: center; justify-content: center; gap: 1rem; }
.section-head .line-art div { flex: 0 0 60px; height: 2px; background: var(--color-border); }"#;
