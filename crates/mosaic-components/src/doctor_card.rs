//! Staff portrait with a name and specialty overlay.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

use crate::parts::class_list;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DoctorCard {
    pub name: String,
    pub specialty: String,
    pub image_src: String,
    pub image_alt: String,
    /// Overlay background class
    pub background: String,
    pub class: String,
}

impl Default for DoctorCard {
    fn default() -> Self {
        Self {
            name: String::new(),
            specialty: String::new(),
            image_src: String::new(),
            image_alt: String::new(),
            background: "bg-blue".to_string(),
            class: String::new(),
        }
    }
}

impl DoctorCard {
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image_src = src.into();
        self.image_alt = alt.into();
        self
    }
}

impl Component for DoctorCard {
    fn render_html(&self) -> String {
        let overlay = format!("info text-center {} text-white flex", self.background.trim());

        format!(
            "<div class=\"{}\">\n  <div class=\"img flex\">\n    <img src=\"{}\" alt=\"{}\">\n    <div class=\"{}\">\n      <p class=\"lead\">{}</p>\n      <p class=\"text-lg\">{}</p>\n    </div>\n  </div>\n</div>\n",
            escape_attr(&class_list("doc-panel-item", &self.class)),
            escape_attr(&self.image_src),
            escape_attr(&self.image_alt),
            escape_attr(&overlay),
            escape_text(&self.name),
            escape_text(&self.specialty)
        )
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(DOCTOR_CARD_CSS))
    }
}

const DOCTOR_CARD_CSS: &str = r#".doc-panel-item .img { position: relative; overflow: hidden; border-radius: 8px; }
.doc-panel-item img { width: 100%; display: block; }
.doc-panel-item .info { position: absolute; left: 0; right: 0; bottom: 0; flex-direction: column; padding: 1rem; }
.doc-panel-item .info.bg-blue { background: var(--color-primary); }"#;
