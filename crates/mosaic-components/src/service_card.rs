//! Service card with an image icon.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

use crate::parts::class_list;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    pub icon_src: String,
    pub class: String,
}

impl ServiceCard {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon_src: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon_src: icon_src.into(),
            class: String::new(),
        }
    }
}

impl Component for ServiceCard {
    fn render_html(&self) -> String {
        format!(
            "<article class=\"{}\">\n  <div class=\"icon\">\n    <img src=\"{}\" alt=\"\">\n  </div>\n  <h3>{}</h3>\n  <p class=\"text text-sm\">{}</p>\n</article>\n",
            escape_attr(&class_list("service-item", &self.class)),
            escape_attr(&self.icon_src),
            escape_text(&self.title),
            escape_text(&self.description)
        )
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(SERVICE_CARD_CSS))
    }
}

const SERVICE_CARD_CSS: &str = r#".service-item { padding: 2rem 1.5rem; text-align: center; border-radius: 8px; background: var(--color-card-bg); box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06); }
.service-item .icon img { width: 64px; height: 64px; margin: 0 auto 1rem; }
.service-item h3 { color: var(--color-heading); margin-bottom: 0.5rem; }"#;
