//! Priced package card with an icon-font glyph and a button.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

use crate::parts::{class_list, Button};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackageCard {
    pub title: String,
    pub description: String,
    /// Icon font classes, e.g. `fas fa-heartbeat`
    pub icon_class: String,
    pub button_label: String,
    pub button_href: String,
    pub class: String,
}

impl PackageCard {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon_class: impl Into<String>) -> Self {
        self.icon_class = icon_class.into();
        self
    }

    pub fn with_button(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.button_label = label.into();
        self.button_href = href.into();
        self
    }
}

impl Component for PackageCard {
    fn render_html(&self) -> String {
        let button = Button::new(self.button_label.as_str(), self.button_href.as_str())
            .with_class("btn-blue")
            .render();

        format!(
            "<div class=\"{}\">\n  <div class=\"icon flex\">\n    <i class=\"{}\"></i>\n  </div>\n  <h3>{}</h3>\n  <p class=\"text text-sm\">{}</p>\n  {}\n</div>\n",
            escape_attr(&class_list("package-service-item bg-white", &self.class)),
            escape_attr(&self.icon_class),
            escape_text(&self.title),
            escape_text(&self.description),
            button
        )
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(PACKAGE_CARD_CSS))
    }
}

const PACKAGE_CARD_CSS: &str = r#".package-service-item { padding: 2rem; border-radius: 8px; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06); }
.package-service-item.bg-white { background: #ffffff; }
.package-service-item .icon { display: flex; align-items: center; justify-content: center; width: 56px; height: 56px; margin-bottom: 1rem; border-radius: 50%; background: var(--color-primary); color: #ffffff; }
.package-service-item h3 { color: var(--color-heading); margin-bottom: 0.5rem; }
.btn-blue { background: var(--color-primary); color: #ffffff; margin-top: 1rem; }"#;
