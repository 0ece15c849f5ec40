//! Feature card with an optional icon.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

use crate::parts::class_list;

/// A bordered card with a heading and a short description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Card {
    pub title: String,
    pub description: String,
    /// Symbol id inside `icons.svg`
    pub icon: String,
    /// Extra classes after `card`
    pub class: String,
}

impl Card {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Component for Card {
    fn render_html(&self) -> String {
        let icon = if self.icon.is_empty() {
            String::new()
        } else {
            format!(
                "  <svg class=\"icon\"><use href=\"icons.svg#{}\"></use></svg>\n",
                escape_attr(&self.icon)
            )
        };

        format!(
            "<div class=\"{}\">\n{}  <h3>{}</h3>\n  <p>{}</p>\n</div>\n",
            escape_attr(&class_list("card", &self.class)),
            icon,
            escape_text(&self.title),
            escape_text(&self.description)
        )
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(CARD_CSS))
    }
}

const CARD_CSS: &str = r#".card { border: 1px solid var(--color-border); border-radius: 8px; padding: 1.5rem; background: var(--color-card-bg); transition: transform 0.2s; }
.card:hover { transform: translateY(-4px); box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1); }
.card .icon { width: 48px; height: 48px; margin-bottom: 1rem; }
.card h3 { margin: 0 0 0.5rem 0; color: var(--color-heading); }
.card p { margin: 0; color: var(--color-text); }"#;
