//! Page header with a headline, lead text, image and call-to-action buttons.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

use crate::parts::{button_lines, class_list, Button};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub title: String,
    /// Highlighted second line of the title
    pub title_span: String,
    pub lead: String,
    pub description: String,
    pub image_src: String,
    pub image_alt: String,
    pub buttons: Vec<Button>,
    /// Background class, `bg-blue` unless set
    pub background: String,
    pub class: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_span: String::new(),
            lead: String::new(),
            description: String::new(),
            image_src: String::new(),
            image_alt: String::new(),
            buttons: Vec::new(),
            background: "bg-blue".to_string(),
            class: String::new(),
        }
    }
}

impl Hero {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_title_span(mut self, span: impl Into<String>) -> Self {
        self.title_span = span.into();
        self
    }

    pub fn with_lead(mut self, lead: impl Into<String>) -> Self {
        self.lead = lead.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image_src = src.into();
        self.image_alt = alt.into();
        self
    }

    pub fn with_button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }
}

impl Component for Hero {
    fn render_html(&self) -> String {
        let class = class_list(&class_list("header", &self.background), &self.class);

        let mut title = escape_text(&self.title).into_owned();
        if !self.title_span.is_empty() {
            title.push_str("<br> <span>");
            title.push_str(&escape_text(&self.title_span));
            title.push_str("</span>");
        }

        format!(
            r#"<header class="{class}">
  <div class="header-inner text-white text-center">
    <div class="container grid">
      <div class="header-inner-left">
        <h1>{title}</h1>
        <p class="lead">{lead}</p>
        <p class="text text-md">{description}</p>
        <div class="btn-group">
{buttons}        </div>
      </div>
      <div class="header-inner-right">
        <img src="{src}" alt="{alt}">
      </div>
    </div>
  </div>
</header>
"#,
            class = escape_attr(&class),
            title = title,
            lead = escape_text(&self.lead),
            description = escape_text(&self.description),
            buttons = button_lines(&self.buttons, "          "),
            src = escape_attr(&self.image_src),
            alt = escape_attr(&self.image_alt),
        )
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(HERO_CSS))
    }
}

const HERO_CSS: &str = r#".header { padding: 4rem 0; }
.header.bg-blue { background: var(--color-primary); }
.header .container.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; align-items: center; }
.header-inner-left h1 { color: #ffffff; font-size: 2.75rem; line-height: 1.2; }
.header-inner-left h1 span { color: var(--color-secondary); }
.header-inner-left .lead { font-size: 1.25rem; margin: 1rem 0; }
.header-inner-right img { width: 100%; max-width: 480px; }
.btn-group { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-top: 1.5rem; }
.btn { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 4px; text-decoration: none; font-weight: 500; }
.btn-white { background: #ffffff; color: var(--color-primary); }
.btn-light-blue { background: var(--color-secondary); color: #ffffff; }"#;
