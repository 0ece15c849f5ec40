//! Full-width banner carrying either a quote or a call to action.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

use crate::parts::{button_lines, class_list, Button};

/// Which layout a [`Banner`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    /// Centered quote with attribution
    #[default]
    Quote,
    /// Image beside text and buttons
    Action,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Banner {
    pub kind: BannerKind,
    pub quote: String,
    pub author: String,
    pub text: String,
    pub image_src: String,
    pub buttons: Vec<Button>,
    pub class: String,
}

impl Banner {
    pub fn quote(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Quote,
            quote: quote.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    pub fn action(text: impl Into<String>, image_src: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Action,
            text: text.into(),
            image_src: image_src.into(),
            ..Self::default()
        }
    }

    pub fn with_button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }

    fn render_quote(&self) -> String {
        format!(
            "  <div class=\"container text-white\">\n    <blockquote class=\"lead\">{}</blockquote>\n    <small class=\"text text-sm\">- {}</small>\n  </div>\n",
            escape_text(&self.quote),
            escape_text(&self.author)
        )
    }

    fn render_action(&self) -> String {
        format!(
            r#"  <div class="container grid">
    <div class="banner-two-left">
      <img src="{}" alt="">
    </div>
    <div class="banner-two-right">
      <p class="lead text-white">{}</p>
      <div class="btn-group">
{}      </div>
    </div>
  </div>
"#,
            escape_attr(&self.image_src),
            escape_text(&self.text),
            button_lines(&self.buttons, "        ")
        )
    }
}

impl Component for Banner {
    fn render_html(&self) -> String {
        let (base, content) = match self.kind {
            BannerKind::Quote => ("banner-one text-center", self.render_quote()),
            BannerKind::Action => ("banner-two text-center", self.render_action()),
        };

        format!(
            "<section class=\"{}\">\n{}</section>\n",
            escape_attr(&class_list(base, &self.class)),
            content
        )
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(BANNER_CSS))
    }
}

const BANNER_CSS: &str = r#".banner-one, .banner-two { padding: 4rem 2rem; background: var(--color-primary); }
.banner-one blockquote { font-size: 1.5rem; font-style: italic; margin-bottom: 1rem; }
.banner-two .container.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; align-items: center; }
.banner-two-left img { width: 100%; }"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_quote() {
        let banner = Banner::quote("Health first", "Dr. Smith");
        assert_eq!(
            banner.render_html(),
            "<section class=\"banner-one text-center\">\n  <div class=\"container text-white\">\n    <blockquote class=\"lead\">Health first</blockquote>\n    <small class=\"text text-sm\">- Dr. Smith</small>\n  </div>\n</section>\n"
        );
    }

    #[test]
    fn renders_call_to_action() {
        let html = Banner::action("Book today", "cta.png")
            .with_button(Button::new("Book", "/book"))
            .render_html();
        assert!(html.starts_with("<section class=\"banner-two text-center\">"));
        assert!(html.contains("<img src=\"cta.png\" alt=\"\">"));
        assert!(html.contains("        <a href=\"/book\" class=\"btn\">Book</a>\n"));
    }

    #[test]
    fn escapes_quote_and_author() {
        let html = Banner::quote("<q>", "\"me\"").render_html();
        assert!(html.contains("&lt;q&gt;"));
        assert!(html.contains("- &quot;me&quot;"));
    }

    #[test]
    fn kind_deserializes_lowercase() {
        let banner: Banner = toml::from_str("kind = \"action\"\ntext = \"Go\"").unwrap();
        assert_eq!(banner.kind, BannerKind::Action);
    }
}
