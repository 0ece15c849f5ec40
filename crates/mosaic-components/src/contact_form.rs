//! Contact block: heading, fixed name/email/message form and an optional map.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

use crate::parts::class_list;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub title: String,
    pub description: String,
    /// Embed URL of a map shown beside the form
    pub map_url: Option<String>,
    /// Background class of the form panel
    pub background: String,
    pub class: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            map_url: None,
            background: "bg-blue".to_string(),
            class: String::new(),
        }
    }
}

impl ContactForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_map(mut self, url: impl Into<String>) -> Self {
        self.map_url = Some(url.into());
        self
    }
}

impl Component for ContactForm {
    fn render_html(&self) -> String {
        let map = match self.map_url.as_deref() {
            Some(url) if !url.is_empty() => format!(
                "    <div class=\"contact-left\">\n      <iframe src=\"{}\" width=\"600\" height=\"450\" style=\"border:0;\" allowfullscreen=\"\" loading=\"lazy\"></iframe>\n    </div>\n",
                escape_attr(url)
            ),
            _ => String::new(),
        };
        let panel = format!(
            "contact-right text-white text-center {}",
            self.background.trim()
        );

        format!(
            r#"<section class="{class}">
  <div class="container grid">
{map}    <div class="{panel}">
      <div class="contact-head">
        <h3 class="lead">{title}</h3>
        <p class="text text-md">{description}</p>
      </div>
      <form>
        <div class="form-element">
          <input type="text" class="form-control" placeholder="Your name">
        </div>
        <div class="form-element">
          <input type="email" class="form-control" placeholder="Your email">
        </div>
        <div class="form-element">
          <textarea rows="5" placeholder="Your Message" class="form-control"></textarea>
        </div>
        <button type="submit" class="btn btn-white btn-submit">Send Message</button>
      </form>
    </div>
  </div>
</section>
"#,
            class = escape_attr(&class_list("contact py", &self.class)),
            map = map,
            panel = escape_attr(&panel),
            title = escape_text(&self.title),
            description = escape_text(&self.description),
        )
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(CONTACT_FORM_CSS))
    }
}

const CONTACT_FORM_CSS: &str = r#".contact .container.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2rem; }
.contact-left iframe { width: 100%; min-height: 360px; }
.contact-right { padding: 2rem; border-radius: 8px; }
.contact-right.bg-blue { background: var(--color-primary); }
.contact .form-element { margin-bottom: 1rem; }
.contact .form-control { width: 100%; padding: 0.75rem; border: none; border-radius: 4px; font-family: inherit; }"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_without_map_by_default() {
        let html = ContactForm::new("Write to us", "We reply fast").render_html();
        assert!(html.starts_with("<section class=\"contact py\">"));
        assert!(!html.contains("<iframe"));
        assert!(html.contains("<div class=\"contact-right text-white text-center bg-blue\">"));
        assert!(html.contains("<h3 class=\"lead\">Write to us</h3>"));
    }

    #[test]
    fn renders_escaped_map() {
        let html = ContactForm::new("T", "D")
            .with_map("https://maps.test/?q=\"x\"")
            .render_html();
        assert!(html.contains("<iframe src=\"https://maps.test/?q=&quot;x&quot;\""));
    }

    #[test]
    fn empty_map_url_is_ignored() {
        let html = ContactForm::new("T", "D").with_map("").render_html();
        assert!(!html.contains("<iframe"));
    }
}
