//! The fixed document shell every page is rendered into.
//!
//! Auto-escaping is switched off: values are either pre-rendered trusted
//! markup or go through the `text` / `attr` filters, which are the crate's
//! own escapers.

use minijinja::{context, AutoEscape, Environment};

use crate::escape::{escape_attr, escape_text};

/// Values the document shell needs for one page.
#[derive(Debug, Clone)]
pub struct DocumentContext<'a> {
    /// Document language tag
    pub lang: &'a str,
    /// Site title, emitted as the application name
    pub site_title: &'a str,
    /// Page title
    pub title: &'a str,
    /// Trusted head fragments
    pub head: &'a [String],
    /// Navigation markup, empty for single-page sites
    pub nav: &'a str,
    /// Rendered sections in order
    pub sections: Vec<String>,
    /// Trusted raw body fragments
    pub raw: &'a [String],
    /// Shared stylesheet reference
    pub style_href: &'a str,
    /// Shared script reference
    pub script_href: &'a str,
}

/// Template engine holding the document shell.
pub struct DocumentTemplates {
    env: Environment<'static>,
}

impl DocumentTemplates {
    /// Create the engine with the built-in shell and escaping filters.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.add_filter("text", |value: String| escape_text(&value).into_owned());
        env.add_filter("attr", |value: String| escape_attr(&value).into_owned());

        env.add_template("page.html", PAGE_TEMPLATE)
            .expect("Failed to add page template");

        Self { env }
    }

    /// Render a full HTML document.
    pub fn render_page(&self, doc: &DocumentContext<'_>) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            lang => doc.lang,
            site_title => doc.site_title,
            title => doc.title,
            head => doc.head,
            nav => doc.nav,
            sections => &doc.sections,
            raw => doc.raw,
            style_href => doc.style_href,
            script_href => doc.script_href,
        })
    }
}

impl Default for DocumentTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DocumentTemplates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentTemplates").finish_non_exhaustive()
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang | attr }}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="application-name" content="{{ site_title | attr }}">
  <title>{{ title | text }}</title>
  <link rel="stylesheet" href="{{ style_href | attr }}">
{% for fragment in head %}  {{ fragment }}
{% endfor %}</head>
<body>
{{ nav }}  <main class="content">
{% for section in sections %}{{ section }}{% endfor %}{% for fragment in raw %}{{ fragment }}
{% endfor %}  </main>
  <script src="{{ script_href | attr }}"></script>
</body>
</html>
"##;
