//! Generic form with client-side required-field checks.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

/// A single input of a [`Form`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormField {
    /// Input type; `textarea` renders a text area, empty means `text`
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub placeholder: String,
    pub required: bool,
}

impl FormField {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn render(&self) -> String {
        let required = if self.required { " required" } else { "" };
        let name = escape_attr(&self.name);
        let placeholder = escape_attr(&self.placeholder);

        match self.kind.as_str() {
            "textarea" => format!(
                "  <textarea name=\"{name}\" placeholder=\"{placeholder}\"{required}></textarea>\n"
            ),
            kind => {
                let kind = if kind.is_empty() { "text" } else { kind };
                format!(
                    "  <input type=\"{}\" name=\"{name}\" placeholder=\"{placeholder}\"{required}>\n",
                    escape_attr(kind)
                )
            }
        }
    }
}

/// A form posting its fields to `action`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Form {
    pub action: String,
    pub method: String,
    pub fields: Vec<FormField>,
    pub submit_label: String,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: "post".to_string(),
            fields: Vec::new(),
            submit_label: "Send Message".to_string(),
        }
    }
}

impl Form {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }
}

impl Component for Form {
    fn render_html(&self) -> String {
        let fields: String = self.fields.iter().map(FormField::render).collect();

        format!(
            "<form class=\"contact-form\" action=\"{}\" method=\"{}\">\n{}  <button type=\"submit\">{}</button>\n</form>\n",
            escape_attr(&self.action),
            escape_attr(&self.method),
            fields,
            escape_text(&self.submit_label)
        )
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(FORM_CSS))
    }

    fn render_js(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(FORM_JS))
    }
}

const FORM_CSS: &str = r#".contact-form { display: flex; flex-direction: column; gap: 1rem; max-width: 500px; }
.contact-form input, .contact-form textarea { padding: 0.75rem; border: 1px solid var(--color-border); border-radius: 4px; font-family: inherit; }
.contact-form button { padding: 0.75rem 1.5rem; background: var(--color-primary); color: #ffffff; border: none; border-radius: 4px; cursor: pointer; }
.contact-form button:hover { opacity: 0.9; }"#;

const FORM_JS: &str = r#"// Required-field highlighting
document.addEventListener('DOMContentLoaded', function () {
  document.querySelectorAll('.contact-form').forEach(function (form) {
    form.addEventListener('submit', function (event) {
      var valid = true;
      form.querySelectorAll('[required]').forEach(function (field) {
        if (!field.value.trim()) {
          valid = false;
          field.style.borderColor = 'red';
        } else {
          field.style.borderColor = '';
        }
      });
      if (!valid) event.preventDefault();
    });
  });
});"#;
