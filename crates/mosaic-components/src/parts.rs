//! Small pieces shared by several components.

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text};

/// A call-to-action link styled as a button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Button {
    pub label: String,
    pub href: String,
    /// Extra classes after `btn`, e.g. `btn-white`
    pub class: String,
}

impl Button {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            class: String::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self) -> String {
        format!(
            "<a href=\"{}\" class=\"{}\">{}</a>",
            escape_attr(&self.href),
            escape_attr(&class_list("btn", &self.class)),
            escape_text(&self.label)
        )
    }
}

/// A plain text link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Join a base class with caller-supplied extras, skipping empty extras.
pub(crate) fn class_list(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Render one indented line per button.
pub(crate) fn button_lines(buttons: &[Button], indent: &str) -> String {
    let mut out = String::new();
    for button in buttons {
        out.push_str(indent);
        out.push_str(&button.render());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_skips_blank_extras() {
        assert_eq!(class_list("card", ""), "card");
        assert_eq!(class_list("card", "  "), "card");
        assert_eq!(class_list("card", "wide"), "card wide");
    }

    #[test]
    fn button_escapes_every_field() {
        let button = Button::new("<Go>", "/a?x=\"1\"").with_class("btn-white");
        assert_eq!(
            button.render(),
            "<a href=\"/a?x=&quot;1&quot;\" class=\"btn btn-white\">&lt;Go&gt;</a>"
        );
    }
}
