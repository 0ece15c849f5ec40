//! Escaping for text and attribute contexts.
//!
//! Every piece of caller-supplied data that ends up in generated markup goes
//! through one of these functions. Head fragments, raw page fragments and the
//! markup a component returns are the only trusted inputs.

use std::borrow::Cow;

/// Escape text for insertion between tags.
///
/// ```
/// use mosaic_site::escape_text;
///
/// assert_eq!(escape_text("<b>\"Clinic\"</b>"), "&lt;b&gt;&quot;Clinic&quot;&lt;/b&gt;");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(input: &str) -> Cow<'_, str> {
    escape_with(input, text_entity)
}

/// Escape text for insertion inside a double- or single-quoted attribute value.
///
/// Covers everything [`escape_text`] does, plus backticks and the whitespace
/// characters that browsers normalise inside attribute values.
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    escape_with(input, attr_entity)
}

/// Derive an identifier from a title: lower-case, spaces become hyphens.
///
/// Deliberately simple; no Unicode folding or punctuation stripping.
pub fn slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

fn text_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

fn attr_entity(c: char) -> Option<&'static str> {
    match c {
        '`' => Some("&#96;"),
        '\n' => Some("&#10;"),
        '\r' => Some("&#13;"),
        '\t' => Some("&#9;"),
        _ => text_entity(c),
    }
}

fn escape_with(input: &str, entity: fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    let Some(first) = input.char_indices().find(|(_, c)| entity(*c).is_some()) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 16);
    out.push_str(&input[..first.0]);
    for c in input[first.0..].chars() {
        match entity(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_text() {
        assert_eq!(
            escape_text("<b>\"Clinic\"</b>"),
            "&lt;b&gt;&quot;Clinic&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_text("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
    }

    #[test]
    fn borrows_when_nothing_to_escape() {
        assert!(matches!(escape_text("Home"), Cow::Borrowed("Home")));
        assert!(matches!(escape_attr("index.html"), Cow::Borrowed(_)));
    }

    #[test]
    fn attribute_escape_is_a_superset() {
        let input = "a\"b`c\nd";
        let escaped = escape_attr(input);
        assert_eq!(escaped, "a&quot;b&#96;c&#10;d");
        for raw in ['<', '>', '"', '`', '\n'] {
            assert!(!escaped.contains(raw), "found raw {raw:?} in {escaped}");
        }
    }

    #[test]
    fn ampersand_is_escaped_once() {
        assert_eq!(escape_text("&amp;"), "&amp;amp;");
    }

    #[test]
    fn preserves_multibyte_text() {
        assert_eq!(escape_text("Clínica <Sur>"), "Clínica &lt;Sur&gt;");
    }

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(slug("Contact Us"), "contact-us");
        assert_eq!(slug("Welcome to Our Website"), "welcome-to-our-website");
        assert_eq!(slug("already-slugged"), "already-slugged");
        assert_eq!(slug(""), "");
    }
}
