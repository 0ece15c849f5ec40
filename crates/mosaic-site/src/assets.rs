//! Asset registries for the shared CSS and JavaScript bundles.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Ordered, content-deduplicated store of CSS or JS blocks.
///
/// Blocks are compared by full string equality. Lookup is a linear scan;
/// registries hold a handful of component blocks and are filled once per
/// build, so keeping arrival order simple matters more than insert speed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRegistry {
    blocks: Vec<String>,
}

impl AssetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `content` unless it is empty or already present.
    ///
    /// Returns `true` when a new block was stored.
    pub fn add(&mut self, content: &str) -> bool {
        if content.is_empty() || self.contains(content) {
            return false;
        }
        self.blocks.push(content.to_string());
        true
    }

    /// Whether an identical block is already stored.
    pub fn contains(&self, content: &str) -> bool {
        self.blocks.iter().any(|block| block == content)
    }

    /// Number of stored blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no block has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(String::as_str)
    }

    /// Concatenate all blocks, each followed by a newline.
    pub fn render(&self) -> String {
        let capacity = self.blocks.iter().map(|b| b.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for block in &self.blocks {
            out.push_str(block);
            out.push('\n');
        }
        out
    }
}

/// Colour set that seeds the base block of the shared stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Brand colour, also used for headings
    pub primary: String,
    /// Accent colour
    pub secondary: String,
    /// Body text colour
    pub text: String,
    /// Page and card background
    pub background: String,
    /// Border colour
    pub border: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#3f88bf".to_string(),
            secondary: "#ff9300".to_string(),
            text: "#333333".to_string(),
            background: "#ffffff".to_string(),
            border: "#e0e0e0".to_string(),
        }
    }
}

impl Theme {
    /// Render the base stylesheet: custom properties, reset and the layout
    /// rules for the section wrapper every page uses.
    pub fn base_css(&self) -> String {
        let mut css = String::with_capacity(BASE_CSS.len() + 256);
        // Writing to a String cannot fail.
        let _ = write!(
            css,
            ":root {{\n  --color-primary: {primary};\n  --color-secondary: {secondary};\n  --color-text: {text};\n  --color-background: {background};\n  --color-border: {border};\n  --color-heading: {primary};\n  --color-card-bg: {background};\n}}\n",
            primary = self.primary,
            secondary = self.secondary,
            text = self.text,
            background = self.background,
            border = self.border,
        );
        css.push_str(BASE_CSS);
        css
    }
}

const BASE_CSS: &str = r#"*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: var(--color-background); color: var(--color-text); line-height: 1.6; }
.main-nav { display: flex; gap: 1rem; padding: 1rem 2rem; background: var(--color-primary); }
.main-nav .nav-link { color: #ffffff; text-decoration: none; font-weight: 500; }
.main-nav .nav-link:hover { text-decoration: underline; }
section { padding: 2rem; max-width: 1200px; margin: 0 auto; }
h1 { color: var(--color-heading); font-size: 2.5rem; margin-bottom: 1.5rem; text-align: center; }
h2 { color: var(--color-heading); font-size: 2rem; margin-bottom: 1rem; }
.card-container { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 1.5rem; margin-top: 2rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_empty_content() {
        let mut registry = AssetRegistry::new();
        assert!(!registry.add(""));
        assert!(registry.is_empty());
        assert_eq!(registry.render(), "");
    }

    #[test]
    fn deduplicates_by_exact_content() {
        let mut registry = AssetRegistry::new();
        assert!(registry.add(".a{}"));
        assert!(registry.add(".b{}"));
        assert!(!registry.add(".a{}"));
        assert!(registry.add(".a{} "));

        let blocks: Vec<_> = registry.iter().collect();
        assert_eq!(blocks, vec![".a{}", ".b{}", ".a{} "]);
    }

    #[test]
    fn keeps_first_insertion_position() {
        let mut registry = AssetRegistry::new();
        registry.add("first");
        registry.add("second");
        registry.add("first");
        registry.add("third");

        assert_eq!(registry.render(), "first\nsecond\nthird\n");
    }

    #[test]
    fn render_is_deterministic() {
        let mut registry = AssetRegistry::new();
        registry.add("// one");
        registry.add("// two");
        assert_eq!(registry.render(), registry.render());
    }

    #[test]
    fn theme_seeds_custom_properties() {
        let theme = Theme {
            primary: "#112233".to_string(),
            ..Theme::default()
        };
        let css = theme.base_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary: #112233;"));
        assert!(css.contains("--color-heading: #112233;"));
        assert!(css.contains(".card-container"));
    }

    #[test]
    fn theme_fields_default_individually() {
        let theme: Theme = toml::from_str("primary = \"#000000\"").unwrap();
        assert_eq!(theme.primary, "#000000");
        assert_eq!(theme.border, Theme::default().border);
    }
}
