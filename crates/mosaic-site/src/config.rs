//! Site-wide configuration.

use serde::{Deserialize, Serialize};

use crate::assets::Theme;

/// Values shared by every page of a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, emitted as the application name of every page
    pub title: String,

    /// Output directory hint for sinks that write to disk
    pub output: String,

    /// Document language tag
    pub lang: String,

    /// Colour theme seeding the base block of the stylesheet; the default
    /// theme is used when unset
    pub theme: Option<Theme>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            output: "dist".to_string(),
            lang: "en".to_string(),
            theme: None,
        }
    }
}

impl SiteConfig {
    /// Configuration with the given title and output directory.
    pub fn new(title: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: SiteConfig = toml::from_str("title = \"Clinic\"").unwrap();
        assert_eq!(config.title, "Clinic");
        assert_eq!(config.output, "dist");
        assert_eq!(config.lang, "en");
        assert!(config.theme.is_none());
    }

    #[test]
    fn theme_table_is_optional_and_partial() {
        let config: SiteConfig = toml::from_str(
            r##"
title = "Clinic"
lang = "es"

[theme]
secondary = "#00aa00"
"##,
        )
        .unwrap();

        let theme = config.theme.unwrap();
        assert_eq!(theme.secondary, "#00aa00");
        assert_eq!(theme.primary, Theme::default().primary);
        assert_eq!(config.lang, "es");
    }

    #[test]
    fn builders_override_defaults() {
        let config = SiteConfig::new("Clinic", "public")
            .with_lang("es")
            .with_theme(Theme::default());
        assert_eq!(config.output, "public");
        assert_eq!(config.lang, "es");
        assert_eq!(config.theme, Some(Theme::default()));
    }
}
