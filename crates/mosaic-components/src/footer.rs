//! Multi-column site footer with social links.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

use crate::parts::{class_list, Link};

/// Body of one footer column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FooterContent {
    /// Logo, blurb and postal address
    About {
        #[serde(default)]
        logo_src: String,
        #[serde(default)]
        text: String,
        #[serde(default)]
        address: String,
    },
    /// Inline tag list
    Tags {
        #[serde(default)]
        tags: Vec<String>,
    },
    /// Vertical link list
    Links {
        #[serde(default)]
        links: Vec<Link>,
    },
    /// Opening hours or booking details
    Appointment {
        #[serde(default)]
        text: String,
        #[serde(default)]
        info: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FooterColumn {
    #[serde(default)]
    pub title: String,
    pub content: FooterContent,
}

impl FooterColumn {
    pub fn new(title: impl Into<String>, content: FooterContent) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }
}

/// Icon link in the footer's bottom bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Icon font classes, e.g. `fab fa-twitter`
    pub icon_class: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub columns: Vec<FooterColumn>,
    pub social_links: Vec<SocialLink>,
    pub class: String,
}

impl Footer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, column: FooterColumn) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_social_link(mut self, icon_class: impl Into<String>, href: impl Into<String>) -> Self {
        self.social_links.push(SocialLink {
            icon_class: icon_class.into(),
            href: href.into(),
        });
        self
    }
}

fn render_content(content: &FooterContent) -> String {
    let mut out = String::new();
    match content {
        FooterContent::About {
            logo_src,
            text,
            address,
        } => {
            out.push_str("        <div class=\"icon\"><img src=\"");
            out.push_str(&escape_attr(logo_src));
            out.push_str("\" alt=\"\"></div>\n        <p class=\"text text-md\">");
            out.push_str(&escape_text(text));
            out.push_str("</p>\n        <address>");
            out.push_str(&escape_text(address));
            out.push_str("</address>\n");
        }
        FooterContent::Tags { tags } => {
            out.push_str("        <ul class=\"tags-list flex\">\n");
            for tag in tags {
                out.push_str("          <li>");
                out.push_str(&escape_text(tag));
                out.push_str("</li>\n");
            }
            out.push_str("        </ul>\n");
        }
        FooterContent::Links { links } => {
            out.push_str("        <ul>\n");
            for link in links {
                out.push_str("          <li><a href=\"");
                out.push_str(&escape_attr(&link.href));
                out.push_str("\" class=\"text-white\">");
                out.push_str(&escape_text(&link.label));
                out.push_str("</a></li>\n");
            }
            out.push_str("        </ul>\n");
        }
        FooterContent::Appointment { text, info } => {
            out.push_str("        <p class=\"text text-md\">");
            out.push_str(&escape_text(text));
            out.push_str("</p>\n        <ul class=\"appointment-info\">\n");
            for line in info {
                out.push_str("          <li>");
                out.push_str(&escape_text(line));
                out.push_str("</li>\n");
            }
            out.push_str("        </ul>\n");
        }
    }
    out
}

impl Component for Footer {
    fn render_html(&self) -> String {
        let mut out = format!(
            "<footer class=\"{}\">\n  <div class=\"container\">\n    <div class=\"footer-inner text-white py grid\">\n",
            escape_attr(&class_list("footer text-center", &self.class))
        );

        for column in &self.columns {
            out.push_str("      <div class=\"footer-item\">\n        <h3 class=\"footer-head\">");
            out.push_str(&escape_text(&column.title));
            out.push_str("</h3>\n");
            out.push_str(&render_content(&column.content));
            out.push_str("      </div>\n");
        }
        out.push_str("    </div>\n");

        if !self.social_links.is_empty() {
            out.push_str("    <div class=\"footer-links\">\n      <ul class=\"flex\">\n");
            for social in &self.social_links {
                out.push_str("        <li><a href=\"");
                out.push_str(&escape_attr(&social.href));
                out.push_str("\" class=\"text-white flex\"><i class=\"");
                out.push_str(&escape_attr(&social.icon_class));
                out.push_str("\"></i></a></li>\n");
            }
            out.push_str("      </ul>\n    </div>\n");
        }

        out.push_str("  </div>\n</footer>\n");
        out
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(FOOTER_CSS))
    }
}

const FOOTER_CSS: &str = r#".footer { background: var(--color-primary); padding: 3rem 2rem 1.5rem; }
.footer-inner { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 2rem; }
.footer-head { font-size: 1.125rem; margin-bottom: 1rem; }
.footer ul { list-style: none; }
.footer a { text-decoration: none; }
.tags-list { display: flex; flex-wrap: wrap; gap: 0.5rem; justify-content: center; }
.tags-list li { padding: 0.25rem 0.75rem; border: 1px solid rgba(255, 255, 255, 0.4); border-radius: 4px; }
.footer-links ul { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; }"#;
