//! Brand navigation bar with a collapsible link list and optional search box.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

use crate::parts::class_list;

/// One link of a [`Navbar`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Logo, links and an optional search box.
///
/// Independent of the site navigation the page shell emits; use it for a
/// branded header inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Navbar {
    pub logo_src: String,
    pub logo_alt: String,
    pub logo_href: String,
    pub items: Vec<NavItem>,
    pub search: bool,
    /// Background class, `bg-blue` unless set
    pub background: String,
    pub class: String,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            logo_src: String::new(),
            logo_alt: String::new(),
            logo_href: "index.html".to_string(),
            items: Vec::new(),
            search: false,
            background: "bg-blue".to_string(),
            class: String::new(),
        }
    }
}

impl Navbar {
    pub fn new(logo_src: impl Into<String>, logo_alt: impl Into<String>) -> Self {
        Self {
            logo_src: logo_src.into(),
            logo_alt: logo_alt.into(),
            ..Self::default()
        }
    }

    pub fn with_logo_href(mut self, href: impl Into<String>) -> Self {
        self.logo_href = href.into();
        self
    }

    pub fn with_item(mut self, item: NavItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_search(mut self) -> Self {
        self.search = true;
        self
    }
}

impl Component for Navbar {
    fn render_html(&self) -> String {
        let class = class_list(&class_list("navbar", &self.background), &self.class);

        let mut out = format!(
            "<nav class=\"{}\">\n  <div class=\"container flex\">\n    <a href=\"{}\" class=\"navbar-brand\"><img src=\"{}\" alt=\"{}\"></a>\n",
            escape_attr(&class),
            escape_attr(&self.logo_href),
            escape_attr(&self.logo_src),
            escape_attr(&self.logo_alt)
        );
        out.push_str("    <button type=\"button\" class=\"navbar-show-btn\" aria-label=\"Open menu\">&#9776;</button>\n");
        out.push_str("    <div class=\"navbar-collapse\">\n");
        out.push_str("      <button type=\"button\" class=\"navbar-hide-btn\" aria-label=\"Close menu\">&times;</button>\n");
        out.push_str("      <ul class=\"navbar-nav\">\n");
        for item in &self.items {
            out.push_str("        <li class=\"nav-item\"><a href=\"");
            out.push_str(&escape_attr(&item.href));
            out.push_str("\" class=\"nav-link\">");
            out.push_str(&escape_text(&item.label));
            out.push_str("</a></li>\n");
        }
        out.push_str("      </ul>\n");
        if self.search {
            out.push_str("      <form class=\"search-bar\" role=\"search\">\n        <input type=\"search\" class=\"search-control\" placeholder=\"Search here\">\n      </form>\n");
        }
        out.push_str("    </div>\n  </div>\n</nav>\n");
        out
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(NAVBAR_CSS))
    }

    fn render_js(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(NAVBAR_JS))
    }
}

const NAVBAR_CSS: &str = r#".navbar { padding: 1rem 2rem; }
.navbar.bg-blue { background: var(--color-primary); }
.navbar .container { display: flex; align-items: center; justify-content: space-between; gap: 1rem; }
.navbar-brand img { height: 40px; display: block; }
.navbar-nav { display: flex; gap: 1.5rem; list-style: none; }
.navbar .nav-link { color: #ffffff; text-decoration: none; font-weight: 500; }
.navbar-show-btn, .navbar-hide-btn { display: none; background: none; border: none; color: #ffffff; font-size: 1.5rem; cursor: pointer; }
.search-bar .search-control { padding: 0.5rem 0.75rem; border: none; border-radius: 4px; }
@media (max-width: 768px) {
  .navbar-show-btn, .navbar-hide-btn { display: block; }
  .navbar-collapse { position: fixed; top: 0; right: -100%; width: 280px; height: 100vh; padding: 2rem; background: var(--color-primary); transition: right 0.3s ease-out; z-index: 10; }
  .navbar-collapse.show { right: 0; }
  .navbar-nav { flex-direction: column; }
}"#;

const NAVBAR_JS: &str = r#"// Navbar collapse toggle
(function () {
  document.querySelectorAll('.navbar').forEach(function (navbar) {
    if (navbar.dataset.navbarReady) return;
    navbar.dataset.navbarReady = 'true';

    var collapse = navbar.querySelector('.navbar-collapse');
    if (!collapse) return;

    var show = navbar.querySelector('.navbar-show-btn');
    var hide = navbar.querySelector('.navbar-hide-btn');
    if (show) show.addEventListener('click', function () { collapse.classList.add('show'); });
    if (hide) hide.addEventListener('click', function () { collapse.classList.remove('show'); });
  });
})();"#;

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_site::{Site, SiteConfig};

    #[test]
    fn renders_logo_and_items_in_order() {
        let html = Navbar::new("logo.png", "Clinic")
            .with_item(NavItem::new("Home", "index.html"))
            .with_item(NavItem::new("Contact", "contact.html"))
            .render_html();

        assert!(html.starts_with("<nav class=\"navbar bg-blue\">\n"));
        assert!(html.contains(
            "<a href=\"index.html\" class=\"navbar-brand\"><img src=\"logo.png\" alt=\"Clinic\"></a>"
        ));
        let home = html.find("href=\"index.html\" class=\"nav-link\"").unwrap();
        let contact = html.find("href=\"contact.html\" class=\"nav-link\"").unwrap();
        assert!(home < contact);
        assert!(!html.contains("search-bar"));
    }

    #[test]
    fn search_box_is_optional() {
        let html = Navbar::default().with_search().render_html();
        assert!(html.contains("<input type=\"search\" class=\"search-control\""));
    }

    #[test]
    fn escapes_every_field() {
        let navbar = Navbar {
            background: "bg-dark\"".to_string(),
            class: "<x>".to_string(),
            ..Navbar::new("l\".png", "<Clinic>")
                .with_logo_href("/?a=\"b\"")
                .with_item(NavItem::new("<b>Home</b>", "a\"b.html"))
        };
        let html = navbar.render_html();

        assert!(html.contains("class=\"navbar bg-dark&quot; &lt;x&gt;\""));
        assert!(html.contains("href=\"/?a=&quot;b&quot;\""));
        assert!(html.contains("src=\"l&quot;.png\" alt=\"&lt;Clinic&gt;\""));
        assert!(html.contains("<a href=\"a&quot;b.html\" class=\"nav-link\">&lt;b&gt;Home&lt;/b&gt;</a>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn contributes_css_and_guarded_js_once() {
        let mut site = Site::new(SiteConfig::new("Clinic", "dist"));
        site.new_page("Home", "index.html")
            .new_section("Header")
            .add(Navbar::default())
            .add(Navbar::new("other.png", "Other"));

        assert_eq!(site.css().len(), 1);
        assert_eq!(site.js().len(), 1);
        assert!(site.css().contains(NAVBAR_CSS));
        assert!(site
            .render_js()
            .contains("if (navbar.dataset.navbarReady) return;"));
    }
}
