//! Sections: titled, identified groups of components within a page.

use std::borrow::Cow;
use std::fmt;

use crate::component::{collect_assets, AssetCollector, Component};
use crate::escape::{escape_attr, escape_text, slug};
use crate::page::PageId;
use crate::site::SiteAssets;

/// Handle to a section inside a [`Site`](crate::Site).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId {
    pub(crate) page: PageId,
    pub(crate) index: usize,
}

impl SectionId {
    /// The page this section belongs to.
    pub fn page(&self) -> PageId {
        self.page
    }

    /// Position of the section within its page.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// An ordered list of components with a title and an identifier.
pub struct Section {
    title: String,
    id: Option<String>,
    components: Vec<Box<dyn Component>>,
}

impl Section {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: None,
            components: Vec::new(),
        }
    }

    /// The section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The explicit identifier if a non-empty one was set, otherwise the
    /// title slug.
    pub fn id(&self) -> Cow<'_, str> {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => Cow::Borrowed(id),
            _ => Cow::Owned(slug(&self.title)),
        }
    }

    /// Number of components, including any without markup.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no component has been added.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub(crate) fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Append a component, registering its assets right away.
    pub(crate) fn push(&mut self, component: Box<dyn Component>, assets: &mut dyn AssetCollector) {
        collect_assets(component.as_ref(), assets);
        self.components.push(component);
    }

    /// Render the section wrapper with every component's markup.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(256);

        out.push_str("<section id=\"");
        out.push_str(&escape_attr(&self.id()));
        out.push_str("\" class=\"page\">\n");

        if !self.title.is_empty() {
            out.push_str("  <h1>");
            out.push_str(&escape_text(&self.title));
            out.push_str("</h1>\n");
        }

        out.push_str("  <div class=\"card-container\">\n");
        for (index, component) in self.components.iter().enumerate() {
            let markup = component.render_html();
            if markup.trim().is_empty() {
                tracing::trace!(section = %self.id(), index, "Skipping component without markup");
                continue;
            }
            out.push_str("    ");
            out.push_str(markup.trim_end());
            out.push('\n');
        }
        out.push_str("  </div>\n");
        out.push_str("</section>\n");

        out
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("title", &self.title)
            .field("id", &self.id)
            .field("components", &self.components.len())
            .finish()
    }
}

/// Mutable handle returned while building a section.
///
/// Holds the section together with the site's asset registries and nothing
/// else, so a section can register CSS and JS without reaching sibling pages.
pub struct SectionMut<'a> {
    pub(crate) section: &'a mut Section,
    pub(crate) assets: &'a mut SiteAssets,
    pub(crate) id: SectionId,
}

impl SectionMut<'_> {
    /// Handle for looking the section up again later.
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// Override the identifier derived from the title.
    pub fn with_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.section.set_id(id);
        self
    }

    /// Append a component and forward its CSS and JS to the site.
    pub fn add<C: Component + 'static>(&mut self, component: C) -> &mut Self {
        self.add_boxed(Box::new(component))
    }

    /// Append an already boxed component.
    pub fn add_boxed(&mut self, component: Box<dyn Component>) -> &mut Self {
        self.section.push(component, &mut *self.assets);
        self
    }

    /// Read access to the section being built.
    pub fn section(&self) -> &Section {
        self.section
    }
}

impl fmt::Debug for SectionMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionMut")
            .field("id", &self.id)
            .field("section", &self.section)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Markup(&'static str);

    impl Component for Markup {
        fn render_html(&self) -> String {
            self.0.to_string()
        }
    }

    struct AssetsOnly;

    impl Component for AssetsOnly {
        fn render_html(&self) -> String {
            String::new()
        }

        fn render_css(&self) -> Option<Cow<'static, str>> {
            Some(Cow::Borrowed(".only{}"))
        }
    }

    #[derive(Default)]
    struct Collected(Vec<String>);

    impl AssetCollector for Collected {
        fn add_css(&mut self, css: &str) {
            self.0.push(css.to_string());
        }

        fn add_js(&mut self, js: &str) {
            self.0.push(js.to_string());
        }
    }

    #[test]
    fn derives_id_from_title() {
        let section = Section::new("Contact Us");
        assert_eq!(section.id(), "contact-us");
    }

    #[test]
    fn explicit_id_is_used_verbatim() {
        let mut section = Section::new("Contact Us");
        section.set_id("Reach_Us");
        assert_eq!(section.id(), "Reach_Us");
    }

    #[test]
    fn empty_explicit_id_falls_back_to_slug() {
        let mut section = Section::new("Contact Us");
        section.set_id("");
        assert_eq!(section.id(), "contact-us");
        assert!(section.render().starts_with("<section id=\"contact-us\" class=\"page\">"));
    }

    #[test]
    fn trailing_whitespace_of_markup_is_trimmed() {
        let mut assets = Collected::default();
        let mut section = Section::new("");
        section.push(Box::new(Markup("<p>a</p>\n\n  ")), &mut assets);
        section.push(Box::new(Markup("  <p>b</p>")), &mut assets);

        assert!(section
            .render()
            .contains("    <p>a</p>\n      <p>b</p>\n  </div>"));
    }

    #[test]
    fn renders_wrapper_heading_and_components() {
        let mut assets = Collected::default();
        let mut section = Section::new("Welcome");
        section.push(Box::new(Markup("<p>Hi</p>\n")), &mut assets);

        assert_eq!(
            section.render(),
            "<section id=\"welcome\" class=\"page\">\n  <h1>Welcome</h1>\n  <div class=\"card-container\">\n    <p>Hi</p>\n  </div>\n</section>\n"
        );
    }

    #[test]
    fn omits_heading_for_empty_title() {
        let section = Section::new("");
        let html = section.render();
        assert!(!html.contains("<h1>"));
        assert!(html.starts_with("<section id=\"\" class=\"page\">"));
    }

    #[test]
    fn escapes_title_and_id() {
        let mut section = Section::new("<b>\"Clinic\"</b>");
        let html = section.render();
        assert!(html.contains("<h1>&lt;b&gt;&quot;Clinic&quot;&lt;/b&gt;</h1>"));
        assert!(html.contains("id=\"&lt;b&gt;&quot;clinic&quot;&lt;/b&gt;\""));

        section.set_id("a\"b");
        assert!(section.render().contains("id=\"a&quot;b\""));
    }

    #[test]
    fn skips_components_without_markup_but_keeps_their_assets() {
        let mut assets = Collected::default();
        let mut section = Section::new("Mixed");
        section.push(Box::new(AssetsOnly), &mut assets);
        section.push(Box::new(Markup("<p>kept</p>")), &mut assets);

        assert_eq!(section.len(), 2);
        assert_eq!(assets.0, vec![".only{}"]);

        let html = section.render();
        assert!(html.contains("    <p>kept</p>\n"));
        assert_eq!(html.matches("\n    ").count(), 1);
    }
}
