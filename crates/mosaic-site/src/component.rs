//! The component contract and the capability boundaries between the tree and
//! its site.

use std::borrow::Cow;

/// A content unit placed inside a section.
///
/// Markup is mandatory. Styling and behavior are optional capabilities that
/// are queried independently; the defaults contribute nothing.
pub trait Component: Send + Sync {
    /// The component's HTML fragment.
    ///
    /// An empty fragment means the component does not produce markup; the
    /// section skips it when rendering.
    fn render_html(&self) -> String;

    /// A CSS block scoped by convention to the component's own class names.
    fn render_css(&self) -> Option<Cow<'static, str>> {
        None
    }

    /// A self-contained JS block. Re-inclusion across pages must be harmless.
    fn render_js(&self) -> Option<Cow<'static, str>> {
        None
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn render_html(&self) -> String {
        (**self).render_html()
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        (**self).render_css()
    }

    fn render_js(&self) -> Option<Cow<'static, str>> {
        (**self).render_js()
    }
}

/// What a page may ask of its site while rendering.
pub trait SiteLink {
    /// Number of registered pages.
    fn page_count(&self) -> usize;

    /// Navigation markup linking every registered page.
    fn build_nav(&self) -> String;
}

/// What a section may ask of its site while components are added.
pub trait AssetCollector {
    /// Register a CSS block in the shared stylesheet.
    fn add_css(&mut self, css: &str);

    /// Register a JS block in the shared script.
    fn add_js(&mut self, js: &str);
}

/// Forward a component's optional payloads to the collector.
pub(crate) fn collect_assets(component: &dyn Component, assets: &mut dyn AssetCollector) {
    if let Some(css) = component.render_css() {
        assets.add_css(&css);
    }
    if let Some(js) = component.render_js() {
        assets.add_js(&js);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Component for Plain {
        fn render_html(&self) -> String {
            "<p>plain</p>".to_string()
        }
    }

    struct Styled;

    impl Component for Styled {
        fn render_html(&self) -> String {
            String::new()
        }

        fn render_css(&self) -> Option<Cow<'static, str>> {
            Some(Cow::Borrowed(".styled{}"))
        }

        fn render_js(&self) -> Option<Cow<'static, str>> {
            Some(Cow::Borrowed("// styled"))
        }
    }

    #[derive(Default)]
    struct Recorder {
        css: Vec<String>,
        js: Vec<String>,
    }

    impl AssetCollector for Recorder {
        fn add_css(&mut self, css: &str) {
            self.css.push(css.to_string());
        }

        fn add_js(&mut self, js: &str) {
            self.js.push(js.to_string());
        }
    }

    #[test]
    fn optional_capabilities_default_to_nothing() {
        let mut recorder = Recorder::default();
        collect_assets(&Plain, &mut recorder);
        assert!(recorder.css.is_empty());
        assert!(recorder.js.is_empty());
    }

    #[test]
    fn forwards_present_capabilities() {
        let mut recorder = Recorder::default();
        collect_assets(&Styled, &mut recorder);
        assert_eq!(recorder.css, vec![".styled{}"]);
        assert_eq!(recorder.js, vec!["// styled"]);
    }

    #[test]
    fn boxed_components_delegate() {
        let boxed: Box<dyn Component> = Box::new(Styled);
        assert!(boxed.render_html().is_empty());
        assert_eq!(boxed.render_css().as_deref(), Some(".styled{}"));
    }
}
