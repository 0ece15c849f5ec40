//! The site: root of the page tree, owner of the shared asset registries.

use std::time::Instant;

use crate::assets::{AssetRegistry, Theme};
use crate::component::{AssetCollector, SiteLink};
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::escape::{escape_attr, escape_text};
use crate::page::{Page, PageId, PageMut, RenderContext};
use crate::section::{Section, SectionId, SectionMut};
use crate::sink::Sink;
use crate::templates::DocumentTemplates;

/// Artifact name of the shared stylesheet.
pub const STYLE_ARTIFACT: &str = "style.css";

/// Artifact name of the shared script.
pub const SCRIPT_ARTIFACT: &str = "script.js";

/// The two registries sections write into.
#[derive(Debug, Default)]
pub(crate) struct SiteAssets {
    css: AssetRegistry,
    js: AssetRegistry,
}

impl AssetCollector for SiteAssets {
    fn add_css(&mut self, css: &str) {
        if self.css.add(css) {
            tracing::debug!(blocks = self.css.len(), "Registered CSS block");
        }
    }

    fn add_js(&mut self, js: &str) {
        if self.js.add(js) {
            tracing::debug!(blocks = self.js.len(), "Registered JS block");
        }
    }
}

/// Result of a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of page artifacts written
    pub pages: usize,

    /// Number of distinct CSS blocks in the stylesheet
    pub css_blocks: usize,

    /// Number of distinct JS blocks in the script
    pub js_blocks: usize,

    /// Artifact names in write order
    pub artifacts: Vec<String>,

    /// Total generation time in milliseconds
    pub duration_ms: u64,
}

/// Root registry of pages and shared assets.
///
/// Build the tree through [`Site::new_page`], then call [`Site::generate`]
/// as often as needed. Mutation needs `&mut Site`; rendering only `&Site`.
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    pages: Vec<Page>,
    assets: SiteAssets,
    templates: DocumentTemplates,
}

impl Site {
    /// Create an empty site.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            assets: SiteAssets::default(),
            templates: DocumentTemplates::new(),
        }
    }

    /// Site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Register a page. Pages appear in navigation in registration order.
    ///
    /// Output names are not checked for uniqueness: two pages sharing one
    /// name overwrite each other's artifact at generation time.
    pub fn new_page(
        &mut self,
        title: impl Into<String>,
        output_name: impl Into<String>,
    ) -> PageMut<'_> {
        let output_name = output_name.into();
        if self.pages.iter().any(|p| p.output_name() == output_name) {
            tracing::warn!(
                "Output name {} is already used by another page; the later page will overwrite it",
                output_name
            );
        }

        let id = PageId(self.pages.len());
        self.pages.push(Page::new(id, title, output_name));
        PageMut { site: self, id }
    }

    /// Reopen a registered page for building.
    pub fn page_mut(&mut self, id: PageId) -> Option<PageMut<'_>> {
        if id.0 < self.pages.len() {
            Some(PageMut { site: self, id })
        } else {
            None
        }
    }

    /// Reopen a section for adding more components.
    pub fn section_mut(&mut self, id: SectionId) -> Option<SectionMut<'_>> {
        let Site { pages, assets, .. } = self;
        let section = pages.get_mut(id.page.0)?.section_mut(id.index)?;
        Some(SectionMut {
            section,
            assets,
            id,
        })
    }

    /// Registered pages in registration order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Look up a page.
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id.0)
    }

    /// Look up a section.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.page(id.page)?.sections().get(id.index)
    }

    /// The shared CSS registry.
    pub fn css(&self) -> &AssetRegistry {
        &self.assets.css
    }

    /// The shared JS registry.
    pub fn js(&self) -> &AssetRegistry {
        &self.assets.js
    }

    /// Render one page as a full HTML document.
    pub fn render_page(&self, id: PageId) -> Result<String> {
        let page = self.page(id).ok_or(SiteError::PageNotFound(id.0))?;
        page.render_html(&self.render_context())
    }

    /// Render the shared stylesheet: the base block of the configured theme,
    /// or of [`Theme::default`] when none is set, then every registered CSS
    /// block.
    pub fn render_css(&self) -> String {
        let base = match &self.config.theme {
            Some(theme) => theme.base_css(),
            None => Theme::default().base_css(),
        };
        base + &self.assets.css.render()
    }

    /// Render the shared script.
    pub fn render_js(&self) -> String {
        self.assets.js.render()
    }

    /// Render every artifact and hand each one to `sink`.
    ///
    /// Pages go first in registration order, then the stylesheet, then the
    /// script. Stops at the first sink failure; artifacts already written
    /// are left as they are.
    pub fn generate<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<GenerateSummary> {
        let start = Instant::now();
        tracing::info!("Generating {} pages for {}", self.pages.len(), self.config.title);

        let mut artifacts = Vec::with_capacity(self.pages.len() + 2);
        let cx = self.render_context();

        for page in &self.pages {
            let html = page.render_html(&cx)?;
            write_artifact(sink, page.output_name(), &html)?;
            artifacts.push(page.output_name().to_string());
        }

        write_artifact(sink, STYLE_ARTIFACT, &self.render_css())?;
        artifacts.push(STYLE_ARTIFACT.to_string());

        write_artifact(sink, SCRIPT_ARTIFACT, &self.render_js())?;
        artifacts.push(SCRIPT_ARTIFACT.to_string());

        let summary = GenerateSummary {
            pages: self.pages.len(),
            css_blocks: self.assets.css.len(),
            js_blocks: self.assets.js.len(),
            artifacts,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Generated {} pages with {} CSS and {} JS blocks in {}ms",
            summary.pages,
            summary.css_blocks,
            summary.js_blocks,
            summary.duration_ms
        );

        Ok(summary)
    }

    /// Split borrow used by page handles. `id` always comes from a live
    /// `PageMut`, which is only created for registered pages.
    pub(crate) fn page_and_assets(&mut self, id: PageId) -> (&mut Page, &mut SiteAssets) {
        (&mut self.pages[id.0], &mut self.assets)
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            link: self,
            templates: &self.templates,
            site_title: &self.config.title,
            lang: &self.config.lang,
        }
    }
}

impl SiteLink for Site {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn build_nav(&self) -> String {
        let mut nav = String::from("<nav class=\"main-nav\">\n");
        for page in &self.pages {
            nav.push_str("  <a href=\"");
            nav.push_str(&escape_attr(page.output_name()));
            nav.push_str("\" class=\"nav-link\">");
            nav.push_str(&escape_text(page.title()));
            nav.push_str("</a>\n");
        }
        nav.push_str("</nav>\n");
        nav
    }
}

impl AssetCollector for Site {
    fn add_css(&mut self, css: &str) {
        self.assets.add_css(css);
    }

    fn add_js(&mut self, js: &str) {
        self.assets.add_js(js);
    }
}

fn write_artifact<S: Sink + ?Sized>(sink: &mut S, name: &str, content: &str) -> Result<()> {
    tracing::debug!("Writing {} ({} bytes)", name, content.len());
    sink.write(name, content).map_err(|source| SiteError::Sink {
        artifact: name.to_string(),
        source,
    })
}
