//! Pages: one output document each.

use std::fmt;

use crate::component::SiteLink;
use crate::error::{Result, SiteError};
use crate::section::{Section, SectionId, SectionMut};
use crate::site::{Site, SCRIPT_ARTIFACT, STYLE_ARTIFACT};
use crate::templates::{DocumentContext, DocumentTemplates};

/// Handle to a page inside a [`Site`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub(crate) usize);

impl PageId {
    /// Registration position of the page.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An ordered list of sections plus page metadata.
#[derive(Debug)]
pub struct Page {
    id: PageId,
    title: String,
    output_name: String,
    head: Vec<String>,
    sections: Vec<Section>,
    raw: Vec<String>,
}

/// Site-level values a page needs to render, handed down by the site.
pub(crate) struct RenderContext<'a> {
    pub(crate) link: &'a dyn SiteLink,
    pub(crate) templates: &'a DocumentTemplates,
    pub(crate) site_title: &'a str,
    pub(crate) lang: &'a str,
}

impl Page {
    pub(crate) fn new(id: PageId, title: impl Into<String>, output_name: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            output_name: output_name.into(),
            head: Vec::new(),
            sections: Vec::new(),
            raw: Vec::new(),
        }
    }

    /// Handle of this page within its site.
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Name of the artifact this page is written to.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Extra head fragments in insertion order.
    pub fn head(&self) -> &[String] {
        &self.head
    }

    /// Sections in insertion order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Raw body fragments in insertion order.
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    pub(crate) fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    pub(crate) fn push_section(&mut self, title: impl Into<String>) -> usize {
        self.sections.push(Section::new(title));
        self.sections.len() - 1
    }

    pub(crate) fn render_html(&self, cx: &RenderContext<'_>) -> Result<String> {
        let nav = if cx.link.page_count() > 1 {
            cx.link.build_nav()
        } else {
            String::new()
        };

        let doc = DocumentContext {
            lang: cx.lang,
            site_title: cx.site_title,
            title: &self.title,
            head: &self.head,
            nav: &nav,
            sections: self.sections.iter().map(Section::render).collect(),
            raw: &self.raw,
            style_href: STYLE_ARTIFACT,
            script_href: SCRIPT_ARTIFACT,
        };

        cx.templates
            .render_page(&doc)
            .map_err(|source| SiteError::Template {
                what: format!("page {}", self.output_name),
                source,
            })
    }
}

/// Mutable handle returned while building a page.
pub struct PageMut<'a> {
    pub(crate) site: &'a mut Site,
    pub(crate) id: PageId,
}

impl PageMut<'_> {
    /// Handle for looking the page up again later.
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Append a section titled `title` and return it for chaining.
    pub fn new_section(&mut self, title: impl Into<String>) -> SectionMut<'_> {
        let (page, assets) = self.site.page_and_assets(self.id);
        let index = page.push_section(title);
        let section = &mut page.sections[index];
        SectionMut {
            section,
            assets,
            id: SectionId {
                page: self.id,
                index,
            },
        }
    }

    /// Append a trusted fragment to the document head. Not escaped.
    pub fn add_head(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.page_mut().head.push(fragment.into());
        self
    }

    /// Append trusted markup after the sections. Not escaped.
    pub fn add_raw(&mut self, html: impl Into<String>) -> &mut Self {
        self.page_mut().raw.push(html.into());
        self
    }

    /// Read access to the page being built.
    pub fn page(&self) -> &Page {
        &self.site.pages()[self.id.0]
    }

    /// Render the page as it stands, with navigation for the pages
    /// registered so far.
    pub fn render_html(&self) -> Result<String> {
        self.site.render_page(self.id)
    }

    fn page_mut(&mut self) -> &mut Page {
        self.site.page_and_assets(self.id).0
    }
}

impl fmt::Debug for PageMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageMut")
            .field("id", &self.id)
            .field("page", self.page())
            .finish()
    }
}
