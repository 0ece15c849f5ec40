//! Auto-advancing image carousel.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, Component};

/// One slide of a [`Carousel`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselImage {
    pub src: String,
    pub alt: String,
}

impl CarouselImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Images shown one at a time, advancing every three seconds.
///
/// A carousel without images renders no markup but still registers its
/// stylesheet and script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Carousel {
    pub images: Vec<CarouselImage>,
}

impl Carousel {
    pub fn new(images: Vec<CarouselImage>) -> Self {
        Self { images }
    }
}

impl Component for Carousel {
    fn render_html(&self) -> String {
        if self.images.is_empty() {
            tracing::debug!("Carousel has no images");
            return String::new();
        }

        let mut out = String::from("<div class=\"carousel\">\n");
        for image in &self.images {
            out.push_str("  <div class=\"carousel-item\"><img src=\"");
            out.push_str(&escape_attr(&image.src));
            out.push_str("\" alt=\"");
            out.push_str(&escape_attr(&image.alt));
            out.push_str("\"></div>\n");
        }
        out.push_str("</div>\n");
        out
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(CAROUSEL_CSS))
    }

    fn render_js(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(CAROUSEL_JS))
    }
}

const CAROUSEL_CSS: &str = r#".carousel { position: relative; width: 100%; overflow: hidden; }
.carousel-item { display: none; }
.carousel-item.active { display: block; }
.carousel-item img { width: 100%; height: auto; }"#;

const CAROUSEL_JS: &str = r#"// Carousel auto-advance
(function () {
  document.querySelectorAll('.carousel').forEach(function (carousel) {
    if (carousel.dataset.carouselReady) return;
    carousel.dataset.carouselReady = 'true';

    var items = carousel.querySelectorAll('.carousel-item');
    if (items.length === 0) return;

    var current = 0;
    items[current].classList.add('active');

    setInterval(function () {
      items[current].classList.remove('active');
      current = (current + 1) % items.length;
      items[current].classList.add('active');
    }, 3000);
  });
})();"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_one_item_per_image() {
        let carousel = Carousel::new(vec![
            CarouselImage::new("a.jpg", "First"),
            CarouselImage::new("b.jpg", "Second"),
        ]);
        assert_eq!(
            carousel.render_html(),
            "<div class=\"carousel\">\n  <div class=\"carousel-item\"><img src=\"a.jpg\" alt=\"First\"></div>\n  <div class=\"carousel-item\"><img src=\"b.jpg\" alt=\"Second\"></div>\n</div>\n"
        );
    }

    #[test]
    fn escapes_sources_and_alt_text() {
        let carousel = Carousel::new(vec![CarouselImage::new("x\".jpg", "<alt>")]);
        let html = carousel.render_html();
        assert!(html.contains("src=\"x&quot;.jpg\""));
        assert!(html.contains("alt=\"&lt;alt&gt;\""));
    }

    #[test]
    fn empty_carousel_has_no_markup_but_keeps_assets() {
        let carousel = Carousel::default();
        assert!(carousel.render_html().is_empty());
        assert!(carousel.render_css().is_some());
        assert!(carousel.render_js().is_some());
    }

    #[test]
    fn script_guards_against_double_initialisation() {
        let js = Carousel::default().render_js().unwrap();
        assert!(js.contains("if (carousel.dataset.carouselReady) return;"));
    }
}
