//! Page composition core for mosaic.
//!
//! A [`Site`] owns an ordered list of pages, each page an ordered list of
//! sections, each section an ordered list of [`Component`]s. Components
//! contribute markup and, optionally, CSS and JS blocks that are collected
//! once into shared `style.css` and `script.js` bundles. Generation hands
//! every artifact to a [`Sink`].

pub mod assets;
pub mod component;
pub mod config;
pub mod error;
pub mod escape;
pub mod page;
pub mod section;
pub mod sink;
pub mod site;
pub mod templates;

pub use assets::{AssetRegistry, Theme};
pub use component::{AssetCollector, Component, SiteLink};
pub use config::SiteConfig;
pub use error::{Result, SinkError, SiteError};
pub use escape::{escape_attr, escape_text, slug};
pub use page::{Page, PageId, PageMut};
pub use section::{Section, SectionId, SectionMut};
pub use sink::{MemorySink, Sink};
pub use site::{GenerateSummary, Site, SCRIPT_ARTIFACT, STYLE_ARTIFACT};
