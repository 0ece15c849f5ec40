//! Blog post teaser.

use std::borrow::Cow;

use serde::Deserialize;

use mosaic_site::{escape_attr, escape_text, Component};

use crate::parts::class_list;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostCard {
    pub title: String,
    pub image_src: String,
    pub image_alt: String,
    pub content: String,
    /// Second paragraph, omitted when empty
    pub content_extra: String,
    pub date: String,
    pub comments: String,
    pub class: String,
}

impl PostCard {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image_src = src.into();
        self.image_alt = alt.into();
        self
    }

    pub fn with_meta(mut self, date: impl Into<String>, comments: impl Into<String>) -> Self {
        self.date = date.into();
        self.comments = comments.into();
        self
    }
}

impl Component for PostCard {
    fn render_html(&self) -> String {
        let extra = if self.content_extra.is_empty() {
            String::new()
        } else {
            format!(
                "    <p class=\"text text-sm\">{}</p>\n",
                escape_text(&self.content_extra)
            )
        };

        format!(
            r#"<article class="{class}">
  <div class="img">
    <img src="{src}" alt="{alt}">
  </div>
  <div class="content">
    <h4>{title}</h4>
    <p class="text text-sm">{content}</p>
{extra}    <div class="info flex">
      <small class="text text-sm"><i class="fas fa-clock"></i> {date}</small>
      <small class="text text-sm"><i class="fas fa-comment"></i> {comments}</small>
    </div>
  </div>
</article>
"#,
            class = escape_attr(&class_list("post-item bg-white", &self.class)),
            src = escape_attr(&self.image_src),
            alt = escape_attr(&self.image_alt),
            title = escape_text(&self.title),
            content = escape_text(&self.content),
            extra = extra,
            date = escape_text(&self.date),
            comments = escape_text(&self.comments),
        )
    }

    fn render_css(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(POST_CARD_CSS))
    }
}

const POST_CARD_CSS: &str = r#".post-item { border-radius: 8px; overflow: hidden; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06); }
.post-item .img img { width: 100%; height: 200px; object-fit: cover; }
.post-item .content { padding: 1.5rem; }
.post-item h4 { color: var(--color-heading); margin-bottom: 0.5rem; }
.post-item .info { display: flex; justify-content: space-between; margin-top: 1rem; color: var(--color-secondary); }"#;
