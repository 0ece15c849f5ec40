//! Error types for site generation.

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Errors that can occur while rendering or generating a site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to write artifact {artifact}: {source}")]
    Sink {
        artifact: String,
        #[source]
        source: SinkError,
    },

    #[error("Failed to render {what}: {source}")]
    Template {
        what: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Page not found: {0}")]
    PageNotFound(usize),
}

/// Failure reported by a [`Sink`](crate::Sink).
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SinkError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SinkError {
    /// A failure described only by a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// A failure wrapping an underlying error.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        Self {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
