//! Destinations for generated artifacts.
//!
//! The core never touches the filesystem; it hands each named artifact to a
//! [`Sink`]. Closures work directly, and [`MemorySink`] keeps everything in
//! memory for tests and embedding.

use crate::error::SinkError;

/// Receives generated artifacts by name.
pub trait Sink {
    /// Persist `content` under `name`.
    fn write(&mut self, name: &str, content: &str) -> Result<(), SinkError>;
}

impl<F> Sink for F
where
    F: FnMut(&str, &str) -> Result<(), SinkError>,
{
    fn write(&mut self, name: &str, content: &str) -> Result<(), SinkError> {
        self(name, content)
    }
}

/// In-memory sink preserving write order.
///
/// A second write under the same name replaces the earlier content in place,
/// the way a file would be overwritten.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    artifacts: Vec<(String, String)>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Content written under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, content)| content.as_str())
    }

    /// Artifact names in first-write order.
    pub fn names(&self) -> Vec<&str> {
        self.artifacts.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of distinct artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Consume the sink, returning `(name, content)` pairs.
    pub fn into_artifacts(self) -> Vec<(String, String)> {
        self.artifacts
    }
}

impl Sink for MemorySink {
    fn write(&mut self, name: &str, content: &str) -> Result<(), SinkError> {
        match self.artifacts.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = content.to_string(),
            None => self
                .artifacts
                .push((name.to_string(), content.to_string())),
        }
        Ok(())
    }
}
