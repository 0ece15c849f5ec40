//! Filesystem sink writing artifacts under an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use mosaic_site::{Sink, SinkError};

/// Writes each artifact to `root/name`, creating directories on demand.
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Sink for DirSink {
    fn write(&mut self, name: &str, content: &str) -> Result<(), SinkError> {
        let path = self.root.join(name);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SinkError::with_source(format!("Failed to create {}", parent.display()), e)
            })?;
        }

        fs::write(&path, content)
            .map_err(|e| SinkError::with_source(format!("Failed to write {}", path.display()), e))?;

        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}
