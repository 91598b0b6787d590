use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::SpecError;

use super::{resolver, SPEC_FILE_NAME};

/// Memoized loader for the specification document.
///
/// The first successful [`get`](Self::get) resolves and reads the file; every
/// later call returns the same `Arc<str>` without touching the filesystem.
/// Concurrent first callers share one in-flight load. Failed loads leave the
/// slot empty so a later call can retry.
#[derive(Debug)]
pub struct SpecificationCache {
    start_dir: PathBuf,
    file_name: String,
    slot: OnceCell<Arc<str>>,
}

impl SpecificationCache {
    /// Cache that searches upward from `start_dir` for `ACL.md`.
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self::with_file_name(start_dir, SPEC_FILE_NAME)
    }

    pub fn with_file_name(start_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            start_dir: start_dir.into(),
            file_name: file_name.into(),
            slot: OnceCell::new(),
        }
    }

    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether the document has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.slot.initialized()
    }

    /// Return the document text, loading it on first use.
    pub async fn get(&self) -> Result<Arc<str>, SpecError> {
        let text = self.slot.get_or_try_init(|| self.load()).await?;
        Ok(Arc::clone(text))
    }

    async fn load(&self) -> Result<Arc<str>, SpecError> {
        let path = resolver::find_up(&self.start_dir, &self.file_name)
            .await
            .inspect_err(|e| tracing::warn!("{e}"))?;

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SpecError::DocumentReadFailure { path: path.clone(), source })
            .inspect_err(|e| tracing::warn!("{e}"))?;

        tracing::info!(
            path = %path.display(),
            bytes = text.len(),
            "loaded specification document"
        );
        Ok(Arc::from(text))
    }
}
