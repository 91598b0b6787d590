use std::path::PathBuf;

use thiserror::Error;

/// Failures while locating or loading the specification document.
#[derive(Debug, Error)]
pub enum SpecError {
    /// No ancestor of the start directory contains the document.
    #[error("{file_name} not found in directory tree above {}", .start.display())]
    DocumentNotFound {
        file_name: String,
        start: PathBuf,
    },

    /// The document was located but could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", .path.display())]
    DocumentReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },
}
