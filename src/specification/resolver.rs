use std::path::{Component, Path, PathBuf};

use crate::error::SpecError;

/// Search `start` and each of its ancestors for a regular file named
/// `file_name`, returning the nearest match.
///
/// `start` is resolved first (symlinks and `..` included), so the walk only
/// ever visits real ancestors. Only metadata is consulted; the file contents
/// are never read.
pub async fn find_up(start: &Path, file_name: &str) -> Result<PathBuf, SpecError> {
    let mut current = resolve_start(start).await;

    loop {
        let candidate = current.join(file_name);
        if is_file(&candidate).await {
            tracing::debug!(path = %candidate.display(), "located {file_name}");
            return Ok(candidate);
        }

        // Reached root, no match
        if !current.pop() {
            return Err(SpecError::DocumentNotFound {
                file_name: file_name.to_string(),
                start: start.to_path_buf(),
            });
        }
    }
}

/// Canonical form of `start`, or its lexically normalized absolute form
/// when it does not exist.
async fn resolve_start(start: &Path) -> PathBuf {
    match tokio::fs::canonicalize(start).await {
        Ok(path) => path,
        Err(_) => {
            let absolute = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());
            normalize(&absolute)
        }
    }
}

/// Fold `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}
