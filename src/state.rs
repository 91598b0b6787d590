use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::error::SpecError;
use crate::protocol::{McpErrorCode, McpErrorResponse};
use crate::specification::SpecificationCache;

/// Everything a request handler may touch.
///
/// Cloning is cheap and every clone shares the same specification cache, so
/// the tool and the resource always serve the same text.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub specification: Arc<SpecificationCache>,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        let specification = Arc::new(SpecificationCache::new(config.spec_root.clone()));
        Self { config, specification }
    }

    /// Build state around an existing cache.
    pub fn with_cache(config: ServerConfig, specification: Arc<SpecificationCache>) -> Self {
        Self { config, specification }
    }

    /// Specification text for an adapter, bounded by the tool timeout.
    ///
    /// A load cut off by the timeout leaves the cache empty.
    pub async fn specification_text(&self) -> Result<Arc<str>, McpErrorResponse> {
        bounded(self.config.tool_timeout, self.specification.get()).await
    }
}

async fn bounded<F>(timeout: Duration, load: F) -> Result<Arc<str>, McpErrorResponse>
where
    F: Future<Output = Result<Arc<str>, SpecError>>,
{
    match tokio::time::timeout(timeout, load).await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(spec_err)) => Err(spec_err.into()),
        Err(_) => {
            tracing::error!("Specification load timed out after {} ms", timeout.as_millis());
            Err(McpErrorResponse::new(
                McpErrorCode::InternalError,
                format!("Specification load timed out after {} ms", timeout.as_millis()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[tokio::test]
    async fn stalled_load_times_out_as_internal_error() {
        let load = std::future::pending::<Result<Arc<str>, SpecError>>();

        let err = bounded(Duration::from_millis(20), load).await.unwrap_err();
        assert_eq!(err.error.code, McpErrorCode::InternalError);
        assert!(err.error.message.contains("timed out after 20 ms"));
    }

    #[tokio::test]
    async fn load_failure_keeps_its_code() {
        let load = async {
            Err(SpecError::DocumentNotFound {
                file_name: "ACL.md".to_string(),
                start: PathBuf::from("/nowhere"),
            })
        };

        let err = bounded(Duration::from_secs(5), load).await.unwrap_err();
        assert_eq!(err.error.code, McpErrorCode::DocumentNotFound);
    }
}
