pub mod specification;

use crate::protocol::{McpErrorCode, McpErrorResponse, ReadResourceResult, ResourceDescriptor};
use crate::state::ServerState;

/// Every resource advertised in `resources/list`.
pub const RESOURCES: [ResourceDescriptor; 1] = [specification::DESCRIPTOR];

/// Route a `resources/read` call by URI.
pub async fn read(uri: &str, state: &ServerState) -> Result<ReadResourceResult, McpErrorResponse> {
    match uri {
        specification::URI => specification::read(state).await,
        _ => Err(McpErrorResponse::new(
            McpErrorCode::ResourceNotFound,
            format!("Resource not found: {uri}"),
        )),
    }
}
