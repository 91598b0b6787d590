use crate::protocol::{McpErrorResponse, ReadResourceResult, ResourceDescriptor};
use crate::specification::SPEC_MIME_TYPE;
use crate::state::ServerState;

pub const URI: &str = "instructions://acl-specification";

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    uri: URI,
    name: "ACL Specification for AI Agents",
    description: "Comprehensive specification for understanding and using Agent Communication Language (ACL) in development workflows",
    mime_type: SPEC_MIME_TYPE,
};

/// Read the specification resource through the shared cache.
pub async fn read(state: &ServerState) -> Result<ReadResourceResult, McpErrorResponse> {
    let text = state.specification_text().await?;
    Ok(ReadResourceResult::text(URI, SPEC_MIME_TYPE, &*text))
}
