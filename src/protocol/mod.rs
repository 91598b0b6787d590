pub mod descriptor;
pub mod request;
pub mod response;

pub use descriptor::{ResourceDescriptor, ToolDescriptor};
pub use request::{
    ClientInfo, HelloParams, InitializeParams, JsonRpcRequest, ReadResourceParams, RpcId,
    ToolCallParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, McpError, McpErrorCode, McpErrorResponse, ReadResourceResult,
    ResourceContents, ToolResult, ToolResultContent,
};
