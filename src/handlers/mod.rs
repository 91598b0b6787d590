pub mod get_specification;
pub mod hello;

use serde_json::Value;

use crate::instructions::SERVER_INSTRUCTIONS;
use crate::protocol::{
    HelloParams, InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpErrorCode,
    McpErrorResponse, ReadResourceParams, ToolCallParams, ToolDescriptor, ToolResult,
};
use crate::resources;
use crate::schema;
use crate::state::ServerState;

pub const SERVER_NAME: &str = "acl-mcp-server";
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Every tool advertised in `tools/list`.
pub const TOOLS: [ToolDescriptor; 2] = [get_specification::DESCRIPTOR, hello::DESCRIPTOR];

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, state: &ServerState) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            if let Some(params) = req
                .params
                .as_ref()
                .and_then(|v| serde_json::from_value::<InitializeParams>(v.clone()).ok())
            {
                let client = params.client_info.as_ref();
                tracing::info!(
                    client = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
                    client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
                    protocol = params.protocol_version.as_deref().unwrap_or("unspecified"),
                    "initialize"
                );
            }

            let result = serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {},
                    "resources": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                },
                "instructions": SERVER_INSTRUCTIONS
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        method if method.starts_with("notifications/") => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => {
            let tools: Vec<Value> = TOOLS.iter().map(ToolDescriptor::to_json).collect();
            Some(JsonRpcResponse::success(
                req.id.clone(),
                serde_json::json!({ "tools": tools }),
            ))
        }

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let tool_result = dispatch_tool_call(&params, state).await;
            let result_json = serde_json::to_value(&tool_result).expect("ToolResult must serialize to JSON Value");
            Some(JsonRpcResponse::success(req.id.clone(), result_json))
        }

        "resources/list" => Some(JsonRpcResponse::success(
            req.id.clone(),
            serde_json::json!({ "resources": resources::RESOURCES }),
        )),

        "resources/templates/list" => Some(JsonRpcResponse::success(
            req.id.clone(),
            serde_json::json!({ "resourceTemplates": [] }),
        )),

        "resources/read" => {
            let params: ReadResourceParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid resources/read params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for resources/read"),
                    ));
                }
            };

            match resources::read(&params.uri, state).await {
                Ok(contents) => {
                    let result_json = serde_json::to_value(&contents)
                        .expect("ReadResourceResult must serialize to JSON Value");
                    Some(JsonRpcResponse::success(req.id.clone(), result_json))
                }
                Err(mcp_err) => Some(JsonRpcResponse::error(req.id.clone(), mcp_err.into())),
            }
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

async fn dispatch_tool_call(params: &ToolCallParams, state: &ServerState) -> ToolResult {
    let descriptor = match params.name.as_str() {
        get_specification::NAME | get_specification::LEGACY_NAME => &get_specification::DESCRIPTOR,
        hello::NAME => &hello::DESCRIPTOR,
        _ => return ToolResult::error(format!("Unknown tool: {}", params.name)),
    };

    // Absent arguments are validated as an empty object
    let arguments = match &params.arguments {
        None | Some(Value::Null) => serde_json::json!({}),
        Some(v) => v.clone(),
    };

    if let Err(e) = schema::validate_value(&descriptor.input_schema(), &arguments) {
        return invalid_arguments(descriptor.name, e).into();
    }

    match descriptor.name {
        hello::NAME => match serde_json::from_value::<HelloParams>(arguments) {
            Ok(p) => hello::handle(p).await,
            Err(e) => invalid_arguments(hello::NAME, e).into(),
        },
        _ => get_specification::handle(state).await,
    }
}

fn invalid_arguments(tool: &str, err: impl std::fmt::Display) -> McpErrorResponse {
    McpErrorResponse::new(
        McpErrorCode::InvalidArguments,
        format!("Invalid arguments for {tool}: {err}"),
    )
}
