//! End-to-end runs of the stdio loop over in-memory buffers.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use acl_mcp_server::config::ServerConfig;
use acl_mcp_server::server::McpServer;
use acl_mcp_server::specification::{SpecificationCache, SPEC_FILE_NAME};
use acl_mcp_server::state::ServerState;
use serde_json::Value;

/// Name no real ancestor of the temp directory carries.
const ABSENT_NAME: &str = "acl-server-tests-spec.md";

async fn run_session(spec_root: &Path, input: &str) -> Vec<Value> {
    run_session_with(ServerState::new(ServerConfig::new(spec_root)), input).await
}

async fn run_session_with(state: ServerState, input: &str) -> Vec<Value> {
    let mut server = McpServer::new(state);
    let mut output = Vec::new();
    server.serve(input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn full_session_serves_tool_and_resource() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join(SPEC_FILE_NAME),
        "# Agent Communication Language (ACL)\n## 1. Introduction\n",
    )
    .unwrap();

    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","clientInfo":{"name":"test-client","version":"1.0.0"}}}"#, "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#, "\n",
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_specification","arguments":{}}}"#, "\n",
        r#"{"jsonrpc":"2.0","id":"read","method":"resources/read","params":{"uri":"instructions://acl-specification"}}"#, "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"hello","arguments":{"name":"world"}}}"#, "\n",
    );

    let responses = run_session(tmp.path(), input).await;
    assert_eq!(responses.len(), 4, "notification and blank line produce no output");

    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "acl-mcp-server");

    assert_eq!(responses[1]["id"], 2);
    let tool_text = responses[1]["result"]["content"][0]["text"].as_str().unwrap();
    assert!(tool_text.contains("## 1. Introduction"));

    assert_eq!(responses[2]["id"], "read");
    let resource_text = responses[2]["result"]["contents"][0]["text"].as_str().unwrap();
    assert_eq!(tool_text, resource_text);

    assert_eq!(responses[3]["result"]["content"][0]["text"], "Hello, world!");
}

#[tokio::test]
async fn requests_before_initialize_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#, "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#, "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"initialize"}"#, "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/list"}"#, "\n",
    );

    let responses = run_session(tmp.path(), input).await;
    assert_eq!(responses.len(), 3);

    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["error"]["code"], -32600);
    assert_eq!(responses[0]["error"]["message"], "Server not initialized");

    assert_eq!(responses[1]["id"], 2);
    assert!(responses[1]["result"].is_object());

    assert_eq!(responses[2]["id"], 3);
    assert_eq!(responses[2]["result"]["tools"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn malformed_lines_get_protocol_errors() {
    let tmp = tempfile::tempdir().unwrap();

    let input = concat!(
        "not json\n",
        r#"{"jsonrpc":"1.0","id":1,"method":"initialize"}"#, "\n",
    );

    let responses = run_session(tmp.path(), input).await;
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], -32700);
    assert!(responses[0].get("id").is_none());
    assert_eq!(responses[1]["error"]["code"], -32600);
    assert_eq!(responses[1]["id"], 1);
}

#[tokio::test]
async fn missing_document_surfaces_as_error_not_empty_content() {
    let tmp = tempfile::tempdir().unwrap();
    let state = ServerState::with_cache(
        ServerConfig::new(tmp.path()),
        Arc::new(SpecificationCache::with_file_name(tmp.path(), ABSENT_NAME)),
    );

    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#, "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_specification","arguments":{}}}"#, "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"resources/read","params":{"uri":"instructions://acl-specification"}}"#, "\n",
    );

    let responses = run_session_with(state, input).await;
    assert_eq!(responses.len(), 3);

    assert_eq!(responses[1]["result"]["isError"], true);
    assert_eq!(responses[2]["error"]["code"], -32603);
}

#[tokio::test]
async fn oversized_line_is_rejected_and_session_continues() {
    let tmp = tempfile::tempdir().unwrap();

    let mut input = "x".repeat(2 * 1024 * 1024);
    input.push('\n');
    input.push_str(r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#);
    input.push('\n');

    let responses = run_session(tmp.path(), &input).await;
    assert_eq!(responses.len(), 2, "the oversized line yields exactly one error");

    assert_eq!(responses[0]["error"]["code"], -32700);
    assert_eq!(responses[1]["id"], 1);
    assert_eq!(responses[1]["result"]["serverInfo"]["name"], "acl-mcp-server");
}
