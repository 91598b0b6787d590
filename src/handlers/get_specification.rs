use serde_json::Value;

use crate::protocol::{ToolDescriptor, ToolResult};
use crate::state::ServerState;

pub const NAME: &str = "get_specification";

/// Earlier name of this tool, still accepted on `tools/call`.
pub const LEGACY_NAME: &str = "get_acl_specification";

pub const DESCRIPTOR: ToolDescriptor = ToolDescriptor {
    name: NAME,
    title: "Get ACL Specification",
    description: "\
<Purpose>
Get the complete Agent Communication Language (ACL) specification document. ACL is a Domain-Specific Language (DSL) for concise, structured communication with AI agents in development workflows.
</Purpose>

<Use Cases>
- When the user asks about ACL syntax, commands, or usage (e.g., \"How do I use ACL?\", \"What is begin()?\")
- When encountering ACL object methods like ACL.init(), ACL.load(), ACL.scan(), ACL.list()
- When encountering ACL expressions like begin(), finish(), project.build(), spec.add(), session.summary()
- When questions involve CLAUDE.md, ACL Method Definitions, or project-specific command definitions
- When asked about obj, fn keywords, global functions, object methods, or chaining operators (&&, >, .then/.catch/.finally)
</Use Cases>

<Operational Notes>
- The specification covers core syntax (scope.action(details)), global functions, built-in objects (ACL, project, session), declaration syntax (obj, fn), and common patterns
- **MUST** reference this when interpreting ACL commands to ensure correct behavior
</Operational Notes>",
    input_schema,
};

fn input_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {}
    })
}

/// Handle a `get_specification` tool call.
///
/// Returns the full document as a single text item. Load failures become an
/// `isError` result carrying the structured MCP error, never empty content.
pub async fn handle(state: &ServerState) -> ToolResult {
    match state.specification_text().await {
        Ok(text) => ToolResult::text(&*text),
        Err(mcp_err) => mcp_err.into(),
    }
}
