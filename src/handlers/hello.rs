use serde_json::Value;

use crate::protocol::{HelloParams, ToolDescriptor, ToolResult};

pub const NAME: &str = "hello";

pub const DESCRIPTOR: ToolDescriptor = ToolDescriptor {
    name: NAME,
    title: "Hello Tool",
    description: "Says hello",
    input_schema,
};

fn input_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {
                "type": "string",
                "description": "The name to say hello to"
            }
        }
    })
}

/// Handle a `hello` tool call.
pub async fn handle(params: HelloParams) -> ToolResult {
    ToolResult::text(greet(&params.name))
}

pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}
