use serde::Serialize;
use serde_json::Value;

/// Static metadata advertised for a tool in `tools/list`.
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub input_schema: fn() -> Value,
}

impl ToolDescriptor {
    pub fn input_schema(&self) -> Value {
        (self.input_schema)()
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "title": self.title,
            "description": self.description,
            "inputSchema": self.input_schema(),
        })
    }
}

/// Static metadata advertised for a resource in `resources/list`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceDescriptor {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "mimeType")]
    pub mime_type: &'static str,
}
