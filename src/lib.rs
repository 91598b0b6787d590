//! MCP server for the Agent Communication Language (ACL) specification.
//!
//! Serves the `ACL.md` document found above the executable's directory as
//! the `get_specification` tool and the `instructions://acl-specification`
//! resource over JSON-RPC 2.0 stdio. The document is loaded once and shared
//! by both.

pub mod config;
pub mod error;
pub mod handlers;
pub mod instructions;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod specification;
pub mod state;

pub mod schema;
