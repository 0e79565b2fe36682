//! Domain modules organized by bounded context.
//!
//! - **client**: Crustdata API request construction and dry-run rendering
//! - **tools**: MCP tool definitions exposed to clients

pub mod client;
pub mod tools;
