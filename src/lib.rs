//! Crustdata MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing
//! Crustdata data-enrichment tools (people search/enrichment, web search,
//! web content fetch) in dry-run mode: every tool validates its input,
//! builds the outbound API request, and returns a rendering of that request
//! instead of sending it.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **client**: Request descriptors, request construction, dry-run formatting
//!   - **tools**: MCP tool definitions, routing, and registration
//!
//! # Example
//!
//! ```rust,no_run
//! use crustdata_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
