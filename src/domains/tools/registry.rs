//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Direct dispatch of tool calls by name (used by tests and embedders)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::warn;

use crate::core::config::Config;

use super::ToolError;
use super::definitions::{
    EnrichPersonTool, GetSocialPostsTool, PingTool, SearchPeopleTool, WebFetchTool, WebSearchTool,
};

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for listing available tools and
/// dispatching calls by name outside the rmcp router (e.g. when embedding
/// the tool set without a transport).
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            PingTool::NAME,
            EnrichPersonTool::NAME,
            GetSocialPostsTool::NAME,
            SearchPeopleTool::NAME,
            WebSearchTool::NAME,
            WebFetchTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            PingTool::to_tool(),
            EnrichPersonTool::to_tool(),
            GetSocialPostsTool::to_tool(),
            SearchPeopleTool::to_tool(),
            WebSearchTool::to_tool(),
            WebFetchTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Arguments are deserialized against the tool's schema; unknown names
    /// and malformed arguments are reported as errors, never executed
    /// partially.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            PingTool::NAME => Ok(PingTool::execute(&self.config)),
            EnrichPersonTool::NAME => Ok(EnrichPersonTool::execute(parse_params(arguments)?)),
            GetSocialPostsTool::NAME => Ok(GetSocialPostsTool::execute(parse_params(arguments)?)),
            SearchPeopleTool::NAME => Ok(SearchPeopleTool::execute(parse_params(arguments)?)),
            WebSearchTool::NAME => Ok(WebSearchTool::execute(parse_params(arguments)?)),
            WebFetchTool::NAME => Ok(WebFetchTool::execute(parse_params(arguments)?)),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

/// Deserialize raw arguments into a tool's parameter type.
///
/// Types are never coerced: a string where a number is expected (or any
/// missing required field) fails here.
fn parse_params<T: serde::de::DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(Config::default()))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&"crustdata_ping"));
        assert!(names.contains(&"crustdata_enrich_person"));
        assert!(names.contains(&"crustdata_get_social_posts"));
        assert!(names.contains(&"crustdata_search_people"));
        assert!(names.contains(&"crustdata_web_search"));
        assert!(names.contains(&"crustdata_web_fetch"));
    }

    #[test]
    fn test_registry_call_web_fetch() {
        let result = test_registry()
            .call_tool(
                "crustdata_web_fetch",
                json!({"urls": ["https://example.com"]}),
            )
            .unwrap();
        assert_ne!(result.is_error, Some(true));
    }

    #[test]
    fn test_registry_call_unknown() {
        let err = test_registry().call_tool("unknown", json!({})).unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[test]
    fn test_registry_rejects_wrong_types() {
        // page must be an integer; "2" is not coerced
        let err = test_registry()
            .call_tool(
                "crustdata_get_social_posts",
                json!({"person_linkedin_url": "url", "page": "2"}),
            )
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_all_tools_have_schemas() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(!tool.input_schema.is_empty(), "{} schema empty", tool.name);
            assert!(tool.description.is_some());
        }
    }
}
