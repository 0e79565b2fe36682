//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! This module builds the ToolRouter for the STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    EnrichPersonTool, GetSocialPostsTool, PingTool, SearchPeopleTool, WebFetchTool, WebSearchTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(PingTool::create_route(config))
        .with_route(EnrichPersonTool::create_route())
        .with_route(GetSocialPostsTool::create_route())
        .with_route(SearchPeopleTool::create_route())
        .with_route(WebSearchTool::create_route())
        .with_route(WebFetchTool::create_route())
}
