//! Ping tool.
//!
//! Liveness check: reports the server identity and whether a Crustdata API
//! key is configured. Takes no arguments and builds no request.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::config::Config;
use crate::domains::tools::definitions::common::{read_only_annotations, success_result};

/// Parameters for the ping tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PingParams {}

/// Ping tool implementation.
#[derive(Debug, Clone)]
pub struct PingTool;

impl PingTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "crustdata_ping";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check that the Crustdata MCP server is alive. Reports server name, version, dry-run status, and whether an API key is configured.";

    /// Execute the tool logic.
    pub fn execute(config: &Config) -> CallToolResult {
        let key_status = if config.credentials.crustdata_api_key.is_some() {
            "configured"
        } else {
            "not configured"
        };

        success_result(format!(
            "{} v{} - ok (dry-run mode, API key {})",
            config.server.name, config.server.version, key_status
        ))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PingParams>(),
            annotations: Some(read_only_annotations("Ping")),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the transport router.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let config = config.clone();
            async move { Ok(Self::execute(&config)) }.boxed()
        })
    }
}
