//! Web fetch tool.
//!
//! Fetches HTML content from up to 10 URLs through Crustdata's web-fetch
//! endpoint. Dry-run: returns the POST request it would send.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::domains::client::{Method, build_request};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    collect_violations, error_result, read_only_annotations, success_result,
};

/// Maximum number of URLs accepted per call.
pub const MAX_FETCH_URLS: usize = 10;

/// Parameters for the web fetch tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebFetchParams {
    /// URLs to fetch. Each must include the protocol (http:// or https://);
    /// that prefix is a caller contract and is not validated here.
    #[schemars(description = "List of URLs to fetch (1-10, must include http:// or https://)")]
    pub urls: Vec<String>,
}

impl WebFetchParams {
    /// Trim each URL and enforce the 1..=10 count bound.
    pub fn validate(mut self) -> Result<Self, ToolError> {
        for url in &mut self.urls {
            *url = url.trim().to_string();
        }

        let mut problems = Vec::new();
        if self.urls.is_empty() {
            problems.push("urls must contain at least 1 URL".to_string());
        }
        if self.urls.len() > MAX_FETCH_URLS {
            problems.push(format!(
                "urls must contain at most {} URLs (got {})",
                MAX_FETCH_URLS,
                self.urls.len()
            ));
        }
        collect_violations(problems)?;

        Ok(self)
    }
}

/// Web fetch tool implementation.
#[derive(Debug, Clone)]
pub struct WebFetchTool;

impl WebFetchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "crustdata_web_fetch";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch HTML content from one or more URLs (max 10 per request). Returns page title and full HTML for each publicly accessible page; URLs must start with http:// or https://. Returns the dry-run request.";

    /// Execute the tool logic.
    pub fn execute(params: WebFetchParams) -> CallToolResult {
        let params = match params.validate() {
            Ok(params) => params,
            Err(e) => return error_result(&e.to_string()),
        };

        info!("Building web fetch request for {} URL(s)", params.urls.len());

        let request = build_request(
            Method::Post,
            "/screener/web-fetch",
            None,
            Some(json!({ "urls": params.urls })),
        );

        success_result(request.format_output())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WebFetchParams>(),
            annotations: Some(read_only_annotations("Web Fetch")),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the transport router.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: WebFetchParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;
    use serde_json::Value;

    #[test]
    fn test_body_lists_urls_in_order() {
        let params = WebFetchParams {
            urls: vec![
                "https://example.com/b".to_string(),
                "https://example.com/a".to_string(),
            ],
        };
        let result = WebFetchTool::execute(params);
        let text = result_text(&result);
        assert!(text.starts_with("[dry-run] POST /screener/web-fetch\n"));

        let body: Value = serde_json::from_str(text.split_once('\n').unwrap().1).unwrap();
        assert_eq!(
            body,
            json!({"urls": ["https://example.com/b", "https://example.com/a"]})
        );
    }

    #[test]
    fn test_empty_urls_rejected() {
        let params = WebFetchParams { urls: vec![] };
        let result = WebFetchTool::execute(params);
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("at least 1"));
    }

    #[test]
    fn test_eleven_urls_rejected() {
        let params = WebFetchParams {
            urls: (0..11).map(|i| format!("https://example.com/{}", i)).collect(),
        };
        let result = WebFetchTool::execute(params);
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("at most 10"));
    }

    #[test]
    fn test_ten_urls_accepted() {
        let urls: Vec<String> = (0..10).map(|i| format!("https://example.com/{}", i)).collect();
        let params = WebFetchParams { urls: urls.clone() };
        let result = WebFetchTool::execute(params);
        assert_ne!(result.is_error, Some(true));

        let body: Value =
            serde_json::from_str(result_text(&result).split_once('\n').unwrap().1).unwrap();
        assert_eq!(body["urls"], json!(urls));
    }

    #[test]
    fn test_urls_trimmed_but_protocol_unchecked() {
        // The http(s):// prefix is documented as a caller contract; the
        // schema stays permissive for wire compatibility.
        let params = WebFetchParams {
            urls: vec!["  example.com  ".to_string()],
        };
        let validated = params.validate().unwrap();
        assert_eq!(validated.urls, vec!["example.com"]);
    }
}
