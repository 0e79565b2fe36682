//! Web search tool.
//!
//! Searches the web through Crustdata's SERP API with optional geolocation,
//! source, site, and date filtering. Dry-run: returns the POST request it
//! would send.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::info;

use crate::domains::client::{Method, build_request};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    collect_violations, error_result, read_only_annotations, success_result,
};

/// Maximum query length in characters.
pub const MAX_QUERY_LENGTH: usize = 1000;

/// Country codes the SERP API localizes for. Documented for callers; the
/// schema deliberately does not enforce membership, matching the API's own
/// permissive contract.
pub const GEOLOCATION_CODES: &[&str] = &[
    "US", "CA", "MX", "BR", "AR", "CL", "CO", "PE", "VE", // Americas
    "GB", "DE", "FR", "IT", "ES", "PT", "NL", "BE", "CH", "AT", "PL", "SE", "NO", "DK", "FI",
    "IE", "RU", "UA", "CZ", "GR", "TR", "RO", "HU", // Europe
    "JP", "CN", "KR", "IN", "ID", "TH", "VN", "MY", "SG", "PH", "TW", "HK", // Asia
    "SA", "AE", "IL", "EG", // Middle East
    "AU", "NZ", // Oceania
    "ZA", "NG", "KE", // Africa
];

/// Search sources the SERP API understands. Documented, not enforced.
pub const SEARCH_SOURCES: &[&str] = &[
    "news",
    "web",
    "scholar-articles",
    "scholar-articles-enriched",
    "scholar-author",
];

/// Parameters for the web search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebSearchParams {
    /// Search query text.
    #[schemars(description = "Search query text (1-1000 characters)")]
    pub query: String,

    /// ISO 3166-1 alpha-2 country code for localized results.
    #[schemars(description = "ISO 3166-1 alpha-2 country code (e.g. 'US', 'GB', 'DE')")]
    #[serde(default)]
    pub geolocation: Option<String>,

    /// Sources to search.
    #[schemars(description = "Search sources: 'news', 'web', 'scholar-articles', 'scholar-articles-enriched', 'scholar-author'")]
    #[serde(default)]
    pub sources: Option<Vec<String>>,

    /// Restrict results to a specific domain.
    #[schemars(description = "Restrict results to a specific domain (e.g. 'github.com')")]
    #[serde(default)]
    pub site: Option<String>,

    /// Unix timestamp for start date filter.
    #[schemars(description = "Unix timestamp for start date filter")]
    #[serde(default)]
    pub start_date: Option<i64>,

    /// Unix timestamp for end date filter.
    #[schemars(description = "Unix timestamp for end date filter")]
    #[serde(default)]
    pub end_date: Option<i64>,

    /// If true, fetches full HTML content for each result URL.
    #[schemars(description = "If true, fetches full HTML content for each result URL")]
    #[serde(default)]
    pub fetch_content: bool,
}

impl WebSearchParams {
    /// Trim string fields, normalize empty optionals to absent, and enforce
    /// the query length bounds.
    pub fn validate(mut self) -> Result<Self, ToolError> {
        self.query = self.query.trim().to_string();
        self.geolocation = self
            .geolocation
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());
        self.site = self
            .site
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.sources = self.sources.filter(|s| !s.is_empty());

        let mut problems = Vec::new();
        if self.query.is_empty() {
            problems.push("query must not be empty".to_string());
        }
        let query_chars = self.query.chars().count();
        if query_chars > MAX_QUERY_LENGTH {
            problems.push(format!(
                "query must be at most {} characters (got {})",
                MAX_QUERY_LENGTH, query_chars
            ));
        }
        collect_violations(problems)?;

        Ok(self)
    }
}

/// Web search tool implementation.
#[derive(Debug, Clone)]
pub struct WebSearchTool;

impl WebSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "crustdata_web_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Perform a web search using Crustdata's SERP API. Supports geolocation, source ('news', 'web', 'scholar-articles', ...), site, and unix-timestamp date filtering; optionally fetches full HTML content for each result. Typically 5-15 results, no pagination, rate limited to 15 requests per minute. Returns the dry-run request.";

    /// Execute the tool logic.
    pub fn execute(params: WebSearchParams) -> CallToolResult {
        let params = match params.validate() {
            Ok(params) => params,
            Err(e) => return error_result(&e.to_string()),
        };

        info!("Building web search request (fetch_content: {})", params.fetch_content);

        // Omit-if-absent: optional fields only reach the wire when supplied.
        // startDate/endDate are the API's field names for start_date/end_date.
        let mut body = Map::new();
        body.insert("query".to_string(), Value::String(params.query));
        if let Some(geolocation) = params.geolocation {
            body.insert("geolocation".to_string(), Value::String(geolocation));
        }
        if let Some(sources) = params.sources {
            body.insert("sources".to_string(), json!(sources));
        }
        if let Some(site) = params.site {
            body.insert("site".to_string(), Value::String(site));
        }
        if let Some(start_date) = params.start_date {
            body.insert("startDate".to_string(), json!(start_date));
        }
        if let Some(end_date) = params.end_date {
            body.insert("endDate".to_string(), json!(end_date));
        }

        let query = params
            .fetch_content
            .then(|| vec![("fetch_content".to_string(), "true".to_string())]);

        let request = build_request(
            Method::Post,
            "/screener/web-search",
            query,
            Some(Value::Object(body)),
        );

        success_result(request.format_output())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WebSearchParams>(),
            annotations: Some(read_only_annotations("Web Search")),
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
                let params: WebSearchParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(params))
            }
            .boxed()
        })
    }
}
