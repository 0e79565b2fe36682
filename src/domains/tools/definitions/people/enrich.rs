//! Person enrichment tool.
//!
//! Enriches one or more LinkedIn profiles via Crustdata's person enrichment
//! endpoint. In dry-run mode the tool returns the GET request it would send.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::client::{Method, build_request};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    collect_violations, error_result, read_only_annotations, success_result,
};

/// Maximum number of LinkedIn URLs accepted per call.
pub const MAX_LINKEDIN_URLS: usize = 25;

/// Parameters for the person enrichment tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EnrichPersonParams {
    /// LinkedIn profile URLs to enrich, e.g.
    /// "https://www.linkedin.com/in/satyanadella/". The LinkedIn URL shape is
    /// a caller contract and is not validated here.
    #[schemars(description = "List of LinkedIn profile URLs to enrich (1-25)")]
    pub linkedin_urls: Vec<String>,
}

impl EnrichPersonParams {
    /// Trim each URL and enforce the 1..=25 count bound.
    pub fn validate(mut self) -> Result<Self, ToolError> {
        for url in &mut self.linkedin_urls {
            *url = url.trim().to_string();
        }

        let mut problems = Vec::new();
        if self.linkedin_urls.is_empty() {
            problems.push("linkedin_urls must contain at least 1 URL".to_string());
        }
        if self.linkedin_urls.len() > MAX_LINKEDIN_URLS {
            problems.push(format!(
                "linkedin_urls must contain at most {} URLs (got {})",
                MAX_LINKEDIN_URLS,
                self.linkedin_urls.len()
            ));
        }
        collect_violations(problems)?;

        Ok(self)
    }
}

/// Person enrichment tool implementation.
#[derive(Debug, Clone)]
pub struct EnrichPersonTool;

impl EnrichPersonTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "crustdata_enrich_person";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Enrich LinkedIn profiles with detailed professional data: employment history, education, skills, and connections for one or more profiles (max 25 per call). Returns the dry-run request; profiles not yet in Crustdata are auto-enriched within 30-60 minutes.";

    /// Execute the tool logic.
    pub fn execute(params: EnrichPersonParams) -> CallToolResult {
        let params = match params.validate() {
            Ok(params) => params,
            Err(e) => return error_result(&e.to_string()),
        };

        info!(
            "Building person enrichment request for {} profile(s)",
            params.linkedin_urls.len()
        );

        let request = build_request(
            Method::Get,
            "/screener/person/enrich",
            Some(vec![(
                "linkedin_profile_url".to_string(),
                params.linkedin_urls.join(","),
            )]),
            None,
        );

        success_result(request.format_output())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<EnrichPersonParams>(),
            annotations: Some(read_only_annotations("Enrich Person")),
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
                let params: EnrichPersonParams =
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

    #[test]
    fn test_single_url_builds_query() {
        let params = EnrichPersonParams {
            linkedin_urls: vec!["https://www.linkedin.com/in/satyanadella/".to_string()],
        };
        let result = EnrichPersonTool::execute(params);
        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "[dry-run] GET /screener/person/enrich?linkedin_profile_url=\
             https%3A%2F%2Fwww.linkedin.com%2Fin%2Fsatyanadella%2F"
        );
    }

    #[test]
    fn test_urls_comma_joined_in_order() {
        let params = EnrichPersonParams {
            linkedin_urls: vec!["url-a".to_string(), "url-b".to_string(), "url-c".to_string()],
        };
        let result = EnrichPersonTool::execute(params);
        // Commas percent-encode as %2C in the query string
        assert!(result_text(&result).contains("linkedin_profile_url=url-a%2Curl-b%2Curl-c"));
    }

    #[test]
    fn test_urls_are_trimmed() {
        let params = EnrichPersonParams {
            linkedin_urls: vec!["  url-a  ".to_string()],
        };
        let validated = params.validate().unwrap();
        assert_eq!(validated.linkedin_urls, vec!["url-a"]);
    }

    #[test]
    fn test_empty_urls_rejected() {
        let params = EnrichPersonParams { linkedin_urls: vec![] };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_too_many_urls_rejected() {
        let params = EnrichPersonParams {
            linkedin_urls: (0..26).map(|i| format!("url-{}", i)).collect(),
        };
        let result = EnrichPersonTool::execute(params);
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("at most 25"));
    }

    #[test]
    fn test_twenty_five_urls_accepted() {
        let params = EnrichPersonParams {
            linkedin_urls: (0..25).map(|i| format!("url-{}", i)).collect(),
        };
        assert!(params.validate().is_ok());
    }
}
