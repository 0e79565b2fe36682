//! Social posts tool.
//!
//! Fetches recent social media posts and engagement metrics for a person,
//! paginated 20 posts per page. Dry-run: returns the GET request it would send.

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
    collect_violations, default_page, error_result, read_only_annotations, success_result,
};

/// Parameters for the social posts tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSocialPostsParams {
    /// LinkedIn profile URL of the person. The URL shape is a caller
    /// contract and is not validated here.
    #[schemars(description = "LinkedIn profile URL of the person")]
    pub person_linkedin_url: String,

    /// Page number for pagination (20 posts per page).
    #[schemars(description = "Page number for pagination, starting at 1 (20 posts per page)")]
    #[serde(default = "default_page")]
    pub page: u32,
}

impl GetSocialPostsParams {
    /// Trim the profile URL and enforce the page lower bound.
    pub fn validate(mut self) -> Result<Self, ToolError> {
        self.person_linkedin_url = self.person_linkedin_url.trim().to_string();

        let mut problems = Vec::new();
        if self.page < 1 {
            problems.push("page must be >= 1".to_string());
        }
        collect_violations(problems)?;

        Ok(self)
    }
}

/// Social posts tool implementation.
#[derive(Debug, Clone)]
pub struct GetSocialPostsTool;

impl GetSocialPostsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "crustdata_get_social_posts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get recent social media posts and engagement metrics for a person: post content, reactions, comments, shares, and who interacted. 20 posts per page. Returns the dry-run request; the live endpoint fetches in real time with 30-60 second latency.";

    /// Execute the tool logic.
    pub fn execute(params: GetSocialPostsParams) -> CallToolResult {
        let params = match params.validate() {
            Ok(params) => params,
            Err(e) => return error_result(&e.to_string()),
        };

        info!(
            "Building social posts request (page {})",
            params.page
        );

        let request = build_request(
            Method::Get,
            "/screener/social_posts",
            Some(vec![
                (
                    "person_linkedin_url".to_string(),
                    params.person_linkedin_url,
                ),
                ("page".to_string(), params.page.to_string()),
            ]),
            None,
        );

        success_result(request.format_output())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSocialPostsParams>(),
            annotations: Some(read_only_annotations("Get Social Posts")),
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
                let params: GetSocialPostsParams =
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
    fn test_page_defaults_to_one() {
        let json = r#"{"person_linkedin_url": "https://www.linkedin.com/in/jeffweiner08/"}"#;
        let params: GetSocialPostsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_default_page_appears_in_query() {
        let json = r#"{"person_linkedin_url": "url"}"#;
        let params: GetSocialPostsParams = serde_json::from_str(json).unwrap();
        let result = GetSocialPostsTool::execute(params);
        assert_eq!(
            result_text(&result),
            "[dry-run] GET /screener/social_posts?person_linkedin_url=url&page=1"
        );
    }

    #[test]
    fn test_explicit_page_preserved() {
        let params = GetSocialPostsParams {
            person_linkedin_url: "url".to_string(),
            page: 4,
        };
        let result = GetSocialPostsTool::execute(params);
        assert!(result_text(&result).ends_with("page=4"));
    }

    #[test]
    fn test_zero_page_rejected() {
        let params = GetSocialPostsParams {
            person_linkedin_url: "url".to_string(),
            page: 0,
        };
        let result = GetSocialPostsTool::execute(params);
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("page must be >= 1"));
    }

    #[test]
    fn test_negative_page_fails_deserialization() {
        let json = r#"{"person_linkedin_url": "url", "page": -2}"#;
        assert!(serde_json::from_str::<GetSocialPostsParams>(json).is_err());
    }

    #[test]
    fn test_url_is_trimmed() {
        let params = GetSocialPostsParams {
            person_linkedin_url: "  url  ".to_string(),
            page: 1,
        };
        let validated = params.validate().unwrap();
        assert_eq!(validated.person_linkedin_url, "url");
    }
}
