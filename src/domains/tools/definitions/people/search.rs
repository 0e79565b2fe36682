//! People search tool.
//!
//! Searches professional profiles with structured filters combined with AND
//! logic, 25 results per page. Dry-run: returns the POST request it would send.

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
    collect_violations, default_page, error_result, read_only_annotations, success_result,
};

/// A single people-search filter.
///
/// This is an open record: `filter_type`, `type`, and `value` are required,
/// and any additional keys the Crustdata API defines beyond the documented
/// set are preserved and passed through on the wire.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PersonSearchFilter {
    /// Filter type (e.g. "CURRENT_COMPANY", "CURRENT_TITLE",
    /// "SENIORITY_LEVEL", "INDUSTRY", "REGION", "KEYWORD").
    #[schemars(description = "Filter type (e.g. 'CURRENT_COMPANY', 'CURRENT_TITLE', 'SENIORITY_LEVEL', 'INDUSTRY')")]
    pub filter_type: String,

    /// Operation type: "in" or "not in".
    #[schemars(description = "Operation type: 'in' or 'not in'")]
    #[serde(rename = "type")]
    pub condition: String,

    /// Filter value(s), usually a list of strings.
    #[schemars(description = "Filter value(s) as a list")]
    pub value: Value,

    /// Undocumented filter attributes, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonSearchFilter {
    /// Wire representation of this filter.
    ///
    /// Null-valued entries are dropped so the API never sees an explicit
    /// null where "not specified" was meant.
    pub fn to_body_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("filter_type".to_string(), Value::String(self.filter_type.clone()));
        map.insert("type".to_string(), Value::String(self.condition.clone()));
        if !self.value.is_null() {
            map.insert("value".to_string(), self.value.clone());
        }
        for (key, value) in &self.extra {
            if !value.is_null() {
                map.insert(key.clone(), value.clone());
            }
        }
        map
    }
}

/// Parameters for the people search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchPeopleParams {
    /// Search filters, combined with AND logic.
    #[schemars(description = "List of search filters (combined with AND logic)")]
    pub filters: Vec<PersonSearchFilter>,

    /// Page number for pagination (25 results per page).
    #[schemars(description = "Page number for pagination, starting at 1 (25 results per page)")]
    #[serde(default = "default_page")]
    pub page: u32,
}

impl SearchPeopleParams {
    /// Enforce the non-empty filter list and page lower bound.
    pub fn validate(self) -> Result<Self, ToolError> {
        let mut problems = Vec::new();
        if self.filters.is_empty() {
            problems.push("filters must contain at least 1 filter".to_string());
        }
        if self.page < 1 {
            problems.push("page must be >= 1".to_string());
        }
        collect_violations(problems)?;

        Ok(self)
    }
}

/// People search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchPeopleTool;

impl SearchPeopleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "crustdata_search_people";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for professional profiles using structured filters: CURRENT_COMPANY, CURRENT_TITLE, PAST_TITLE, PAST_COMPANY, SENIORITY_LEVEL, INDUSTRY, REGION, COMPANY_HEADCOUNT, YEARS_AT_CURRENT_COMPANY, YEARS_OF_EXPERIENCE, FUNCTION, KEYWORD, COMPANY_TYPE, and more. Each filter has filter_type, type ('in' or 'not in'), and value; filters are combined with AND logic. 25 results per page. Returns the dry-run request.";

    /// Execute the tool logic.
    pub fn execute(params: SearchPeopleParams) -> CallToolResult {
        let params = match params.validate() {
            Ok(params) => params,
            Err(e) => return error_result(&e.to_string()),
        };

        info!(
            "Building people search request with {} filter(s), page {}",
            params.filters.len(),
            params.page
        );

        let filters: Vec<Value> = params
            .filters
            .iter()
            .map(|filter| Value::Object(filter.to_body_map()))
            .collect();

        let request = build_request(
            Method::Post,
            "/screener/person/search",
            None,
            Some(json!({
                "filters": filters,
                "page": params.page,
            })),
        );

        success_result(request.format_output())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchPeopleParams>(),
            annotations: Some(read_only_annotations("Search People")),
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
                let params: SearchPeopleParams =
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

    fn company_filter() -> PersonSearchFilter {
        serde_json::from_value(json!({
            "filter_type": "CURRENT_COMPANY",
            "type": "in",
            "value": ["Microsoft"]
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_requires_type_key() {
        let result: Result<PersonSearchFilter, _> = serde_json::from_value(json!({
            "filter_type": "CURRENT_COMPANY",
            "value": ["Microsoft"]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_preserves_unknown_keys() {
        let filter: PersonSearchFilter = serde_json::from_value(json!({
            "filter_type": "REGION",
            "type": "not in",
            "value": ["EU"],
            "sub_filter": "metro_area"
        }))
        .unwrap();
        assert_eq!(filter.extra.get("sub_filter"), Some(&json!("metro_area")));

        let map = filter.to_body_map();
        assert_eq!(map.get("sub_filter"), Some(&json!("metro_area")));
        assert_eq!(map.get("type"), Some(&json!("not in")));
    }

    #[test]
    fn test_filter_body_drops_null_value() {
        let filter: PersonSearchFilter = serde_json::from_value(json!({
            "filter_type": "POSTED_ON_SOCIAL_MEDIA",
            "type": "in",
            "value": null
        }))
        .unwrap();
        let map = filter.to_body_map();
        assert!(!map.contains_key("value"));
        assert_eq!(map.get("filter_type"), Some(&json!("POSTED_ON_SOCIAL_MEDIA")));
    }

    #[test]
    fn test_empty_filters_rejected() {
        let params = SearchPeopleParams { filters: vec![], page: 1 };
        let result = SearchPeopleTool::execute(params);
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("at least 1 filter"));
    }

    #[test]
    fn test_single_filter_body() {
        let params = SearchPeopleParams {
            filters: vec![company_filter()],
            page: 1,
        };
        let result = SearchPeopleTool::execute(params);
        let text = result_text(&result);
        assert!(text.starts_with("[dry-run] POST /screener/person/search\n"));

        let body: Value = serde_json::from_str(text.split_once('\n').unwrap().1).unwrap();
        assert_eq!(
            body,
            json!({
                "filters": [{"filter_type": "CURRENT_COMPANY", "type": "in", "value": ["Microsoft"]}],
                "page": 1
            })
        );
    }

    #[test]
    fn test_filters_keep_caller_order() {
        let first = company_filter();
        let second: PersonSearchFilter = serde_json::from_value(json!({
            "filter_type": "CURRENT_TITLE",
            "type": "in",
            "value": ["CEO"]
        }))
        .unwrap();
        let params = SearchPeopleParams {
            filters: vec![first, second],
            page: 2,
        };
        let result = SearchPeopleTool::execute(params);
        let body: Value =
            serde_json::from_str(result_text(&result).split_once('\n').unwrap().1).unwrap();
        assert_eq!(body["filters"][0]["filter_type"], "CURRENT_COMPANY");
        assert_eq!(body["filters"][1]["filter_type"], "CURRENT_TITLE");
        assert_eq!(body["page"], 2);
    }

    #[test]
    fn test_page_defaults_to_one() {
        let params: SearchPeopleParams = serde_json::from_value(json!({
            "filters": [{"filter_type": "INDUSTRY", "type": "in", "value": ["Software"]}]
        }))
        .unwrap();
        assert_eq!(params.page, 1);
    }
}
