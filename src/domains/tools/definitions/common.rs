//! Common utilities shared across Crustdata tools.
//!
//! This module provides shared result constructors, annotation helpers, and
//! validation plumbing used by every tool definition.

use rmcp::model::{CallToolResult, Content, ToolAnnotations};
use tracing::warn;

use crate::domains::tools::ToolError;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Annotations shared by every Crustdata tool: read-only, non-destructive,
/// idempotent, and open-world (the remote API reaches the public web).
pub fn read_only_annotations(title: &str) -> ToolAnnotations {
    ToolAnnotations {
        title: Some(title.to_string()),
        read_only_hint: Some(true),
        destructive_hint: Some(false),
        idempotent_hint: Some(true),
        open_world_hint: Some(true),
    }
}

/// Turn collected constraint violations into a single aggregated error.
///
/// Validation never accepts partially: either every constraint holds or the
/// caller gets one message naming all violated fields.
pub fn collect_violations(problems: Vec<String>) -> Result<(), ToolError> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(ToolError::invalid_arguments(problems.join("; ")))
    }
}

/// Default page number for paginated tools.
pub fn default_page() -> u32 {
    1
}

/// Extract the text content of a tool result (test support).
#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> String {
    use rmcp::model::RawContent;

    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {:?}", other),
    }
}
