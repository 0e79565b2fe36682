//! Dry-run rendering of request descriptors.
//!
//! The rendering is the tool output contract: deterministic, lossless for
//! method/path/query/body, and stable enough for test assertions. Query
//! parameters render in insertion order; JSON bodies render pretty-printed
//! with serde_json's canonical key order (arrays keep caller order).

use super::request::RequestDescriptor;

impl RequestDescriptor {
    /// Render this request for dry-run display.
    ///
    /// Format: `[dry-run] METHOD /path?query` followed by the pretty-printed
    /// JSON body on subsequent lines when a body is present.
    pub fn format_output(&self) -> String {
        let mut out = format!("[dry-run] {} {}", self.method, self.path);

        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(&encode_query(query));
        }

        if let Some(body) = &self.body {
            out.push('\n');
            // Serializing a serde_json::Value cannot fail
            out.push_str(&serde_json::to_string_pretty(body).unwrap_or_default());
        }

        out
    }
}

/// Percent-encode query pairs, preserving their order.
fn encode_query(pairs: &[(String, String)]) -> String {
    // String pairs always serialize
    serde_urlencoded::to_string(pairs).unwrap_or_default()
}
