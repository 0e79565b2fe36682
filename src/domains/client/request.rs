//! Normalized request descriptors for the Crustdata API.
//!
//! A `RequestDescriptor` captures everything a live transport would need to
//! perform a call: method, path, query parameters, and JSON body. Descriptors
//! are immutable once built and carry no connection or credential state.

use serde_json::Value;

/// HTTP method of an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Wire representation of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized description of an outbound Crustdata API request.
///
/// Query parameters keep insertion order; optional parts are `None` rather
/// than empty so their presence is the sole signal of intent (omit-if-absent).
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,

    /// API path relative to the Crustdata base URL (e.g. "/screener/person/enrich").
    pub path: String,

    /// Query parameters, in the order they should appear on the wire.
    pub query: Option<Vec<(String, String)>>,

    /// JSON request body.
    pub body: Option<Value>,
}

/// Build a request descriptor from its parts.
///
/// Empty query lists are normalized to `None` so callers never have to
/// distinguish "no query" from "zero parameters".
pub fn build_request(
    method: Method,
    path: &str,
    query: Option<Vec<(String, String)>>,
    body: Option<Value>,
) -> RequestDescriptor {
    RequestDescriptor {
        method,
        path: path.to_string(),
        query: query.filter(|q| !q.is_empty()),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_wire_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn test_build_request_keeps_query_order() {
        let request = build_request(
            Method::Get,
            "/screener/social_posts",
            Some(vec![
                ("person_linkedin_url".to_string(), "https://linkedin.com/in/x".to_string()),
                ("page".to_string(), "2".to_string()),
            ]),
            None,
        );
        let query = request.query.unwrap();
        assert_eq!(query[0].0, "person_linkedin_url");
        assert_eq!(query[1], ("page".to_string(), "2".to_string()));
    }

    #[test]
    fn test_build_request_normalizes_empty_query() {
        let request = build_request(Method::Post, "/screener/web-fetch", Some(vec![]), None);
        assert!(request.query.is_none());
    }

    #[test]
    fn test_build_request_body_passthrough() {
        let request = build_request(
            Method::Post,
            "/screener/web-fetch",
            None,
            Some(json!({"urls": ["https://example.com"]})),
        );
        assert_eq!(request.body, Some(json!({"urls": ["https://example.com"]})));
    }
}
