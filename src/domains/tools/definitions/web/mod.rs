//! Web tools: SERP search and page fetch.

mod fetch;
mod search;

pub use fetch::{MAX_FETCH_URLS, WebFetchParams, WebFetchTool};
pub use search::{GEOLOCATION_CODES, MAX_QUERY_LENGTH, SEARCH_SOURCES, WebSearchParams, WebSearchTool};
