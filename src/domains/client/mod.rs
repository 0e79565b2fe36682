//! Crustdata API client domain.
//!
//! This module handles everything between validated tool input and the text
//! a tool returns: building a normalized request descriptor and rendering it
//! for dry-run inspection. No network I/O happens here; the descriptor is the
//! hand-off point for a future live transport.
//!
//! ## Architecture
//!
//! - `request.rs` - `Method`, `RequestDescriptor`, and `build_request()`
//! - `format.rs` - deterministic dry-run rendering of a descriptor

mod format;
mod request;

pub use request::{Method, RequestDescriptor, build_request};
