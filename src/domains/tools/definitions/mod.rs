//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod people;
pub mod ping;
pub mod web;

pub use people::{
    EnrichPersonParams, EnrichPersonTool, GetSocialPostsParams, GetSocialPostsTool,
    PersonSearchFilter, SearchPeopleParams, SearchPeopleTool,
};
pub use ping::PingTool;
pub use web::{WebFetchParams, WebFetchTool, WebSearchParams, WebSearchTool};
