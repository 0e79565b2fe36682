//! People tools: enrichment, social posts, and structured search.

mod enrich;
mod search;
mod social_posts;

pub use enrich::{EnrichPersonParams, EnrichPersonTool, MAX_LINKEDIN_URLS};
pub use search::{PersonSearchFilter, SearchPeopleParams, SearchPeopleTool};
pub use social_posts::{GetSocialPostsParams, GetSocialPostsTool};
