use serde::{Deserialize, Serialize};
use feed_utils::errors::AppError;

use crate::post::Post;
use crate::profile::Profile;

/// Feed document bundled with the application
pub const DEFAULT_FEED_DOCUMENT: &str = include_str!("../data/feed.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub profile: Profile,
    pub posts: Vec<Post>,
}

/// Parses a feed document
pub fn load_feed(document: &str) -> Result<Feed, AppError> {
    let feed: Feed = serde_json::from_str(document)?;
    log::debug!("Loaded feed with {} posts.", feed.posts.len());
    Ok(feed)
}

pub fn default_feed() -> Result<Feed, AppError> {
    load_feed(DEFAULT_FEED_DOCUMENT)
}
