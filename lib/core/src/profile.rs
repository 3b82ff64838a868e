use serde::{Deserialize, Serialize};

use crate::post::Author;

/// Profile of the user browsing the feed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
    pub cover_url: String,
}

impl Profile {
    /// Author attached to the comments this user writes
    pub fn as_author(&self) -> Author {
        Author {
            name: self.name.clone(),
            role: self.role.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}
