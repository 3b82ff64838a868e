use std::fmt;

use serde::{Deserialize, Serialize};
use feed_utils::errors::AppError;

use crate::post::Author;

pub const WELCOME_COMMENT: &str = "Post muito bacana, hein?!";

/// Identifier of a comment, unique within its thread and never reused
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CommentId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: CommentId,
    pub body: String,
    pub author: Author,
    pub create_timestamp: chrono::DateTime<chrono::Utc>,
    pub like_count: u64,
}

/// Ordered comments of a post. Owns every comment record and its like counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentThread {
    comment_vec: Vec<Comment>,
    next_comment_id: u64,
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CommentId> for AppError {
    fn from(comment_id: CommentId) -> Self {
        AppError::CommentNotFound(comment_id.0)
    }
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a thread seeded with the welcome comment
    pub fn with_welcome_comment(
        author: Author,
        create_timestamp: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        let mut thread = Self::new();
        thread.add_comment(String::from(WELCOME_COMMENT), author, create_timestamp);
        thread
    }

    /// Appends a comment at the end of the thread and returns its new id
    pub fn add_comment(
        &mut self,
        body: String,
        author: Author,
        create_timestamp: chrono::DateTime<chrono::Utc>,
    ) -> CommentId {
        let comment_id = CommentId(self.next_comment_id);
        self.next_comment_id += 1;
        self.comment_vec.push(Comment {
            comment_id,
            body,
            author,
            create_timestamp,
            like_count: 0,
        });
        comment_id
    }

    /// Removes exactly the comment with `comment_id`
    pub fn delete_comment(&mut self, comment_id: CommentId) -> Result<Comment, AppError> {
        let index = self.comment_vec
            .iter()
            .position(|comment| comment.comment_id == comment_id)
            .ok_or(AppError::from(comment_id))?;
        Ok(self.comment_vec.remove(index))
    }

    /// Removes every comment whose body equals `body` and returns how many were removed
    pub fn delete_comments_by_body(&mut self, body: &str) -> usize {
        let previous_len = self.comment_vec.len();
        self.comment_vec.retain(|comment| comment.body != body);
        previous_len - self.comment_vec.len()
    }

    /// Increments the like counter of `comment_id` and returns its new value
    pub fn applaud(&mut self, comment_id: CommentId) -> Result<u64, AppError> {
        let comment = self.comment_vec
            .iter_mut()
            .find(|comment| comment.comment_id == comment_id)
            .ok_or(AppError::from(comment_id))?;
        comment.like_count = comment.like_count.saturating_add(1);
        Ok(comment.like_count)
    }

    pub fn get(&self, comment_id: CommentId) -> Option<&Comment> {
        self.comment_vec.iter().find(|comment| comment.comment_id == comment_id)
    }

    pub fn like_count(&self, comment_id: CommentId) -> Option<u64> {
        self.get(comment_id).map(|comment| comment.like_count)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comment_vec
    }

    pub fn bodies(&self) -> Vec<&str> {
        self.comment_vec.iter().map(|comment| comment.body.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.comment_vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comment_vec.is_empty()
    }
}
