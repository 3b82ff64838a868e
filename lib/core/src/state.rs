use feed_utils::errors::AppError;

use crate::comment::{CommentId, CommentThread};
use crate::draft::CommentDraft;
use crate::post::Author;

/// Mutable state of a mounted post: its comment thread and the new comment draft
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostState {
    comment_thread: CommentThread,
    draft: CommentDraft,
}

impl PostState {
    /// Creates the state of a freshly mounted post, with the welcome comment
    pub fn new(
        welcome_author: Author,
        welcome_timestamp: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            comment_thread: CommentThread::with_welcome_comment(welcome_author, welcome_timestamp),
            draft: CommentDraft::default(),
        }
    }

    pub fn comment_thread(&self) -> &CommentThread {
        &self.comment_thread
    }

    pub fn draft(&self) -> &CommentDraft {
        &self.draft
    }

    pub fn can_submit(&self) -> bool {
        self.draft.can_submit()
    }

    pub fn update_draft(&mut self, content: String) {
        self.draft.update(content);
    }

    pub fn mark_draft_invalid(&mut self) {
        log::debug!("Comment draft flagged as invalid.");
        self.draft.mark_invalid();
    }

    /// Appends the draft to the thread and clears it
    pub fn submit_comment(
        &mut self,
        author: Author,
        create_timestamp: chrono::DateTime<chrono::Utc>,
    ) -> Result<CommentId, AppError> {
        let body = self.draft.take_valid().inspect_err(|_| log::info!("Rejected empty comment."))?;
        let comment_id = self.comment_thread.add_comment(body, author, create_timestamp);
        log::debug!("Added comment {comment_id}, thread now has {} comments.", self.comment_thread.len());
        Ok(comment_id)
    }

    /// Removes every comment whose body equals `body`
    pub fn request_delete_comment(&mut self, body: &str) -> usize {
        let deleted_count = self.comment_thread.delete_comments_by_body(body);
        log::debug!("Deleted {deleted_count} comments by body.");
        deleted_count
    }

    pub fn delete_comment(&mut self, comment_id: CommentId) -> Result<(), AppError> {
        self.comment_thread.delete_comment(comment_id)?;
        log::debug!("Deleted comment {comment_id}.");
        Ok(())
    }

    pub fn applaud(&mut self, comment_id: CommentId) -> Result<u64, AppError> {
        self.comment_thread.applaud(comment_id)
    }
}
