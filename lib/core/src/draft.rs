use feed_utils::errors::AppError;

/// Text of the new comment form and its pending validation error
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentDraft {
    content: String,
    validation_error: Option<AppError>,
}

impl CommentDraft {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn validation_error(&self) -> Option<&AppError> {
        self.validation_error.as_ref()
    }

    /// Replaces the draft verbatim and clears the pending validation error
    pub fn update(&mut self, content: String) {
        self.content = content;
        self.validation_error = None;
    }

    /// Submission is only possible for non-empty drafts
    pub fn can_submit(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn mark_invalid(&mut self) {
        self.validation_error = Some(AppError::EmptyComment);
    }

    /// Takes the draft's content, leaving it empty. Empty or blank drafts are kept and flagged as invalid.
    pub fn take_valid(&mut self) -> Result<String, AppError> {
        if self.content.trim().is_empty() {
            self.mark_invalid();
            return Err(AppError::EmptyComment);
        }
        self.validation_error = None;
        Ok(std::mem::take(&mut self.content))
    }
}

#[cfg(test)]
mod tests {
    use feed_utils::errors::AppError;

    use crate::draft::CommentDraft;

    #[test]
    fn test_update_clears_validation_error() {
        let mut draft = CommentDraft::default();
        draft.mark_invalid();
        assert_eq!(draft.validation_error(), Some(&AppError::EmptyComment));

        draft.update(String::from("O"));
        assert_eq!(draft.content(), "O");
        assert_eq!(draft.validation_error(), None);
    }

    #[test]
    fn test_can_submit() {
        let mut draft = CommentDraft::default();
        assert!(!draft.can_submit());
        draft.update(String::from(" "));
        assert!(draft.can_submit());
        draft.update(String::new());
        assert!(!draft.can_submit());
    }

    #[test]
    fn test_take_valid() {
        let mut draft = CommentDraft::default();
        draft.update(String::from("  Ótimo!  "));
        assert_eq!(draft.take_valid(), Ok(String::from("  Ótimo!  ")));
        assert_eq!(draft.content(), "");
        assert_eq!(draft.validation_error(), None);
    }

    #[test]
    fn test_take_valid_blank_draft() {
        let mut draft = CommentDraft::default();
        assert_eq!(draft.take_valid(), Err(AppError::EmptyComment));
        assert_eq!(draft.content(), "");

        draft.update(String::from(" \n\t"));
        assert_eq!(draft.take_valid(), Err(AppError::EmptyComment));
        assert_eq!(draft.content(), " \n\t");
        assert_eq!(draft.validation_error(), Some(&AppError::EmptyComment));
    }
}
