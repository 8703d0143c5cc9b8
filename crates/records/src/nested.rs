//! Nested-attribute payloads
//!
//! A post accepts its comments as attribute payloads: either a brand-new
//! child carrying a title, or a reference to an already-persisted child by
//! id, optionally retitling it. The payload carries no behavior; the save
//! pipeline in [`crate::post`] resolves it inside the save transaction.

use tabula_core::RecordId;

/// Attributes for one comment passed through its post's save
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentAttributes {
    pub(crate) id: Option<RecordId>,
    pub(crate) title: Option<String>,
}

impl CommentAttributes {
    /// A new comment with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self { id: None, title: Some(title.into()) }
    }

    /// Reference an already-persisted comment by id
    pub fn existing(id: RecordId) -> Self {
        Self { id: Some(id), title: None }
    }

    /// Set the title, retitling an existing comment
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
