//! Comment: a titled child record of a post
//!
//! Validations: title must be present, and unique among the comments of the
//! same post ("should happen once per post"). The same title under a
//! different post is fine.

use tabula_core::{Error, ErrorList, RecordId, Result, Value};
use tabula_storage::{MemoryStore, Row, Transaction};

use crate::post::Post;
use crate::record::{self, Record, SaveOutcome};
use crate::validations::{validate_presence, validate_uniqueness};

/// A comment under a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    id: Option<RecordId>,
    post_id: Option<RecordId>,
    title: Option<String>,
}

impl Comment {
    /// Build a comment attached to a post
    pub fn new(post_id: RecordId, title: impl Into<String>) -> Self {
        Self { id: None, post_id: Some(post_id), title: Some(title.into()) }
    }

    /// Build a detached comment; the save pipeline attaches it
    pub(crate) fn build(title: Option<String>) -> Self {
        Self { id: None, post_id: None, title }
    }

    /// Id, if persisted
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    /// Id of the owning post
    pub fn post_id(&self) -> Option<RecordId> {
        self.post_id
    }

    /// The comment title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub(crate) fn set_post_id(&mut self, post_id: Option<RecordId>) {
        self.post_id = post_id;
    }

    /// The owning post, if it exists
    pub fn post(&self, db: &MemoryStore) -> Result<Option<Post>> {
        match self.post_id {
            None => Ok(None),
            Some(post_id) => {
                Ok(db.get(Post::TABLE, post_id)?.map(|row| Post::from_row(post_id, &row)))
            }
        }
    }

    pub(crate) fn validate(&self, txn: &Transaction, errors: &mut ErrorList) -> Result<()> {
        validate_presence(errors, "Comment", "title", self.title.as_deref());
        if let (Some(title), Some(post_id)) = (self.title.as_deref(), self.post_id) {
            validate_uniqueness(
                errors,
                txn,
                "Comment",
                Self::TABLE,
                "title",
                &Value::from(title),
                Some(("post_id", Value::from(post_id))),
                self.id,
                "should happen once per post",
            )?;
        }
        Ok(())
    }

    /// Validate and persist this comment in its own transaction
    pub fn save(&mut self, db: &MemoryStore) -> Result<SaveOutcome> {
        let result = db.transaction(|txn| {
            let mut errors = ErrorList::new();
            self.validate(txn, &mut errors)?;
            if !errors.is_empty() {
                return Err(Error::RecordInvalid(errors));
            }
            record::persist(txn, self)
        });
        match result {
            Ok(id) => {
                self.id = Some(id);
                Ok(SaveOutcome::Saved)
            }
            Err(Error::RecordInvalid(errors)) => Ok(SaveOutcome::Invalid(errors)),
            Err(err) => Err(err),
        }
    }
}

impl Record for Comment {
    const TABLE: &'static str = "comments";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn from_row(id: RecordId, row: &Row) -> Self {
        Self {
            id: Some(id),
            post_id: row.get("post_id").and_then(Value::as_int).map(RecordId::new),
            title: row.get("title").and_then(Value::as_text).map(str::to_string),
        }
    }

    fn to_row(&self) -> Row {
        Row::new().with("post_id", self.post_id).with("title", self.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::open_ephemeral;

    #[test]
    fn test_row_round_trip() {
        let comment = Comment::new(RecordId::new(2), "same");
        let row = comment.to_row();
        let back = Comment::from_row(RecordId::new(5), &row);
        assert_eq!(back.id(), Some(RecordId::new(5)));
        assert_eq!(back.post_id(), Some(RecordId::new(2)));
        assert_eq!(back.title(), Some("same"));
    }

    #[test]
    fn test_save_rejects_blank_title() {
        let db = open_ephemeral();
        let mut comment = Comment::new(RecordId::new(1), "  ");
        let outcome = comment.save(&db).unwrap();
        assert!(!outcome.is_saved());
        assert!(outcome.errors().unwrap().any_for("title"));
        assert!(comment.id().is_none());
    }

    #[test]
    fn test_save_then_resave_is_allowed() {
        let db = open_ephemeral();
        let mut comment = Comment::new(RecordId::new(1), "same");
        assert!(comment.save(&db).unwrap().is_saved());
        // its own persisted row is excluded from the uniqueness check
        assert!(comment.save(&db).unwrap().is_saved());
    }
}
