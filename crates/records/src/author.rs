//! Author: the one-per-post byline record
//!
//! Validations: first name must be present and non-blank.

use tabula_core::{Error, ErrorList, RecordId, Result, Value};
use tabula_storage::{MemoryStore, Row, Transaction};

use crate::record::{self, Record, SaveOutcome};
use crate::validations::validate_presence;

/// The author of a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    id: Option<RecordId>,
    post_id: Option<RecordId>,
    first_name: Option<String>,
}

impl Author {
    /// Build an author attached to a post
    pub fn new(post_id: RecordId, first_name: impl Into<String>) -> Self {
        Self { id: None, post_id: Some(post_id), first_name: Some(first_name.into()) }
    }

    /// Id, if persisted
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    /// Id of the post this author belongs to
    pub fn post_id(&self) -> Option<RecordId> {
        self.post_id
    }

    /// The author's first name
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    fn validate(&self, _txn: &Transaction, errors: &mut ErrorList) {
        validate_presence(errors, "Author", "first_name", self.first_name.as_deref());
    }

    /// Validate and persist this author in its own transaction
    pub fn save(&mut self, db: &MemoryStore) -> Result<SaveOutcome> {
        let result = db.transaction(|txn| {
            let mut errors = ErrorList::new();
            self.validate(txn, &mut errors);
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

impl Record for Author {
    const TABLE: &'static str = "authors";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn from_row(id: RecordId, row: &Row) -> Self {
        Self {
            id: Some(id),
            post_id: row.get("post_id").and_then(Value::as_int).map(RecordId::new),
            first_name: row.get("first_name").and_then(Value::as_text).map(str::to_string),
        }
    }

    fn to_row(&self) -> Row {
        Row::new().with("post_id", self.post_id).with("first_name", self.first_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::open_ephemeral;

    #[test]
    fn test_save_requires_first_name() {
        let db = open_ephemeral();
        let mut author = Author::new(RecordId::new(1), "");
        let outcome = author.save(&db).unwrap();
        assert_eq!(
            outcome.errors().unwrap().full_messages(),
            vec!["First name can't be blank"]
        );
        assert!(author.id().is_none());
    }

    #[test]
    fn test_save_persists_valid_author() {
        let db = open_ephemeral();
        let mut author = Author::new(RecordId::new(1), "Jane");
        assert!(author.save(&db).unwrap().is_saved());
        assert_eq!(author.id(), Some(RecordId::new(1)));
    }
}
