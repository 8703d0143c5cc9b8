//! Post: the parent record
//!
//! A post owns many comments and one author, and accepts its comments as
//! nested attributes: assign the payloads, then save once. Validations:
//! content must be globally unique.
//!
//! ## Save pipeline
//!
//! One transaction covers the whole save. The post validates and stages
//! first, so new children can scope to its id. Each nested payload then
//! resolves in order (existing ids load the current row from the
//! transaction view, fresh payloads build a new child) and validates
//! against that view, which already contains siblings staged earlier in
//! the same save. Invalid records are not staged, and any recorded failure
//! aborts the transaction: either every row commits or none does. Ids are
//! written back to the struct only after a successful commit.

use tabula_core::{Error, ErrorList, RecordId, Result, Value};
use tabula_storage::{MemoryStore, Row, Transaction};

use crate::author::Author;
use crate::comment::Comment;
use crate::nested::CommentAttributes;
use crate::record::{self, Record, SaveOutcome};
use crate::validations::validate_uniqueness;

/// A post with free-text content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    id: Option<RecordId>,
    content: Option<String>,
    comments_attributes: Vec<CommentAttributes>,
}

impl Post {
    /// Build an unsaved post
    pub fn new(content: impl Into<String>) -> Self {
        Self { id: None, content: Some(content.into()), comments_attributes: Vec::new() }
    }

    /// Build and persist a post, or fail with `Error::RecordInvalid`
    pub fn create(db: &MemoryStore, content: impl Into<String>) -> Result<Post> {
        let mut post = Post::new(content);
        let outcome = post.save(db)?;
        record::saved_or_invalid(outcome)?;
        Ok(post)
    }

    /// Id, if persisted
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    /// The post content
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Replace the content
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = Some(content.into());
    }

    /// Assign nested comment payloads to be resolved by the next save
    pub fn assign_comments_attributes(&mut self, attributes: Vec<CommentAttributes>) {
        self.comments_attributes = attributes;
    }

    /// The persisted comments of this post, in id order
    pub fn comments(&self, db: &MemoryStore) -> Result<Vec<Comment>> {
        match self.id {
            None => Ok(Vec::new()),
            Some(id) => record::all_eq(db, "post_id", &Value::from(id)),
        }
    }

    /// Count of persisted comments of this post
    pub fn comments_count(&self, db: &MemoryStore) -> Result<usize> {
        match self.id {
            None => Ok(0),
            Some(id) => db.count_eq(Comment::TABLE, "post_id", &Value::from(id)),
        }
    }

    /// Persist a comment under this post, or fail with `Error::RecordInvalid`
    pub fn create_comment(&self, db: &MemoryStore, title: impl Into<String>) -> Result<Comment> {
        let post_id = self.persisted_id("comment")?;
        let mut comment = Comment::new(post_id, title);
        let outcome = comment.save(db)?;
        record::saved_or_invalid(outcome)?;
        Ok(comment)
    }

    /// The author of this post, if one exists
    pub fn author(&self, db: &MemoryStore) -> Result<Option<Author>> {
        match self.id {
            None => Ok(None),
            Some(id) => Ok(record::all_eq(db, "post_id", &Value::from(id))?.into_iter().next()),
        }
    }

    /// Persist an author under this post, or fail with `Error::RecordInvalid`
    pub fn create_author(&self, db: &MemoryStore, first_name: impl Into<String>) -> Result<Author> {
        let post_id = self.persisted_id("author")?;
        let mut author = Author::new(post_id, first_name);
        let outcome = author.save(db)?;
        record::saved_or_invalid(outcome)?;
        Ok(author)
    }

    fn persisted_id(&self, child: &str) -> Result<RecordId> {
        self.id.ok_or_else(|| {
            Error::InvalidOperation(format!("cannot attach {} to an unsaved post", child))
        })
    }

    fn validate(&self, txn: &Transaction, errors: &mut ErrorList) -> Result<()> {
        if let Some(content) = self.content.as_deref() {
            validate_uniqueness(
                errors,
                txn,
                "Post",
                Self::TABLE,
                "content",
                &Value::from(content),
                None,
                self.id,
                "has already been taken",
            )?;
        }
        Ok(())
    }

    /// Save this post and its assigned nested comments in one transaction
    ///
    /// A validation failure anywhere in the batch rolls the whole save back
    /// and is reported through the outcome; the store and this struct are
    /// left exactly as they were.
    pub fn save(&mut self, db: &MemoryStore) -> Result<SaveOutcome> {
        let pending = self.comments_attributes.clone();
        let result = db.transaction(|txn| {
            let mut errors = ErrorList::new();

            // Parent first: new children scope their uniqueness to its id.
            self.validate(txn, &mut errors)?;
            let parent_id = if errors.is_empty() {
                Some(record::persist(txn, self)?)
            } else {
                self.id
            };

            for attrs in &pending {
                match attrs.id {
                    Some(comment_id) => {
                        let owner = self.persisted_id("comment")?;
                        let row = txn
                            .get(Comment::TABLE, comment_id)?
                            .filter(|row| row.get("post_id") == Some(&Value::from(owner)))
                            .ok_or_else(|| Error::RecordNotFound {
                                table: Comment::TABLE.to_string(),
                                id: comment_id,
                            })?;
                        let mut comment = Comment::from_row(comment_id, &row);
                        if let Some(title) = &attrs.title {
                            comment.set_title(title.clone());
                        }
                        let before = errors.len();
                        comment.validate(txn, &mut errors)?;
                        if errors.len() == before {
                            txn.update(Comment::TABLE, comment_id, comment.to_row())?;
                        }
                    }
                    None => {
                        let mut comment = Comment::build(attrs.title.clone());
                        comment.set_post_id(parent_id);
                        let before = errors.len();
                        comment.validate(txn, &mut errors)?;
                        if errors.len() == before {
                            txn.insert(Comment::TABLE, comment.to_row())?;
                        }
                    }
                }
            }

            match parent_id {
                Some(id) if errors.is_empty() => Ok(id),
                _ => Err(Error::RecordInvalid(errors)),
            }
        });

        match result {
            Ok(id) => {
                self.id = Some(id);
                self.comments_attributes.clear();
                Ok(SaveOutcome::Saved)
            }
            Err(Error::RecordInvalid(errors)) => Ok(SaveOutcome::Invalid(errors)),
            Err(err) => Err(err),
        }
    }
}

impl Record for Post {
    const TABLE: &'static str = "posts";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn from_row(id: RecordId, row: &Row) -> Self {
        Self {
            id: Some(id),
            content: row.get("content").and_then(Value::as_text).map(str::to_string),
            comments_attributes: Vec::new(),
        }
    }

    fn to_row(&self) -> Row {
        Row::new().with("content", self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::open_ephemeral;

    #[test]
    fn test_create_persists_and_assigns_id() {
        let db = open_ephemeral();
        let post = Post::create(&db, "post content").unwrap();
        assert_eq!(post.id(), Some(RecordId::new(1)));
        assert_eq!(post.content(), Some("post content"));
    }

    #[test]
    fn test_resaving_a_persisted_post_is_allowed() {
        let db = open_ephemeral();
        let mut post = Post::create(&db, "post content").unwrap();
        assert!(post.save(&db).unwrap().is_saved());
        assert_eq!(db.count_eq("posts", "content", &Value::from("post content")).unwrap(), 1);
    }

    #[test]
    fn test_save_updates_content_in_place() {
        let db = open_ephemeral();
        let mut post = Post::create(&db, "before").unwrap();
        post.set_content("after");
        assert!(post.save(&db).unwrap().is_saved());
        let reloaded: Post = record::find(&db, post.id().unwrap()).unwrap();
        assert_eq!(reloaded.content(), Some("after"));
    }

    #[test]
    fn test_unsaved_post_has_no_children() {
        let db = open_ephemeral();
        let post = Post::new("post content");
        assert_eq!(post.comments_count(&db).unwrap(), 0);
        assert!(post.comments(&db).unwrap().is_empty());
        assert!(post.author(&db).unwrap().is_none());
        assert!(matches!(
            post.create_comment(&db, "same").unwrap_err(),
            Error::InvalidOperation(_)
        ));
    }
}
