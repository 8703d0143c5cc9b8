//! Tabula: ephemeral record store and nested-save reproduction harness
//!
//! Tabula is a minimal in-memory record layer built to pin down one
//! behavior: when several child records are attached to a parent in a
//! single save through nested-attribute assignment, and some of them
//! collide under a per-parent uniqueness rule, the save must be atomic.
//! Either every record persists or none does.
//!
//! # Quick Start
//!
//! ```
//! use tabula::{CommentAttributes, Post};
//!
//! let db = tabula::open_ephemeral();
//!
//! let mut post = Post::new("post content");
//! post.assign_comments_attributes(vec![
//!     CommentAttributes::new("same"),
//!     CommentAttributes::new("same"),
//! ]);
//!
//! let outcome = post.save(&db).unwrap();
//! assert!(!outcome.is_saved());
//! assert_eq!(post.comments_count(&db).unwrap(), 0);
//! ```
//!
//! # Architecture
//!
//! Three layers, one crate each: core types (`tabula-core`), the in-memory
//! store with closure-scoped atomic transactions (`tabula-storage`), and
//! the record layer with associations, validations, and nested-attribute
//! saves (`tabula-records`). The integration tests under `tests/` are the
//! reproduction scenarios themselves.

// Re-export the public surface of the three layers
pub use tabula_core::{
    ColumnDef, ColumnType, Error, ErrorList, RecordId, Result, TableDef, ValidationError, Value,
};
pub use tabula_records::{
    all_eq, find, init_statement_logging, open_ephemeral, schema, Author, Comment,
    CommentAttributes, Post, Record, SaveOutcome,
};
pub use tabula_storage::{MemoryStore, Row, Statement, Transaction};
