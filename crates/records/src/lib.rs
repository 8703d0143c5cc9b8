//! Record layer for Tabula
//!
//! This crate provides the declarative surface over the store:
//! - the three record types (Post, Author, Comment) with their
//!   associations and validations
//! - nested-attribute assignment of comments through their post
//! - the save pipeline: validation fires before persistence, inside one
//!   transaction, with scoped uniqueness evaluated against siblings staged
//!   earlier in the same save
//! - the environment bootstrap (`open_ephemeral`) that installs the stdout
//!   statement logger and defines the schema
//!
//! ## Save semantics
//!
//! A save is atomic: every row it touches commits together or not at all.
//! Validation failures never surface as errors: `save` absorbs them and
//! reports through [`SaveOutcome`]. Only infrastructure faults (unknown
//! tables, dangling ids) propagate as `Err`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod author;
pub mod bootstrap;
pub mod comment;
pub mod nested;
pub mod post;
pub mod record;
pub mod schema;
pub mod validations;

pub use author::Author;
pub use bootstrap::{init_statement_logging, open_ephemeral};
pub use comment::Comment;
pub use nested::CommentAttributes;
pub use post::Post;
pub use record::{all_eq, find, Record, SaveOutcome};
