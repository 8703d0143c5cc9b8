//! Schema definition for the three record tables
//!
//! Tables are recreated from scratch on every definition, so a store that
//! has been defined is always empty. The implicit auto-incrementing `id`
//! column is never declared.

use tabula_core::{ColumnType, TableDef};
use tabula_storage::MemoryStore;

/// Define the `posts`, `authors`, and `comments` tables
pub fn define(db: &MemoryStore) {
    db.create_table(TableDef::new("posts").column("content", ColumnType::Text));
    db.create_table(
        TableDef::new("authors")
            .column("post_id", ColumnType::Integer)
            .column("first_name", ColumnType::Text),
    );
    db.create_table(
        TableDef::new("comments")
            .column("post_id", ColumnType::Integer)
            .column("title", ColumnType::Text),
    );
}
