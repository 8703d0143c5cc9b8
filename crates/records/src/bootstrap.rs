//! Environment bootstrap
//!
//! Mirrors what the reproduction session does by hand: turn on verbose
//! statement logging, open an ephemeral in-memory store, and define the
//! schema. Every call returns a store rebuilt from scratch.

use once_cell::sync::OnceCell;
use tabula_storage::MemoryStore;
use tracing::info;

use crate::schema;

static LOG_INIT: OnceCell<()> = OnceCell::new();

/// Install the stdout statement logger
///
/// Logs everything at DEBUG and above, which includes the `tabula::sql`
/// statement trace. Safe to call any number of times; only the first call
/// installs a subscriber, and an already-installed global subscriber (for
/// example under `cargo test`) is left in place.
pub fn init_statement_logging() {
    LOG_INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Open a fresh store with logging enabled and the schema defined
pub fn open_ephemeral() -> MemoryStore {
    init_statement_logging();
    let db = MemoryStore::new();
    schema::define(&db);
    info!(target: "tabula::db", "schema defined, store ready");
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ephemeral_yields_empty_defined_store() {
        let db = open_ephemeral();
        assert_eq!(db.table_names(), vec!["authors", "comments", "posts"]);
        assert_eq!(db.count_eq("comments", "title", &tabula_core::Value::Null).unwrap(), 0);
    }

    #[test]
    fn test_stores_are_independent() {
        let a = open_ephemeral();
        let b = open_ephemeral();
        a.transaction(|txn| txn.insert("posts", tabula_storage::Row::new().with("content", "post content")))
            .unwrap();
        assert_eq!(b.count_eq("posts", "content", &tabula_core::Value::from("post content")).unwrap(), 0);
    }
}
