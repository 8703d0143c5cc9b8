//! Shared helpers for the reproduction harness tests

use tabula::MemoryStore;

/// Fresh store with logging enabled and the schema defined
pub fn harness() -> MemoryStore {
    tabula::open_ephemeral()
}
