//! MemoryStore: the ephemeral store handle
//!
//! This module implements the store as:
//! - `BTreeMap<String, Table>` for named tables
//! - `parking_lot::RwLock` for thread-safe access
//! - working-copy transactions with swap-in commit
//!
//! # Design Notes
//!
//! - **No durability**: state lives for the lifetime of the handle and is
//!   discarded on drop. Every run starts from a freshly defined schema.
//! - **Cloned working copy**: a transaction clones the table map, stages its
//!   writes there, and the commit swaps the copy in under the write lock.
//!   O(data) per transaction; rollback is dropping the copy.
//! - **Single writer**: the write lock is held for the whole transaction,
//!   so transactions never observe each other mid-flight.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use tabula_core::{Error, RecordId, Result, TableDef, Value};

use crate::statement::{self, Statement};
use crate::table::{Row, Table};
use crate::transaction::Transaction;

/// Shared table state behind the store's lock
#[derive(Debug, Clone, Default)]
pub(crate) struct StoreInner {
    tables: BTreeMap<String, Table>,
}

impl StoreInner {
    pub(crate) fn table(&self, name: &str) -> Result<&Table> {
        self.tables.get(name).ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    pub(crate) fn table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables.get_mut(name).ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    pub(crate) fn create(&mut self, def: TableDef) {
        let name = def.name.clone();
        self.tables.insert(name, Table::new(def));
    }

    pub(crate) fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    pub(crate) fn select_eq(
        &self,
        table: &str,
        column: &str,
        value: &Value,
    ) -> Result<Vec<(RecordId, Row)>> {
        let t = self.table(table)?;
        t.column(column)?;
        Ok(t.rows()
            .filter(|(_, row)| row.get(column) == Some(value))
            .map(|(id, row)| (id, row.clone()))
            .collect())
    }
}

/// Handle to the ephemeral in-memory store
///
/// Cloning the handle shares the same underlying state; dropping the last
/// clone discards everything.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    /// Open a fresh, empty store
    pub fn new() -> Self {
        info!(target: "tabula::db", "opened ephemeral in-memory store");
        Self::default()
    }

    /// Create a table from its declaration
    ///
    /// An existing table of the same name is dropped and recreated empty,
    /// matching the forced recreation the harness schema always used.
    pub fn create_table(&self, def: TableDef) {
        statement::log(&Statement::CreateTable { def: &def });
        self.inner.write().create(def);
    }

    /// Names of the defined tables, sorted
    pub fn table_names(&self) -> Vec<String> {
        self.inner.read().table_names()
    }

    /// Read a row by id
    pub fn get(&self, table: &str, id: RecordId) -> Result<Option<Row>> {
        statement::log(&Statement::SelectById { table, id });
        Ok(self.inner.read().table(table)?.get(id).cloned())
    }

    /// Rows whose `column` equals `value`, in id order
    pub fn select_eq(&self, table: &str, column: &str, value: &Value) -> Result<Vec<(RecordId, Row)>> {
        statement::log(&Statement::Select { table, column, value });
        self.inner.read().select_eq(table, column, value)
    }

    /// Count of rows whose `column` equals `value`
    pub fn count_eq(&self, table: &str, column: &str, value: &Value) -> Result<usize> {
        statement::log(&Statement::Count { table, column, value });
        Ok(self.inner.read().select_eq(table, column, value)?.len())
    }

    /// Execute a closure within a transaction
    ///
    /// The closure stages writes into a working copy of the store; reads
    /// through the transaction observe those staged writes. `Ok` commits by
    /// swapping the working copy in, `Err` discards it, so a failed
    /// transaction leaves no trace.
    pub fn transaction<T>(&self, f: impl FnOnce(&mut Transaction) -> Result<T>) -> Result<T> {
        let mut guard = self.inner.write();
        statement::log(&Statement::Begin);
        let mut txn = Transaction::new(guard.clone());
        match f(&mut txn) {
            Ok(value) => {
                *guard = txn.into_inner();
                statement::log(&Statement::Commit);
                Ok(value)
            }
            Err(err) => {
                statement::log(&Statement::Rollback);
                Err(err)
            }
        }
    }
}
