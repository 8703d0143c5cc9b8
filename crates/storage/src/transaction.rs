//! Transaction: staged writes over a working copy
//!
//! A transaction owns a working copy of the whole table state. Writes go
//! straight into the copy, which is why reads through the transaction see
//! earlier staged writes: the record layer's sibling-aware uniqueness
//! checks depend on exactly that. Nothing reaches the shared state until
//! the owning store swaps the copy in on commit.

use tabula_core::{RecordId, Result, Value};

use crate::statement::{self, Statement};
use crate::store::StoreInner;
use crate::table::Row;

/// In-flight transaction over a working copy of the store
#[derive(Debug)]
pub struct Transaction {
    work: StoreInner,
}

impl Transaction {
    pub(crate) fn new(work: StoreInner) -> Self {
        Self { work }
    }

    pub(crate) fn into_inner(self) -> StoreInner {
        self.work
    }

    /// Stage a row insert, allocating the next dense id
    pub fn insert(&mut self, table: &str, row: Row) -> Result<RecordId> {
        statement::log(&Statement::Insert { table, row: &row });
        self.work.table_mut(table)?.insert(row)
    }

    /// Stage a partial row update
    pub fn update(&mut self, table: &str, id: RecordId, row: Row) -> Result<()> {
        statement::log(&Statement::Update { table, id, row: &row });
        self.work.table_mut(table)?.update(id, row)
    }

    /// Read a row by id, observing staged writes
    pub fn get(&self, table: &str, id: RecordId) -> Result<Option<Row>> {
        statement::log(&Statement::SelectById { table, id });
        Ok(self.work.table(table)?.get(id).cloned())
    }

    /// Rows whose `column` equals `value`, observing staged writes
    pub fn select_eq(&self, table: &str, column: &str, value: &Value) -> Result<Vec<(RecordId, Row)>> {
        statement::log(&Statement::Select { table, column, value });
        self.work.select_eq(table, column, value)
    }
}
