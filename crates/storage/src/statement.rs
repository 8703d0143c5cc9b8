//! SQL-shaped statement rendering for the log
//!
//! The store does not speak SQL, but its log does: each operation renders
//! as the statement an equivalent relational store would have generated,
//! which keeps the trace readable next to the original report.

use std::fmt;

use tabula_core::{RecordId, TableDef, Value};
use tracing::debug;

use crate::table::Row;

/// One loggable operation of the store
#[derive(Debug)]
pub enum Statement<'a> {
    /// Transaction opened
    Begin,
    /// Transaction committed
    Commit,
    /// Transaction rolled back
    Rollback,
    /// Table (re)created
    CreateTable {
        /// The table declaration
        def: &'a TableDef,
    },
    /// Row inserted
    Insert {
        /// Target table
        table: &'a str,
        /// Columns as provided by the caller
        row: &'a Row,
    },
    /// Row updated
    Update {
        /// Target table
        table: &'a str,
        /// Updated row id
        id: RecordId,
        /// Columns being assigned
        row: &'a Row,
    },
    /// Rows selected by column equality
    Select {
        /// Source table
        table: &'a str,
        /// Filter column
        column: &'a str,
        /// Filter value
        value: &'a Value,
    },
    /// Single row selected by id
    SelectById {
        /// Source table
        table: &'a str,
        /// Selected id
        id: RecordId,
    },
    /// Rows counted by column equality
    Count {
        /// Source table
        table: &'a str,
        /// Filter column
        column: &'a str,
        /// Filter value
        value: &'a Value,
    },
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Begin => write!(f, "BEGIN"),
            Statement::Commit => write!(f, "COMMIT"),
            Statement::Rollback => write!(f, "ROLLBACK"),
            Statement::CreateTable { def } => {
                write!(f, "CREATE TABLE {} (id INTEGER PRIMARY KEY AUTOINCREMENT", def.name)?;
                for col in &def.columns {
                    write!(f, ", {} {}", col.name, col.ty.sql_keyword())?;
                }
                write!(f, ")")
            }
            Statement::Insert { table, row } => {
                if row.is_empty() {
                    return write!(f, "INSERT INTO {} DEFAULT VALUES", table);
                }
                let columns: Vec<&str> = row.iter().map(|(c, _)| c).collect();
                let values: Vec<String> = row.iter().map(|(_, v)| v.to_string()).collect();
                write!(
                    f,
                    "INSERT INTO {} ({}) VALUES ({})",
                    table,
                    columns.join(", "),
                    values.join(", ")
                )
            }
            Statement::Update { table, id, row } => {
                let assignments: Vec<String> =
                    row.iter().map(|(c, v)| format!("{} = {}", c, v)).collect();
                write!(f, "UPDATE {} SET {} WHERE {}.id = {}", table, assignments.join(", "), table, id)
            }
            Statement::Select { table, column, value } => {
                write!(f, "SELECT {}.* FROM {} WHERE {}.{} = {}", table, table, table, column, value)
            }
            Statement::SelectById { table, id } => {
                write!(f, "SELECT {}.* FROM {} WHERE {}.id = {} LIMIT 1", table, table, table, id)
            }
            Statement::Count { table, column, value } => {
                write!(f, "SELECT COUNT(*) FROM {} WHERE {}.{} = {}", table, table, column, value)
            }
        }
    }
}

/// Log a statement to the `tabula::sql` target
pub(crate) fn log(statement: &Statement<'_>) {
    debug!(target: "tabula::sql", "{}", statement);
}
