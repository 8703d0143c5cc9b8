//! Error types for the Tabula store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Validation failures are deliberately not infrastructure errors: a save
//! absorbs them and reports through its outcome. `Error::RecordInvalid`
//! exists for the operations whose contract is "return the persisted
//! record", and for carrying an accumulated `ErrorList` out of an aborted
//! transaction.

use crate::types::RecordId;
use crate::validation::ErrorList;
use thiserror::Error;

/// Result type alias for Tabula operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Tabula store
#[derive(Debug, Error)]
pub enum Error {
    /// Referenced table does not exist
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// Referenced column is not declared on the table
    #[error("unknown column {column} in table {table}")]
    UnknownColumn {
        /// Table the column was looked up in
        table: String,
        /// The undeclared column name
        column: String,
    },

    /// Value does not match the declared column type
    #[error("type mismatch for {table}.{column}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Table holding the column
        table: String,
        /// Column the value was written to
        column: String,
        /// Declared column type
        expected: &'static str,
        /// Type of the rejected value
        actual: &'static str,
    },

    /// No record with the given id
    #[error("record not found: {table} id {id}")]
    RecordNotFound {
        /// Table that was searched
        table: String,
        /// The missing id
        id: RecordId,
    },

    /// Record failed validation
    #[error("record invalid: {0}")]
    RecordInvalid(ErrorList),

    /// Invalid operation or state
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}
