//! Foundational types for the Tabula store
//!
//! This module defines:
//! - RecordId: Auto-incrementing identifier for rows
//! - ColumnType: Declared type of a column
//! - ColumnDef / TableDef: Declarative table schemas

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a persisted record
///
/// RecordIds are allocated densely per table, starting at 1, the way the
/// implicit integer primary key of the underlying schema behaves. A record
/// that has not been persisted yet has no RecordId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(i64);

impl RecordId {
    /// Create a RecordId from its raw integer form
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer form of this RecordId
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declared type of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// 64-bit signed integer column
    Integer,
    /// UTF-8 text column
    Text,
}

impl ColumnType {
    /// Check whether a value may be stored in a column of this type
    ///
    /// Columns are nullable, so `Null` is accepted by every column type.
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (_, Value::Null) | (ColumnType::Integer, Value::Int(_)) | (ColumnType::Text, Value::Text(_))
        )
    }

    /// SQL keyword used when rendering a CREATE TABLE statement
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
        }
    }
}

/// Declaration of a single table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name
    pub name: String,
    /// Declared column type
    pub ty: ColumnType,
}

impl ColumnDef {
    /// Create a new column declaration
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self { name: name.into(), ty }
    }
}

/// Declaration of a table
///
/// The `id` column is implicit: every table carries an auto-incrementing
/// integer primary key that is never declared here.
///
/// # Example
///
/// ```
/// use tabula_core::{ColumnType, TableDef};
///
/// let posts = TableDef::new("posts").column("content", ColumnType::Text);
/// assert_eq!(posts.name, "posts");
/// assert_eq!(posts.columns.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    /// Table name
    pub name: String,
    /// Declared columns, in declaration order
    pub columns: Vec<ColumnDef>,
}

impl TableDef {
    /// Start a table declaration with no columns
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), columns: Vec::new() }
    }

    /// Append a column declaration
    pub fn column(mut self, name: impl Into<String>, ty: ColumnType) -> Self {
        self.columns.push(ColumnDef::new(name, ty));
        self
    }

    /// Look up a declared column by name
    pub fn column_def(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}
