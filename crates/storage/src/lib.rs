//! Storage layer for Tabula
//!
//! This crate implements the ephemeral in-memory relational store:
//! - MemoryStore: named tables behind a `parking_lot::RwLock`
//! - Table: declared columns, dense id allocation, `BTreeMap` row storage
//! - Transaction: closure-scoped staging with all-or-nothing commit
//! - Statement: SQL-shaped rendering of every generated operation
//!
//! # Statement Logging
//!
//! Every operation the store performs is rendered as a statement and logged
//! to the `tabula::sql` target at DEBUG, including the BEGIN/COMMIT/ROLLBACK
//! markers around each transaction. The harness bootstrap installs a stdout
//! subscriber so a test run prints the full statement trace.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod statement;
pub mod store;
pub mod table;
pub mod transaction;

pub use statement::Statement;
pub use store::MemoryStore;
pub use table::{Row, Table};
pub use transaction::Transaction;
