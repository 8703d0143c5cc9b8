//! Core types for Tabula
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: Unified value enum for column data
//! - RecordId: Auto-incrementing record identifier
//! - TableDef / ColumnDef / ColumnType: Declarative table schemas
//! - Error: Error type hierarchy
//! - ValidationError / ErrorList: Validation failure reporting

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;
pub mod validation;
pub mod value;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use types::{ColumnDef, ColumnType, RecordId, TableDef};
pub use validation::{ErrorList, ValidationError};
pub use value::Value;
