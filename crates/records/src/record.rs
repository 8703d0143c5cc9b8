//! Record trait and shared persistence plumbing
//!
//! A record type maps itself to and from rows of one table. The trait is
//! deliberately small: models keep their validations and associations as
//! inherent methods, and only the row mapping goes through here.

use tabula_core::{Error, ErrorList, RecordId, Result, Value};
use tabula_storage::{MemoryStore, Row, Transaction};

/// A type stored as rows of one table
pub trait Record: Sized {
    /// Table the records live in
    const TABLE: &'static str;

    /// Id of the record, if it has been persisted
    fn id(&self) -> Option<RecordId>;

    /// Rebuild a record from its stored row
    fn from_row(id: RecordId, row: &Row) -> Self;

    /// Render the record as a row (without its id)
    fn to_row(&self) -> Row;
}

/// Outcome of a save attempt
///
/// A save that fails validation is not an error: the attempt is reported
/// here, with the accumulated failures, and the store is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Every touched row was persisted
    Saved,
    /// Validation rejected the save; nothing was persisted
    Invalid(ErrorList),
}

impl SaveOutcome {
    /// Check whether the save went through
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }

    /// The validation failures, if the save was rejected
    pub fn errors(&self) -> Option<&ErrorList> {
        match self {
            SaveOutcome::Saved => None,
            SaveOutcome::Invalid(errors) => Some(errors),
        }
    }
}

/// Find a record by id
pub fn find<R: Record>(db: &MemoryStore, id: RecordId) -> Result<R> {
    db.get(R::TABLE, id)?
        .map(|row| R::from_row(id, &row))
        .ok_or_else(|| Error::RecordNotFound { table: R::TABLE.to_string(), id })
}

/// All records whose `column` equals `value`, in id order
pub fn all_eq<R: Record>(db: &MemoryStore, column: &str, value: &Value) -> Result<Vec<R>> {
    Ok(db
        .select_eq(R::TABLE, column, value)?
        .into_iter()
        .map(|(id, row)| R::from_row(id, &row))
        .collect())
}

/// Stage an insert or update for the record, returning its id
pub(crate) fn persist<R: Record>(txn: &mut Transaction, record: &R) -> Result<RecordId> {
    match record.id() {
        Some(id) => {
            txn.update(R::TABLE, id, record.to_row())?;
            Ok(id)
        }
        None => txn.insert(R::TABLE, record.to_row()),
    }
}

/// Convert an outcome into a result for callers whose contract is
/// "return the persisted record"
pub(crate) fn saved_or_invalid(outcome: SaveOutcome) -> Result<()> {
    match outcome {
        SaveOutcome::Saved => Ok(()),
        SaveOutcome::Invalid(errors) => Err(Error::RecordInvalid(errors)),
    }
}
