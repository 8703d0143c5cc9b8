//! Field validators
//!
//! Validators append to an [`ErrorList`] instead of failing fast, so one
//! pass over a record collects everything wrong with it. Uniqueness reads
//! through the transaction, which is what lets it see sibling rows staged
//! earlier in the same save.

use tabula_core::{ErrorList, RecordId, Result, ValidationError, Value};
use tabula_storage::Transaction;

/// Require a non-blank text value
///
/// Absent, empty, and whitespace-only values all count as blank.
pub fn validate_presence(
    errors: &mut ErrorList,
    model: &'static str,
    attribute: &'static str,
    value: Option<&str>,
) {
    let blank = value.map_or(true, |v| v.trim().is_empty());
    if blank {
        errors.push(ValidationError::new(model, attribute, "can't be blank"));
    }
}

/// Require `attribute` to be unique, optionally within a scope column
///
/// The check runs against the transaction view, so rows staged earlier in
/// the same transaction count as existing records. `exclude` removes the
/// record's own persisted row from consideration when re-saving. `Null`
/// values are not checked.
#[allow(clippy::too_many_arguments)]
pub fn validate_uniqueness(
    errors: &mut ErrorList,
    txn: &Transaction,
    model: &'static str,
    table: &'static str,
    attribute: &'static str,
    value: &Value,
    scope: Option<(&'static str, Value)>,
    exclude: Option<RecordId>,
    message: &str,
) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }
    let rows = txn.select_eq(table, attribute, value)?;
    let taken = rows.iter().any(|(id, row)| {
        if exclude == Some(*id) {
            return false;
        }
        match &scope {
            Some((scope_column, scope_value)) => row.get(scope_column) == Some(scope_value),
            None => true,
        }
    });
    if taken {
        errors.push(ValidationError::new(model, attribute, message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::{ColumnType, TableDef};
    use tabula_storage::{MemoryStore, Row};

    #[test]
    fn test_presence_blank_forms() {
        for blank in [None, Some(""), Some("   "), Some("\t\n")] {
            let mut errors = ErrorList::new();
            validate_presence(&mut errors, "Author", "first_name", blank);
            assert!(errors.any_for("first_name"), "{:?} should be blank", blank);
        }
        let mut errors = ErrorList::new();
        validate_presence(&mut errors, "Author", "first_name", Some("Jane"));
        assert!(errors.is_empty());
    }

    fn comments_store() -> MemoryStore {
        let db = MemoryStore::new();
        db.create_table(
            TableDef::new("comments")
                .column("post_id", ColumnType::Integer)
                .column("title", ColumnType::Text),
        );
        db
    }

    #[test]
    fn test_uniqueness_sees_staged_siblings() {
        let db = comments_store();
        db.transaction(|txn| {
            txn.insert("comments", Row::new().with("post_id", 1i64).with("title", "same"))?;
            let mut errors = ErrorList::new();
            validate_uniqueness(
                &mut errors,
                txn,
                "Comment",
                "comments",
                "title",
                &Value::from("same"),
                Some(("post_id", Value::Int(1))),
                None,
                "should happen once per post",
            )?;
            assert!(errors.any_for("title"));
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_uniqueness_scope_separates_parents() {
        let db = comments_store();
        db.transaction(|txn| {
            txn.insert("comments", Row::new().with("post_id", 1i64).with("title", "same"))?;
            let mut errors = ErrorList::new();
            validate_uniqueness(
                &mut errors,
                txn,
                "Comment",
                "comments",
                "title",
                &Value::from("same"),
                Some(("post_id", Value::Int(2))),
                None,
                "should happen once per post",
            )?;
            assert!(errors.is_empty());
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_uniqueness_excludes_own_row() {
        let db = comments_store();
        db.transaction(|txn| {
            let id = txn.insert("comments", Row::new().with("post_id", 1i64).with("title", "same"))?;
            let mut errors = ErrorList::new();
            validate_uniqueness(
                &mut errors,
                txn,
                "Comment",
                "comments",
                "title",
                &Value::from("same"),
                Some(("post_id", Value::Int(1))),
                Some(id),
                "should happen once per post",
            )?;
            assert!(errors.is_empty());
            Ok(())
        })
        .unwrap();
    }
}
