//! Table and row storage
//!
//! A `Table` owns its declaration, a dense id counter, and a
//! `BTreeMap<RecordId, Row>` of stored rows. Writes validate column names
//! and value types against the declaration before anything is stored.
//!
//! Rows are normalized on insert: every declared column is present, with
//! `Null` standing in for anything the caller did not provide. Reads can
//! therefore compare any declared column without an existence check.

use std::collections::BTreeMap;

use tabula_core::{ColumnDef, Error, RecordId, Result, TableDef, Value};

/// Ordered column → value map for one stored record
///
/// The `id` column is not part of the row; ids are keys in the owning table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: BTreeMap<String, Value>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style column assignment
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    /// Assign a column
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(column.into(), value.into());
    }

    /// Read a column
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Iterate (column, value) pairs in column-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of assigned columns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no column is assigned
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One table of the in-memory store
#[derive(Debug, Clone)]
pub struct Table {
    def: TableDef,
    next_id: i64,
    rows: BTreeMap<RecordId, Row>,
}

impl Table {
    /// Create an empty table from its declaration
    pub fn new(def: TableDef) -> Self {
        Self { def, next_id: 1, rows: BTreeMap::new() }
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Table declaration
    pub fn def(&self) -> &TableDef {
        &self.def
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read a row by id
    pub fn get(&self, id: RecordId) -> Option<&Row> {
        self.rows.get(&id)
    }

    /// Iterate (id, row) pairs in id order
    pub fn rows(&self) -> impl Iterator<Item = (RecordId, &Row)> {
        self.rows.iter().map(|(id, row)| (*id, row))
    }

    /// Look up a declared column, as an error if undeclared
    pub fn column(&self, name: &str) -> Result<&ColumnDef> {
        self.def.column_def(name).ok_or_else(|| Error::UnknownColumn {
            table: self.def.name.clone(),
            column: name.to_string(),
        })
    }

    fn check_row(&self, row: &Row) -> Result<()> {
        for (column, value) in row.iter() {
            let def = self.column(column)?;
            if !def.ty.accepts(value) {
                return Err(Error::TypeMismatch {
                    table: self.def.name.clone(),
                    column: column.to_string(),
                    expected: def.ty.sql_keyword(),
                    actual: value.type_name(),
                });
            }
        }
        Ok(())
    }

    fn normalize(&self, mut row: Row) -> Row {
        for col in &self.def.columns {
            if row.get(&col.name).is_none() {
                row.set(col.name.clone(), Value::Null);
            }
        }
        row
    }

    /// Insert a row, allocating the next dense id
    pub fn insert(&mut self, row: Row) -> Result<RecordId> {
        self.check_row(&row)?;
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        self.rows.insert(id, self.normalize(row));
        Ok(id)
    }

    /// Merge the given columns into an existing row
    pub fn update(&mut self, id: RecordId, row: Row) -> Result<()> {
        self.check_row(&row)?;
        let stored = self.rows.get_mut(&id).ok_or_else(|| Error::RecordNotFound {
            table: self.def.name.clone(),
            id,
        })?;
        for (column, value) in row.iter() {
            stored.set(column.to_string(), value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tabula_core::ColumnType;

    fn comments() -> Table {
        Table::new(
            TableDef::new("comments")
                .column("post_id", ColumnType::Integer)
                .column("title", ColumnType::Text),
        )
    }

    #[test]
    fn test_insert_allocates_dense_ids() {
        let mut t = comments();
        let a = t.insert(Row::new().with("title", "first")).unwrap();
        let b = t.insert(Row::new().with("title", "second")).unwrap();
        assert_eq!(a, RecordId::new(1));
        assert_eq!(b, RecordId::new(2));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_insert_normalizes_missing_columns_to_null() {
        let mut t = comments();
        let id = t.insert(Row::new().with("title", "only title")).unwrap();
        let row = t.get(id).unwrap();
        assert_eq!(row.get("post_id"), Some(&Value::Null));
        assert_eq!(row.get("title"), Some(&Value::Text("only title".into())));
    }

    #[test]
    fn test_insert_rejects_unknown_column() {
        let mut t = comments();
        let err = t.insert(Row::new().with("body", "x")).unwrap_err();
        assert!(matches!(err, Error::UnknownColumn { .. }));
        assert!(t.is_empty());
    }

    #[test]
    fn test_insert_rejects_type_mismatch() {
        let mut t = comments();
        let err = t.insert(Row::new().with("post_id", "not an int")).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_update_merges_columns() {
        let mut t = comments();
        let id = t.insert(Row::new().with("post_id", 1i64).with("title", "old")).unwrap();
        t.update(id, Row::new().with("title", "new")).unwrap();
        let row = t.get(id).unwrap();
        assert_eq!(row.get("title"), Some(&Value::Text("new".into())));
        assert_eq!(row.get("post_id"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_update_missing_row_is_an_error() {
        let mut t = comments();
        let err = t.update(RecordId::new(9), Row::new().with("title", "x")).unwrap_err();
        assert!(matches!(err, Error::RecordNotFound { .. }));
    }

    proptest! {
        #[test]
        fn ids_stay_dense_and_monotonic(n in 1usize..32) {
            let mut t = comments();
            let mut last = 0i64;
            for i in 0..n {
                let id = t.insert(Row::new().with("title", format!("t{}", i))).unwrap();
                prop_assert_eq!(id.as_i64(), last + 1);
                last = id.as_i64();
            }
            prop_assert_eq!(t.len(), n);
        }
    }
}
