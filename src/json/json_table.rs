use indexmap::IndexSet;
use serde_json::Value;

use crate::source::{Cell, SourceError};

/// Rows of one JSON collection, kept as parsed values until a cursor
/// reaches them.
///
/// Rows may be arrays (positional fields) or objects. Object rows are laid
/// out on the union of their keys, in first-seen order; a key missing from a
/// row yields a blank cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonTable {
    pub columns: Vec<String>,
    pub rows: Vec<Value>,
}

impl JsonTable {
    pub fn from_rows(rows: Vec<Value>) -> Self {
        let mut columns = IndexSet::new();
        for row in &rows {
            if let Value::Object(map) = row {
                for key in map.keys() {
                    if !columns.contains(key.as_str()) {
                        columns.insert(key.clone());
                    }
                }
            }
        }

        Self {
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Decode row `index` into cells, or `None` past the last row.
    pub fn row_cells(&self, index: usize) -> Option<Result<Vec<Cell>, SourceError>> {
        let row = self.rows.get(index)?;
        let malformed = |message: String| SourceError::MalformedRecord { row: index, message };

        let cells: Result<Vec<Cell>, SourceError> = match row {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(column, v)| Cell::from_json(v).map_err(|m| malformed(format!("column {column}: {m}"))))
                .collect(),
            Value::Object(map) => self.columns
                .iter()
                .map(|key| match map.get(key) {
                    Some(v) => Cell::from_json(v).map_err(|m| malformed(format!("column '{key}': {m}"))),
                    None => Ok(Cell::Blank),
                })
                .collect(),
            other => Err(malformed(format!("expected an array or object, found {other}"))),
        };
        Some(cells)
    }
}
