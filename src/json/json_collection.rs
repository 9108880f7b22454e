use std::sync::Arc;

use crate::{json::JsonTable, source::{Collection, FieldKind, ReaderConfig, RecordCursor, ScanDest, SourceError}};

/// Cursor over a `JsonTable`. Rows are decoded one at a time; a row that
/// cannot be decoded ends the iteration and is reported through `err()`.
#[derive(Debug)]
pub struct JsonCollection {
    table: Arc<JsonTable>,
    next_row: usize,
    cursor: RecordCursor,
}

impl JsonCollection {
    pub fn new(table: Arc<JsonTable>, config: Arc<ReaderConfig>) -> Self {
        Self { table, next_row: 0, cursor: RecordCursor::new(config) }
    }

    /// Column names of object rows; empty for purely positional tables.
    pub fn columns(&self) -> &[String] {
        &self.table.columns
    }
}

impl Collection for JsonCollection {
    fn next_record(&mut self) -> bool {
        let table = &self.table;
        let next_row = &mut self.next_row;
        self.cursor.advance(|| {
            let cells = table.row_cells(*next_row);
            *next_row += 1;
            cells
        })
    }

    fn strings(&mut self) -> Vec<String> {
        self.cursor.strings()
    }

    fn types(&mut self) -> Vec<FieldKind> {
        self.cursor.types()
    }

    fn scan(&mut self, dests: &mut [ScanDest<'_>]) -> Result<(), SourceError> {
        self.cursor.scan(dests)
    }

    fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn err(&self) -> Option<&SourceError> {
        self.cursor.err()
    }
}
