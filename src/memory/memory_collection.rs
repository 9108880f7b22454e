use std::sync::Arc;

use crate::source::{Cell, Collection, FieldKind, ReaderConfig, RecordCursor, ScanDest, SourceError};

/// Cursor over rows held in memory. Rows are shared with the owning
/// `MemorySource`, so every cursor is independent and cheap to create.
#[derive(Debug)]
pub struct MemoryCollection {
    rows: Arc<Vec<Vec<Cell>>>,
    next_row: usize,
    cursor: RecordCursor,
}

impl MemoryCollection {
    pub fn new(rows: Arc<Vec<Vec<Cell>>>, config: Arc<ReaderConfig>) -> Self {
        Self {
            rows,
            next_row: 0,
            cursor: RecordCursor::new(config),
        }
    }

    /// Number of data records, independent of the cursor position.
    pub fn record_count(&self) -> usize {
        self.rows.len()
    }
}

impl Collection for MemoryCollection {
    fn next_record(&mut self) -> bool {
        let rows = &self.rows;
        let next_row = &mut self.next_row;
        self.cursor.advance(|| {
            let row = rows.get(*next_row).cloned();
            *next_row += 1;
            row.map(Ok)
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
        self.rows.is_empty()
    }

    fn err(&self) -> Option<&SourceError> {
        self.cursor.err()
    }
}
