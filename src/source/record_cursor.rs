use std::sync::Arc;

use crate::source::{Cell, FieldKind, ReaderConfig, ScanDest, SourceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Unstarted,
    Positioned,
    Exhausted,
}

/// Cursor state machine shared by the built-in collections.
///
/// Owns the current record and the sticky error slot. Backends only decide
/// how the next record is produced, through the closure given to `advance`.
/// Extraction outside the `Positioned` state never panics: it records
/// `SourceError::InvalidCursor` and returns an empty result.
#[derive(Debug)]
pub struct RecordCursor {
    state: CursorState,
    current: Vec<Cell>,
    err: Option<SourceError>,
    /// Error that ended the iteration, restored by every later `advance`.
    terminal: Option<SourceError>,
    config: Arc<ReaderConfig>,
}

impl RecordCursor {
    pub fn new(config: Arc<ReaderConfig>) -> Self {
        Self {
            state: CursorState::Unstarted,
            current: Vec::new(),
            err: None,
            terminal: None,
            config,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Move to the record produced by `fetch`.
    ///
    /// `None` means clean exhaustion, `Some(Err(_))` aborts iteration and
    /// keeps reporting the error from every later call.
    pub fn advance<F>(&mut self, fetch: F) -> bool
    where
        F: FnOnce() -> Option<Result<Vec<Cell>, SourceError>>,
    {
        if self.state == CursorState::Exhausted {
            self.err = self.terminal.clone();
            return false;
        }

        match fetch() {
            Some(Ok(cells)) => {
                self.state = CursorState::Positioned;
                self.current = cells;
                self.err = None;
                true
            }
            Some(Err(e)) => {
                self.finish(Some(e));
                false
            }
            None => {
                self.finish(None);
                false
            }
        }
    }

    fn finish(&mut self, err: Option<SourceError>) {
        self.state = CursorState::Exhausted;
        self.current.clear();
        self.terminal = err.clone();
        self.err = err;
    }

    pub fn strings(&mut self) -> Vec<String> {
        if self.state != CursorState::Positioned {
            self.err = Some(SourceError::InvalidCursor);
            return Vec::new();
        }
        self.err = None;
        self.current.iter().map(Cell::to_string).collect()
    }

    pub fn types(&mut self) -> Vec<FieldKind> {
        if self.state != CursorState::Positioned {
            self.err = Some(SourceError::InvalidCursor);
            return Vec::new();
        }
        self.err = None;
        self.current.iter().map(Cell::kind).collect()
    }

    /// Convert every field first and write only when all conversions succeed.
    pub fn scan(&mut self, dests: &mut [ScanDest<'_>]) -> Result<(), SourceError> {
        let result = self.try_scan(dests);
        self.err = result.as_ref().err().cloned();
        result
    }

    fn try_scan(&self, dests: &mut [ScanDest<'_>]) -> Result<(), SourceError> {
        if self.state != CursorState::Positioned {
            return SourceError::InvalidCursor.err();
        }
        if dests.len() != self.current.len() {
            return SourceError::Arity { expected: self.current.len(), got: dests.len() }.err();
        }

        let mut converted = Vec::with_capacity(dests.len());
        for (column, (dest, cell)) in dests.iter().zip(&self.current).enumerate() {
            match dest.convert(cell, &self.config) {
                Some(v) => converted.push(v),
                None => {
                    return SourceError::TypeMismatch {
                        column,
                        expected: dest.kind(),
                        found: cell.kind(),
                    }
                    .err();
                }
            }
        }

        for (dest, value) in dests.iter_mut().zip(converted) {
            dest.store(value);
        }
        Ok(())
    }

    pub fn err(&self) -> Option<&SourceError> {
        self.err.as_ref()
    }
}
