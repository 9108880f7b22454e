use crate::source::{FieldKind, ScanDest, SourceError};

/// A forward-only cursor over the records of one table.
///
/// A collection starts *unstarted*, becomes *positioned* once `next_record`
/// returns `true`, and ends *exhausted*. A `false` from `next_record` means
/// either clean exhaustion or an aborted iteration; `err()` tells them apart.
///
/// Extraction (`strings`, `types`, `scan`) outside the positioned state does
/// not panic. It fails with [`SourceError::InvalidCursor`], which is also
/// left in `err()`.
pub trait Collection: Send {
    /// Advance to the next record. Returns `true` while a record is available.
    fn next_record(&mut self) -> bool;

    /// Every field of the current record, in column order.
    /// Calling it again without advancing yields the same values.
    fn strings(&mut self) -> Vec<String>;

    /// Kind of every field of the current record, in column order.
    fn types(&mut self) -> Vec<FieldKind>;

    /// Extract the current record positionally into `dests`.
    ///
    /// Fails with `Arity` when the slot count differs from the field count
    /// and with `TypeMismatch` when a field cannot become its slot's kind.
    /// On failure no slot is written. The cursor never moves.
    fn scan(&mut self, dests: &mut [ScanDest<'_>]) -> Result<(), SourceError>;

    /// `true` when the collection holds no data records at all.
    fn is_empty(&self) -> bool;

    /// The error left by the last `next_record`, `strings`, `types` or `scan`.
    fn err(&self) -> Option<&SourceError>;
}
