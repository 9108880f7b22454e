use chrono::NaiveDateTime;

use crate::source::{Cell, FieldKind, ReaderConfig};

/// A caller-owned destination for one field of `Collection::scan`.
///
/// Build them with `.into()` from a mutable reference:
///
/// ```
/// use tabsource::ScanDest;
///
/// let mut name = String::new();
/// let mut age = 0i64;
/// let slots: [ScanDest; 2] = [(&mut name).into(), (&mut age).into()];
/// assert_eq!(slots.len(), 2);
/// ```
#[derive(Debug)]
pub enum ScanDest<'a> {
    Bool(&'a mut bool),
    Int(&'a mut i64),
    Float(&'a mut f64),
    String(&'a mut String),
    DateTime(&'a mut NaiveDateTime),
}

/// A converted value waiting to be written into its slot.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Converted {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(NaiveDateTime),
}

impl ScanDest<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            ScanDest::Bool(_) => FieldKind::Bool,
            ScanDest::Int(_) => FieldKind::Int,
            ScanDest::Float(_) => FieldKind::Float,
            ScanDest::String(_) => FieldKind::String,
            ScanDest::DateTime(_) => FieldKind::DateTime,
        }
    }

    /// Convert `cell` into this slot's kind without touching the slot.
    pub(crate) fn convert(&self, cell: &Cell, config: &ReaderConfig) -> Option<Converted> {
        match self {
            ScanDest::Bool(_) => cell.as_bool(config).map(Converted::Bool),
            ScanDest::Int(_) => cell.as_int(config).map(Converted::Int),
            ScanDest::Float(_) => cell.as_float(config).map(Converted::Float),
            ScanDest::String(_) => cell.as_string(config).map(Converted::String),
            ScanDest::DateTime(_) => cell.as_datetime(config).map(Converted::DateTime),
        }
    }

    /// Store a value produced by `convert` on this same slot.
    pub(crate) fn store(&mut self, value: Converted) {
        match (self, value) {
            (ScanDest::Bool(d), Converted::Bool(v)) => **d = v,
            (ScanDest::Int(d), Converted::Int(v)) => **d = v,
            (ScanDest::Float(d), Converted::Float(v)) => **d = v,
            (ScanDest::String(d), Converted::String(v)) => **d = v,
            (ScanDest::DateTime(d), Converted::DateTime(v)) => **d = v,
            // convert() only ever yields the slot's own kind
            _ => {}
        }
    }
}

impl<'a> From<&'a mut bool> for ScanDest<'a> {
    fn from(d: &'a mut bool) -> Self { ScanDest::Bool(d) }
}

impl<'a> From<&'a mut i64> for ScanDest<'a> {
    fn from(d: &'a mut i64) -> Self { ScanDest::Int(d) }
}

impl<'a> From<&'a mut f64> for ScanDest<'a> {
    fn from(d: &'a mut f64) -> Self { ScanDest::Float(d) }
}

impl<'a> From<&'a mut String> for ScanDest<'a> {
    fn from(d: &'a mut String) -> Self { ScanDest::String(d) }
}

impl<'a> From<&'a mut NaiveDateTime> for ScanDest<'a> {
    fn from(d: &'a mut NaiveDateTime) -> Self { ScanDest::DateTime(d) }
}
