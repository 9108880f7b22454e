use crate::source::{Collection, SourceError};

/// An opened tabular file: a set of named collections.
///
/// Any resources a backend holds are released when the source is dropped.
pub trait Source: Send {
    /// Names of the collections in this source. Order is stable between calls.
    fn list(&self) -> Result<Vec<String>, SourceError>;

    /// A fresh, independent cursor over the named collection.
    fn get(&self, name: &str) -> Result<Box<dyn Collection>, SourceError>;
}

impl std::fmt::Debug for dyn Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.list() {
            Ok(names) => f.debug_struct("Source").field("collections", &names).finish(),
            Err(_) => f.write_str("Source(..)"),
        }
    }
}
