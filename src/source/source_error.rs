use std::fmt::Display;

use crate::source::FieldKind;

/// Every failure surfaced by the registry, the dispatcher and the backends.
///
/// "Not in this format" is deliberately absent: a backend that does not
/// recognize a file answers with [`crate::Detected::NotInFormat`] instead of
/// an error, so it can never leak out of `open`.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// A backend with this name is already registered.
    DuplicateRegistration(String),
    /// Backends must be registered under a non-empty name.
    EmptyName,
    /// Every registered backend declined the file.
    UnsupportedFormat(String),
    /// The file could not be read.
    Io { path: String, message: String },
    /// The file carries a backend's signature but its content is corrupt.
    Parse { path: String, message: String },
    /// `Source::get` was asked for a collection the file does not contain.
    CollectionNotFound(String),
    /// A field could not be converted into the requested destination kind.
    TypeMismatch { column: usize, expected: FieldKind, found: FieldKind },
    /// `scan` got a different number of destinations than the record has fields.
    Arity { expected: usize, got: usize },
    /// Extraction was attempted before the first `next_record` or after exhaustion.
    InvalidCursor,
    /// A record could not be materialized while advancing the cursor.
    MalformedRecord { row: usize, message: String },
    Other(String),
}

impl SourceError {
    pub fn io(path: &str, err: &std::io::Error) -> Self {
        SourceError::Io { path: path.to_string(), message: err.to_string() }
    }

    pub fn parse(path: &str, message: impl Into<String>) -> Self {
        SourceError::Parse { path: path.to_string(), message: message.into() }
    }

    pub fn err<T>(self) -> Result<T, SourceError> {
        Err(self)
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::DuplicateRegistration(name) =>
                write!(f, "source '{name}' is already registered"),
            SourceError::EmptyName =>
                write!(f, "source name must not be empty"),
            SourceError::UnsupportedFormat(path) =>
                write!(f, "file format of '{path}' is not known/supported"),
            SourceError::Io { path, message } =>
                write!(f, "could not read '{path}': {message}"),
            SourceError::Parse { path, message } =>
                write!(f, "malformed content in '{path}': {message}"),
            SourceError::CollectionNotFound(name) =>
                write!(f, "collection '{name}' not found"),
            SourceError::TypeMismatch { column, expected, found } =>
                write!(f, "column {column}: cannot scan {found} into {expected}"),
            SourceError::Arity { expected, got } =>
                write!(f, "record has {expected} fields but {got} destinations were given"),
            SourceError::InvalidCursor =>
                write!(f, "no current record; call next_record() first"),
            SourceError::MalformedRecord { row, message } =>
                write!(f, "record {row}: {message}"),
            SourceError::Other(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for SourceError {}
