use std::{fmt::Debug, path::Path};

use crate::source::{Source, SourceError};

/// Outcome of a backend looking at a file.
///
/// `NotInFormat` is the explicit "not my format" answer that makes the
/// dispatcher move on to the next backend. Real failures travel as `Err`.
pub enum Detected {
    Opened(Box<dyn Source>),
    NotInFormat,
}

impl Detected {
    pub fn opened<S: Source + 'static>(source: S) -> Self {
        Detected::Opened(Box::new(source))
    }

    pub fn is_opened(&self) -> bool {
        matches!(self, Detected::Opened(_))
    }
}

impl Debug for Detected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Detected::Opened(_) => f.write_str("Opened(..)"),
            Detected::NotInFormat => f.write_str("NotInFormat"),
        }
    }
}

/// A format backend's entry point.
///
/// It must answer `Ok(Detected::NotInFormat)` quickly when the file is not
/// of its type, and only return `Err` once the file is recognized (or cannot
/// be read at all). Openers are shared between threads and must be stateless
/// or internally synchronized.
pub trait Opener: Send + Sync {
    fn open(&self, path: &Path) -> Result<Detected, SourceError>;
}

impl<F> Opener for F
where
    F: Fn(&Path) -> Result<Detected, SourceError> + Send + Sync,
{
    fn open(&self, path: &Path) -> Result<Detected, SourceError> {
        self(path)
    }
}
