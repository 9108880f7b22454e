use std::{path::Path, sync::RwLock};

use once_cell::sync::Lazy;

use crate::{registry::{Opener, Registry}, source::{ReaderConfig, Source, SourceError}};

/// Process-wide registry behind the free functions below, created on first
/// use with the built-in backends and the default `ReaderConfig`.
static DEFAULT_REGISTRY: Lazy<RwLock<Registry>> =
    Lazy::new(|| RwLock::new(Registry::with_defaults(ReaderConfig::default())));

fn poisoned<T>(_: T) -> SourceError {
    SourceError::Other("default source registry lock is poisoned".to_string())
}

/// Register a backend in the process-wide registry.
///
/// Meant to run during start-up, before the first call to [`open`].
pub fn register<O: Opener + 'static>(name: &str, opener: O) -> Result<(), SourceError> {
    DEFAULT_REGISTRY.write().map_err(poisoned)?.register(name, opener)
}

/// Open a tabular file using the process-wide registry.
pub fn open(path: impl AsRef<Path>) -> Result<Box<dyn Source>, SourceError> {
    DEFAULT_REGISTRY.read().map_err(poisoned)?.open(path)
}

/// Names registered in the process-wide registry, in dispatch order.
pub fn registered_names() -> Result<Vec<String>, SourceError> {
    Ok(DEFAULT_REGISTRY.read().map_err(poisoned)?.names())
}
