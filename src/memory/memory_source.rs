use std::sync::Arc;

use indexmap::IndexMap;

use crate::{memory::MemoryCollection, source::{Cell, Collection, ReaderConfig, Source, SourceError}};

/// A source whose collections live entirely in memory.
///
/// Useful on its own for programmatic data and as the storage of backends
/// that decode a whole file up front. Collections keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: IndexMap<String, Arc<Vec<Vec<Cell>>>>,
    config: Arc<ReaderConfig>,
}

impl MemorySource {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            tables: IndexMap::new(),
            config: Arc::new(config),
        }
    }

    /// Add (or replace) a collection and return the source, builder style.
    pub fn with_collection(mut self, name: &str, rows: Vec<Vec<Cell>>) -> Self {
        self.insert(name, rows);
        self
    }

    /// Add a collection; returns the rows previously stored under `name`.
    pub fn insert(&mut self, name: &str, rows: Vec<Vec<Cell>>) -> Option<Arc<Vec<Vec<Cell>>>> {
        self.tables.insert(name.to_string(), Arc::new(rows))
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn collection_count(&self) -> usize {
        self.tables.len()
    }
}

impl Source for MemorySource {
    fn list(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.tables.keys().cloned().collect())
    }

    fn get(&self, name: &str) -> Result<Box<dyn Collection>, SourceError> {
        let rows = self.tables
            .get(name)
            .ok_or_else(|| SourceError::CollectionNotFound(name.to_string()))?;
        Ok(Box::new(MemoryCollection::new(Arc::clone(rows), Arc::clone(&self.config))))
    }
}
