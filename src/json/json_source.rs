use std::sync::Arc;

use indexmap::IndexMap;

use crate::{json::{JsonCollection, JsonTable}, source::{Collection, ReaderConfig, Source, SourceError}};

/// A decoded JSON file. The file handle is closed before the source exists;
/// only parsed values are held.
#[derive(Debug, Clone)]
pub struct JsonSource {
    tables: IndexMap<String, Arc<JsonTable>>,
    config: Arc<ReaderConfig>,
}

impl JsonSource {
    pub fn new(tables: IndexMap<String, JsonTable>, config: Arc<ReaderConfig>) -> Self {
        Self {
            tables: tables.into_iter().map(|(k, t)| (k, Arc::new(t))).collect(),
            config,
        }
    }
}

impl Source for JsonSource {
    fn list(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.tables.keys().cloned().collect())
    }

    fn get(&self, name: &str) -> Result<Box<dyn Collection>, SourceError> {
        let table = self.tables
            .get(name)
            .ok_or_else(|| SourceError::CollectionNotFound(name.to_string()))?;
        Ok(Box::new(JsonCollection::new(Arc::clone(table), Arc::clone(&self.config))))
    }
}
