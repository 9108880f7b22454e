use std::{fs::File, io::Read, path::Path, sync::Arc};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::{json::{JsonSource, JsonTable}, registry::{Detected, Opener}, source::{ReaderConfig, SourceError}};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const HEADER_LEN: u64 = 4096;

/// Backend for JSON tables.
///
/// A file is claimed when its first non-blank byte within the first 4 KiB
/// is `[` or `{`. Paths that cannot be opened, or are not regular files,
/// are declined. Once claimed, a read failure is a fatal `Io` error and
/// invalid JSON or an unexpected layout is a fatal `Parse` error.
///
/// Layouts:
/// - a top-level array is a single collection named after the file stem;
/// - a top-level object maps collection names to arrays of rows.
#[derive(Debug, Clone, Default)]
pub struct JsonBackend {
    config: Arc<ReaderConfig>,
}

impl JsonBackend {
    pub const NAME: &'static str = "json";

    pub fn new(config: ReaderConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    fn looks_like_json(header: &[u8]) -> bool {
        let header = header.strip_prefix(UTF8_BOM).unwrap_or(header);
        matches!(
            header.iter().copied().find(|b| !b.is_ascii_whitespace()),
            Some(b'[') | Some(b'{')
        )
    }

    /// Open `path` and read its header, or `None` when there is nothing to
    /// look at (missing path, directory, unreadable file).
    fn read_header(path: &Path) -> Option<(File, Vec<u8>)> {
        let mut file = File::open(path).ok()?;
        if !file.metadata().ok()?.is_file() {
            return None;
        }
        let mut header = Vec::with_capacity(HEADER_LEN as usize);
        file.by_ref().take(HEADER_LEN).read_to_end(&mut header).ok()?;
        Some((file, header))
    }

    fn tables_of(value: Value, path: &Path) -> Result<IndexMap<String, JsonTable>, SourceError> {
        let display = path.display().to_string();
        let mut tables = IndexMap::new();

        match value {
            Value::Array(rows) => {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "Sheet1".to_string());
                tables.insert(name, JsonTable::from_rows(rows));
            }
            Value::Object(members) => {
                for (name, member) in members {
                    let Value::Array(rows) = member else {
                        return SourceError::parse(&display, format!("member '{name}' is not an array of records")).err();
                    };
                    tables.insert(name, JsonTable::from_rows(rows));
                }
            }
            _ => return SourceError::parse(&display, "top-level value is not an array or object").err(),
        }

        Ok(tables)
    }
}

impl Opener for JsonBackend {
    fn open(&self, path: &Path) -> Result<Detected, SourceError> {
        let Some((mut file, mut bytes)) = Self::read_header(path) else {
            return Ok(Detected::NotInFormat);
        };
        if !Self::looks_like_json(&bytes) {
            return Ok(Detected::NotInFormat);
        }

        let shown = path.display().to_string();
        file.read_to_end(&mut bytes).map_err(|e| SourceError::io(&shown, &e))?;
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| SourceError::parse(&shown, e.to_string()))?;
        let tables = Self::tables_of(value, path)?;

        debug!(path = %shown, collections = tables.len(), "loaded json source");
        Ok(Detected::opened(JsonSource::new(tables, Arc::clone(&self.config))))
    }
}
