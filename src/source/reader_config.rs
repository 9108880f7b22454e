use serde::{Deserialize, Serialize};

use crate::source::SourceError;

/// Conversion settings shared by every collection a backend produces.
///
/// - `date_formats` are the chrono patterns tried, in order, when a string
///   field is scanned into a date-time slot (RFC 3339 is always tried first).
/// - `trim_whitespace` trims string fields before numeric, boolean or date
///   conversion. The text returned by `strings()` is never trimmed.
/// - `blank_as_zero` lets blank fields scan into the zero value of boolean,
///   integer, float and string slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub date_formats: Vec<String>,
    pub trim_whitespace: bool,
    pub blank_as_zero: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d".to_string(),
            ],
            trim_whitespace: true,
            blank_as_zero: true,
        }
    }
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that rejects blanks and keeps whitespace significant.
    pub fn strict() -> Self {
        Self {
            trim_whitespace: false,
            blank_as_zero: false,
            ..Self::default()
        }
    }

    pub fn with_date_formats(mut self, formats: &[&str]) -> Self {
        self.date_formats = formats.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    pub fn with_blank_as_zero(mut self, blank_as_zero: bool) -> Self {
        self.blank_as_zero = blank_as_zero;
        self
    }

    /// Load settings from a JSON document; absent keys keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, SourceError> {
        serde_json::from_str(text)
            .map_err(|e| SourceError::Other(format!("invalid reader config: {e}")))
    }
}
