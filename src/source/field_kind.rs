use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Coarse classification of a field value, and of the destination slot it
/// is scanned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Empty cell
    Blank,
    Bool,
    Int,
    Float,
    String,
    DateTime,
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldKind::Blank => "blank",
            FieldKind::Bool => "boolean",
            FieldKind::Int => "integer",
            FieldKind::Float => "float",
            FieldKind::String => "string",
            FieldKind::DateTime => "date-time",
        };
        f.write_str(name)
    }
}
