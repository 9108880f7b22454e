use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use ordered_float::OrderedFloat;
use serde_json::Value;

use crate::source::{FieldKind, ReaderConfig};

const DATETIME_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

/// One field of a record, as stored by a backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    Blank,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    String(String),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn float(f: f64) -> Self {
        Cell::Float(OrderedFloat(f))
    }

    pub fn text(s: &str) -> Self {
        Cell::String(s.to_string())
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Cell::Blank => FieldKind::Blank,
            Cell::Bool(_) => FieldKind::Bool,
            Cell::Int(_) => FieldKind::Int,
            Cell::Float(_) => FieldKind::Float,
            Cell::String(_) => FieldKind::String,
            Cell::DateTime(_) => FieldKind::DateTime,
        }
    }

    /// Classify a JSON scalar. Arrays and objects have no cell representation,
    /// and integers beyond the `i64` range are rejected rather than rounded.
    pub fn from_json(value: &Value) -> Result<Cell, String> {
        match value {
            Value::Null => Ok(Cell::Blank),
            Value::Bool(b) => Ok(Cell::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Cell::Int(i))
                } else if n.is_u64() {
                    Err(format!("integer {n} does not fit in a signed 64-bit cell"))
                } else {
                    n.as_f64()
                        .map(Cell::float)
                        .ok_or_else(|| format!("number {n} is out of range"))
                }
            }
            Value::String(s) => Ok(Cell::String(s.clone())),
            Value::Array(_) => Err("nested arrays cannot be stored in a cell".to_string()),
            Value::Object(_) => Err("nested objects cannot be stored in a cell".to_string()),
        }
    }

    fn prepared<'a>(s: &'a str, config: &ReaderConfig) -> &'a str {
        if config.trim_whitespace { s.trim() } else { s }
    }

    pub fn as_bool(&self, config: &ReaderConfig) -> Option<bool> {
        match self {
            Cell::Bool(b) => Some(*b),
            Cell::Blank if config.blank_as_zero => Some(false),
            Cell::String(s) => match Self::prepared(s, config) {
                "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
                "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_int(&self, config: &ReaderConfig) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            Cell::Float(f) => {
                let f = f.into_inner();
                // i64::MAX as f64 rounds up to 2^63, hence the strict bound
                let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
                (f.fract() == 0.0 && in_range).then_some(f as i64)
            }
            Cell::Blank if config.blank_as_zero => Some(0),
            Cell::String(s) => Self::prepared(s, config).parse::<i64>().ok(),
            _ => None,
        }
    }

    pub fn as_float(&self, config: &ReaderConfig) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(f.into_inner()),
            Cell::Blank if config.blank_as_zero => Some(0.0),
            Cell::String(s) => Self::prepared(s, config).parse::<f64>().ok(),
            _ => None,
        }
    }

    pub fn as_string(&self, config: &ReaderConfig) -> Option<String> {
        match self {
            Cell::Blank if !config.blank_as_zero => None,
            other => Some(other.to_string()),
        }
    }

    pub fn as_datetime(&self, config: &ReaderConfig) -> Option<NaiveDateTime> {
        match self {
            Cell::DateTime(dt) => Some(*dt),
            Cell::String(s) => parse_datetime(Self::prepared(s, config), &config.date_formats),
            _ => None,
        }
    }
}

fn parse_datetime(s: &str, formats: &[String]) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    formats.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(s, fmt).ok().or_else(|| {
            NaiveDate::parse_from_str(s, fmt)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
    })
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Blank => Ok(()),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(x) => write!(f, "{}", x.into_inner()),
            Cell::String(s) => f.write_str(s),
            Cell::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_DISPLAY)),
        }
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self { Cell::Bool(b) }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self { Cell::Int(i) }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self { Cell::float(f) }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self { Cell::text(s) }
}

impl From<String> for Cell {
    fn from(s: String) -> Self { Cell::String(s) }
}

impl From<NaiveDateTime> for Cell {
    fn from(dt: NaiveDateTime) -> Self { Cell::DateTime(dt) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn from_json_scalars() {
        assert_eq!(Cell::from_json(&json!(null)).unwrap(), Cell::Blank);
        assert_eq!(Cell::from_json(&json!(true)).unwrap(), Cell::Bool(true));
        assert_eq!(Cell::from_json(&json!(42)).unwrap(), Cell::Int(42));
        assert_eq!(Cell::from_json(&json!(1.5)).unwrap(), Cell::float(1.5));
        assert_eq!(Cell::from_json(&json!("x")).unwrap(), Cell::text("x"));
        assert_eq!(Cell::from_json(&json!(1e300)).unwrap().kind(), FieldKind::Float);
    }

    #[test]
    fn from_json_rejects_integers_beyond_i64() {
        let err = Cell::from_json(&json!(u64::MAX)).unwrap_err();
        assert!(err.contains("18446744073709551615"));
        assert_eq!(Cell::from_json(&json!(i64::MAX)).unwrap(), Cell::Int(i64::MAX));
    }

    #[test]
    fn from_json_rejects_nested() {
        assert!(Cell::from_json(&json!([1, 2])).is_err());
        assert!(Cell::from_json(&json!({"a": 1})).is_err());
    }

    #[test]
    fn display_renders_each_kind() {
        assert_eq!(Cell::Blank.to_string(), "");
        assert_eq!(Cell::Bool(false).to_string(), "false");
        assert_eq!(Cell::Int(-7).to_string(), "-7");
        assert_eq!(Cell::float(2.5).to_string(), "2.5");
        assert_eq!(Cell::DateTime(ymd(2024, 3, 9)).to_string(), "2024-03-09 00:00:00");
    }

    #[test]
    fn bool_conversion() {
        let c = ReaderConfig::default();
        assert_eq!(Cell::text(" TRUE ").as_bool(&c), Some(true));
        assert_eq!(Cell::text("0").as_bool(&c), Some(false));
        assert_eq!(Cell::text("yes").as_bool(&c), None);
        assert_eq!(Cell::Int(1).as_bool(&c), None);
        assert_eq!(Cell::Blank.as_bool(&c), Some(false));
        assert_eq!(Cell::text(" t").as_bool(&ReaderConfig::strict()), None);
    }

    #[test]
    fn int_conversion() {
        let c = ReaderConfig::default();
        assert_eq!(Cell::float(3.0).as_int(&c), Some(3));
        assert_eq!(Cell::float(3.25).as_int(&c), None);
        assert_eq!(Cell::float(1e20).as_int(&c), None);
        assert_eq!(Cell::text(" 12 ").as_int(&c), Some(12));
        assert_eq!(Cell::text("12abc").as_int(&c), None);
        assert_eq!(Cell::Bool(true).as_int(&c), None);
        assert_eq!(Cell::Blank.as_int(&ReaderConfig::strict()), None);
    }

    #[test]
    fn float_and_string_conversion() {
        let c = ReaderConfig::default();
        assert_eq!(Cell::Int(4).as_float(&c), Some(4.0));
        assert_eq!(Cell::text("0.25").as_float(&c), Some(0.25));
        assert_eq!(Cell::DateTime(ymd(2020, 1, 1)).as_float(&c), None);
        assert_eq!(Cell::Int(4).as_string(&c), Some("4".to_string()));
        assert_eq!(Cell::Blank.as_string(&c), Some(String::new()));
        assert_eq!(Cell::Blank.as_string(&ReaderConfig::strict()), None);
    }

    #[test]
    fn datetime_conversion() {
        let c = ReaderConfig::default();
        assert_eq!(Cell::text("2024-03-09").as_datetime(&c), Some(ymd(2024, 3, 9)));
        assert_eq!(
            Cell::text("2024-03-09 10:30:00").as_datetime(&c),
            Some(ymd(2024, 3, 9).date().and_hms_opt(10, 30, 0).unwrap())
        );
        assert_eq!(
            Cell::text("2024-03-09T10:30:00+02:00").as_datetime(&c),
            Some(ymd(2024, 3, 9).date().and_hms_opt(8, 30, 0).unwrap())
        );
        assert_eq!(Cell::text("09/03/2024").as_datetime(&c), None);
        assert_eq!(Cell::Blank.as_datetime(&c), None);

        let dmy = ReaderConfig::default().with_date_formats(&["%d/%m/%Y"]);
        assert_eq!(Cell::text("09/03/2024").as_datetime(&dmy), Some(ymd(2024, 3, 9)));
    }
}
