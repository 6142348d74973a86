//! Parameter names and wire values for search requests

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Fixed wire format for date-typed query parameters (UTC, no offset suffix).
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// A typed field usable in filter, range and sort positions.
///
/// Wire names are a fixed convention; they must not end in a `_gt`/`_gte`/
/// `_lt`/`_lte` suffix that could be reparsed as a range key.
pub trait SearchParam {
    fn wire_name(&self) -> &'static str;
}

/// Escape hatch for parameters this release does not model yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawParam(pub &'static str);

impl SearchParam for RawParam {
    fn wire_name(&self) -> &'static str {
        self.0
    }
}

/// A query-parameter value.
///
/// `Null` entries are dropped at serialization time, never sent as an empty
/// string or a literal `"null"`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(DateTime<Utc>),
    Id(Uuid),
}

impl ParamValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// Natural string form used on the wire; `None` for null values.
    pub fn to_wire(&self) -> Option<String> {
        match self {
            ParamValue::Null => None,
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Int(i) => Some(i.to_string()),
            ParamValue::Float(f) => Some(f.to_string()),
            ParamValue::Bool(b) => Some(b.to_string()),
            ParamValue::Date(d) => Some(d.format(DATE_FORMAT).to_string()),
            ParamValue::Id(id) => Some(id.to_string()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        ParamValue::Date(value)
    }
}

impl From<Uuid> for ParamValue {
    fn from(value: Uuid) -> Self {
        ParamValue::Id(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParamValue::Null)
    }
}
