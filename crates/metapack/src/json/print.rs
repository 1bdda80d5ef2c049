//! Human-readable rendering of a map, for diagnostics only.

use std::fmt;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Number, Serializer, Value};

use crate::{MetaInfoMap, MetaValue};

/// Prints `MetaInfoMap = ` followed by a pretty `key -> raw value`
/// object with 4-space indentation, type tags stripped. This is a
/// one-way debugging view, not a parseable format; non-finite floats
/// render as `null`.
impl fmt::Display for MetaInfoMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut plain = Map::new();
        for (key, value) in self {
            plain.insert(key.clone(), raw_scalar(value));
        }

        let mut out = Vec::new();
        let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        Value::Object(plain)
            .serialize(&mut ser)
            .map_err(|_| fmt::Error)?;
        let text = String::from_utf8(out).map_err(|_| fmt::Error)?;

        write!(f, "MetaInfoMap = {text}")
    }
}

fn raw_scalar(value: &MetaValue) -> Value {
    match value {
        MetaValue::Bool(v) => Value::Bool(*v),
        MetaValue::Int32(v) => Value::from(*v),
        MetaValue::Int64(v) => Value::from(*v),
        MetaValue::Float32(v) => finite_or_null(f64::from(*v)),
        MetaValue::Float64(v) => finite_or_null(*v),
        MetaValue::Str(v) => Value::String(v.clone()),
    }
}

fn finite_or_null(v: f64) -> Value {
    Number::from_f64(v).map_or(Value::Null, Value::Number)
}
