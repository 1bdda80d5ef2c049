//! Map → JSON tree.

use serde_json::{Map, Number, Value};

use super::JsonCodecError;
use crate::{MetaInfoMap, MetaValue};

/// Encodes `map` into its JSON wire form.
///
/// Every entry becomes an object `{"type_id": <code>, "value":
/// <scalar>}` under its key; an empty map encodes to `{}`. The
/// produced tree is freshly owned and shares nothing with the map.
///
/// # Errors
///
/// [`JsonCodecError::NonFiniteFloat`] when a float entry holds NaN or
/// an infinity.
///
/// # Example
///
/// ```
/// use metapack::{json, MetaInfoMap};
/// use serde_json::json;
///
/// let mut meta = MetaInfoMap::new();
/// meta.insert("debug", true);
/// meta.insert("step", 5i32);
///
/// let tree = json::encode(&meta).unwrap();
/// assert_eq!(
///     tree,
///     json!({
///         "debug": { "type_id": 0, "value": true },
///         "step": { "type_id": 1, "value": 5 },
///     })
/// );
/// ```
pub fn encode(map: &MetaInfoMap) -> Result<Value, JsonCodecError> {
    let mut root = Map::new();
    for (key, value) in map {
        let mut node = Map::new();
        node.insert("type_id".to_owned(), Value::from(value.type_id().code()));
        node.insert("value".to_owned(), scalar_to_json(key, value)?);
        root.insert(key.clone(), Value::Object(node));
    }
    Ok(Value::Object(root))
}

fn scalar_to_json(key: &str, value: &MetaValue) -> Result<Value, JsonCodecError> {
    Ok(match value {
        MetaValue::Bool(v) => Value::Bool(*v),
        MetaValue::Int32(v) => Value::from(*v),
        MetaValue::Int64(v) => Value::from(*v),
        MetaValue::Float32(v) => float_to_json(key, f64::from(*v))?,
        MetaValue::Float64(v) => float_to_json(key, *v)?,
        MetaValue::Str(v) => Value::String(v.clone()),
    })
}

fn float_to_json(key: &str, v: f64) -> Result<Value, JsonCodecError> {
    Number::from_f64(v)
        .map(Value::Number)
        .ok_or_else(|| JsonCodecError::NonFiniteFloat {
            key: key.to_owned(),
        })
}
