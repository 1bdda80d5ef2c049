//! JSON tree → map, with strict per-node validation.

use serde_json::Value;

use super::JsonCodecError;
use crate::{MetaInfoMap, MetaValue, TypeId};

/// Decodes a metadata tree into a fresh map.
///
/// The input is the object produced by [`encode`](super::encode);
/// `null` and `{}` both yield an empty map. Validation is strict and
/// the first ill-formed node aborts the decode, so on success the map
/// holds exactly the tree's entries.
///
/// # Errors
///
/// Any [`JsonCodecError`] raised by per-node validation; see
/// [`decode_into`] for the rules.
pub fn decode(tree: &Value) -> Result<MetaInfoMap, JsonCodecError> {
    let mut map = MetaInfoMap::new();
    decode_into(&mut map, tree)?;
    Ok(map)
}

/// Decodes `tree` into `map`, replacing its current contents.
///
/// The map is cleared up front and nodes are inserted as they
/// validate, so a mid-stream failure leaves the already-decoded prefix
/// in place. Callers that need all-or-nothing semantics decode into a
/// fresh map with [`decode`] and swap it in on success.
///
/// # Errors
///
/// Per node `key`:
/// - [`JsonCodecError::RootNotObject`] when the tree root is neither
///   an object nor null;
/// - [`JsonCodecError::MalformedNode`] when `type_id` or `value` is
///   missing (a non-object node reports `type_id` as missing);
/// - [`JsonCodecError::InvalidTypeCode`] when `type_id` is not a JSON
///   integer;
/// - [`JsonCodecError::UnknownTypeCode`] when the integer is outside
///   the published code table;
/// - [`JsonCodecError::TypeMismatchOnDecode`] when the JSON kind of
///   `value` does not match the declared type.
pub fn decode_into(map: &mut MetaInfoMap, tree: &Value) -> Result<(), JsonCodecError> {
    map.clear();
    let root = match tree {
        Value::Null => return Ok(()),
        Value::Object(root) => root,
        _ => return Err(JsonCodecError::RootNotObject),
    };
    for (key, node) in root {
        let value = decode_node(key, node)?;
        map.insert(key.clone(), value);
    }
    Ok(())
}

fn decode_node(key: &str, node: &Value) -> Result<MetaValue, JsonCodecError> {
    let type_field = field(key, node, "type_id")?;
    let value_field = field(key, node, "value")?;

    let code = type_field
        .as_i64()
        .ok_or_else(|| JsonCodecError::InvalidTypeCode {
            key: key.to_owned(),
        })?;
    let type_id = TypeId::from_code(code).ok_or_else(|| JsonCodecError::UnknownTypeCode {
        key: key.to_owned(),
        code,
    })?;

    scalar_from_json(key, type_id, value_field)
}

fn field<'t>(key: &str, node: &'t Value, name: &'static str) -> Result<&'t Value, JsonCodecError> {
    node.get(name).ok_or_else(|| JsonCodecError::MalformedNode {
        key: key.to_owned(),
        field: name,
    })
}

fn scalar_from_json(
    key: &str,
    type_id: TypeId,
    value: &Value,
) -> Result<MetaValue, JsonCodecError> {
    let mismatch = || JsonCodecError::TypeMismatchOnDecode {
        key: key.to_owned(),
        expected: type_id,
    };

    Ok(match type_id {
        TypeId::Boolean => MetaValue::Bool(value.as_bool().ok_or_else(&mismatch)?),
        TypeId::Int32 => {
            let wide = value.as_i64().ok_or_else(&mismatch)?;
            MetaValue::Int32(i32::try_from(wide).map_err(|_| mismatch())?)
        }
        TypeId::Int64 => MetaValue::Int64(value.as_i64().ok_or_else(&mismatch)?),
        TypeId::Float32 => MetaValue::Float32(float_value(value).ok_or_else(&mismatch)? as f32),
        TypeId::Float64 => MetaValue::Float64(float_value(value).ok_or_else(&mismatch)?),
        TypeId::String => MetaValue::Str(value.as_str().ok_or_else(&mismatch)?.to_owned()),
    })
}

// Integer-kind numbers are not accepted where a float is declared; the
// writer always emits floats with a fractional form.
fn float_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) if n.is_f64() => n.as_f64(),
        _ => None,
    }
}
