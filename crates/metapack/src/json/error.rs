use thiserror::Error;

use crate::TypeId;

/// Failure while encoding a map to JSON or validating a JSON tree back
/// into one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonCodecError {
    /// Decode input whose top level is neither a JSON object nor null.
    #[error("metadata tree is not a JSON object")]
    RootNotObject,

    /// A node lacks one of its two required fields.
    #[error("meta node '{key}' is ill-formed: no field '{field}'")]
    MalformedNode { key: String, field: &'static str },

    /// `type_id` is present but not a JSON integer.
    #[error("meta node '{key}' has a non-integer type code")]
    InvalidTypeCode { key: String },

    /// `type_id` is an integer outside the published code table.
    ///
    /// Data written by a newer format revision decodes to this error;
    /// nodes decoded before the offending one stay in the map.
    #[error("meta node '{key}' has unknown type code {code}")]
    UnknownTypeCode { key: String, code: i64 },

    /// The declared type and the JSON kind of `value` disagree.
    #[error("meta node '{key}': value not recognized as {}", .expected.json_kind())]
    TypeMismatchOnDecode { key: String, expected: TypeId },

    /// A float entry holds NaN or an infinity, which JSON cannot
    /// represent.
    #[error("meta entry '{key}' is not a finite number and has no JSON form")]
    NonFiniteFloat { key: String },
}
