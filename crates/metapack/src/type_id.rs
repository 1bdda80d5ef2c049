//! Scalar type identifiers and their wire codes.

use std::fmt;

/// Identifier of the scalar type a metadata value holds.
///
/// The numeric codes are written verbatim into serialized metadata:
/// they are frozen, new types may only be appended, and existing codes
/// are never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeId {
    Boolean = 0,
    Int32 = 1,
    Int64 = 2,
    Float32 = 3,
    Float64 = 4,
    String = 5,
}

impl TypeId {
    /// Wire code of this type.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps a wire code back to its type.
    ///
    /// Returns `None` for codes outside the published table; the wire
    /// value space is open (newer format revisions, corrupted files),
    /// so the JSON decoder turns `None` into an unknown-code error
    /// rather than trapping.
    pub const fn from_code(code: i64) -> Option<TypeId> {
        match code {
            0 => Some(TypeId::Boolean),
            1 => Some(TypeId::Int32),
            2 => Some(TypeId::Int64),
            3 => Some(TypeId::Float32),
            4 => Some(TypeId::Float64),
            5 => Some(TypeId::String),
            _ => None,
        }
    }

    /// Lower-case type name, e.g. `"int32"`.
    pub const fn name(self) -> &'static str {
        match self {
            TypeId::Boolean => "bool",
            TypeId::Int32 => "int32",
            TypeId::Int64 => "int64",
            TypeId::Float32 => "float32",
            TypeId::Float64 => "float64",
            TypeId::String => "string",
        }
    }

    /// JSON value kind the codec requires for this type, used in
    /// decode diagnostics.
    pub const fn json_kind(self) -> &'static str {
        match self {
            TypeId::Boolean => "boolean",
            TypeId::Int32 | TypeId::Int64 => "integer",
            TypeId::Float32 | TypeId::Float64 => "floating point number",
            TypeId::String => "string",
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
