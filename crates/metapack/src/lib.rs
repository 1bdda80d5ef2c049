//! Typed metadata store for dataset serialization.
//!
//! A [`MetaInfoMap`] maps string keys to scalar [`MetaValue`]s drawn
//! from a closed set of six types ([`TypeId`]) and travels as a JSON
//! object that tags every entry with its wire type code. Decoding
//! validates each entry's JSON kind against its declared type, so a
//! tree produced by a different writer cannot smuggle a mistyped value
//! into the map.
//!
//! # Example
//!
//! ```
//! use metapack::{json, MetaInfoMap};
//!
//! let mut meta = MetaInfoMap::new();
//! meta.insert("debug", true);
//! meta.insert("step", 5i32);
//! meta.insert("unit", "m/s");
//!
//! let tree = json::encode(&meta).unwrap();
//! let back = json::decode(&tree).unwrap();
//! assert_eq!(back, meta);
//! assert_eq!(back.get::<i32>("step").unwrap(), 5);
//! ```

pub mod json;
pub mod map;
pub mod type_id;
pub mod value;

pub use json::JsonCodecError;
pub use map::{KeyNotFound, MetaError, MetaInfoMap};
pub use type_id::TypeId;
pub use value::{MetaScalar, MetaValue, TypeMismatch};
