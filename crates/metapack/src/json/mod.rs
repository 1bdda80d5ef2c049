//! JSON wire codec for [`MetaInfoMap`](crate::MetaInfoMap).
//!
//! One object per map, one `{"type_id", "value"}` node per entry:
//!
//! ```text
//! {
//!   "debug": { "type_id": 0, "value": true },
//!   "step":  { "type_id": 1, "value": 5 }
//! }
//! ```
//!
//! `type_id` carries the stable wire code of the entry's
//! [`TypeId`](crate::TypeId); decode validates the JSON kind of
//! `value` against it before anything is inserted. The emitted key
//! order follows map insertion order, but readers must not depend on
//! it.

mod decode;
mod encode;
mod error;
mod print;

pub use decode::{decode, decode_into};
pub use encode::encode;
pub use error::JsonCodecError;

impl crate::MetaInfoMap {
    /// Method form of [`encode`].
    pub fn to_json(&self) -> Result<serde_json::Value, JsonCodecError> {
        encode(self)
    }

    /// Method form of [`decode`].
    pub fn from_json(tree: &serde_json::Value) -> Result<Self, JsonCodecError> {
        decode(tree)
    }

    /// Method form of [`decode_into`]: replaces this map's contents
    /// with the decoded tree.
    pub fn update_from_json(&mut self, tree: &serde_json::Value) -> Result<(), JsonCodecError> {
        decode_into(self, tree)
    }
}
