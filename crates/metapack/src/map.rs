//! The metadata store itself: string keys mapped to typed scalars.

use indexmap::IndexMap;
use thiserror::Error;

use crate::{MetaScalar, MetaValue, TypeMismatch};

/// Lookup on a key that is not in the map. Carries the missing key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no key '{0}' exists in meta-info map")]
pub struct KeyNotFound(pub String);

/// Failure of the combined lookup-and-extract accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetaError {
    #[error(transparent)]
    KeyNotFound(#[from] KeyNotFound),
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
}

/// Typed metadata attached to a stored dataset: unique string keys
/// mapped to scalar [`MetaValue`]s.
///
/// Iteration follows insertion order; equality ignores it. Keys are
/// non-empty by caller contract and are not policed here.
///
/// # Example
///
/// ```
/// use metapack::MetaInfoMap;
///
/// let mut meta = MetaInfoMap::new();
/// meta.insert("debug", true);
/// meta.insert("step", 5i32);
///
/// assert_eq!(meta.get::<bool>("debug").unwrap(), true);
/// assert!(meta.at("nope").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaInfoMap {
    entries: IndexMap<String, MetaValue>,
}

impl MetaInfoMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, overwriting and returning any
    /// previous value stored there.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetaValue>,
    ) -> Option<MetaValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Looks up the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Fails with [`KeyNotFound`] for absent keys; there is no default
    /// fallback.
    pub fn at(&self, key: &str) -> Result<&MetaValue, KeyNotFound> {
        self.entries
            .get(key)
            .ok_or_else(|| KeyNotFound(key.to_owned()))
    }

    /// Mutable variant of [`at`](Self::at).
    pub fn at_mut(&mut self, key: &str) -> Result<&mut MetaValue, KeyNotFound> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| KeyNotFound(key.to_owned()))
    }

    /// Looks up `key` and extracts its payload as `T` in one step.
    ///
    /// # Errors
    ///
    /// [`MetaError::KeyNotFound`] for an absent key,
    /// [`MetaError::TypeMismatch`] when the stored tag is not `T`'s.
    pub fn get<T: MetaScalar>(&self, key: &str) -> Result<T, MetaError> {
        Ok(self.at(key)?.extract::<T>()?)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes `key`, reporting whether it was present. Keeps the
    /// relative order of the remaining entries.
    pub fn erase(&mut self, key: &str) -> bool {
        self.entries.shift_remove(key).is_some()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, MetaValue> {
        self.entries.iter()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a MetaInfoMap {
    type Item = (&'a String, &'a MetaValue);
    type IntoIter = indexmap::map::Iter<'a, String, MetaValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for MetaInfoMap
where
    K: Into<String>,
    V: Into<MetaValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MetaInfoMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for MetaInfoMap
where
    K: Into<String>,
    V: Into<MetaValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyNotFound, MetaError, MetaInfoMap};
    use crate::{MetaValue, TypeId};

    #[test]
    fn insert_overwrites_and_returns_previous() {
        let mut meta = MetaInfoMap::new();
        assert_eq!(meta.insert("step", 1i32), None);
        assert_eq!(meta.insert("step", 2i32), Some(MetaValue::Int32(1)));
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get::<i32>("step").unwrap(), 2);
    }

    #[test]
    fn at_reports_the_missing_key() {
        let meta = MetaInfoMap::new();
        assert_eq!(meta.at("nope"), Err(KeyNotFound("nope".to_owned())));
    }

    #[test]
    fn get_distinguishes_absence_from_wrong_type() {
        let mut meta = MetaInfoMap::new();
        meta.insert("debug", true);

        assert!(matches!(
            meta.get::<bool>("verbose"),
            Err(MetaError::KeyNotFound(_))
        ));
        match meta.get::<i64>("debug") {
            Err(MetaError::TypeMismatch(e)) => {
                assert_eq!(e.expected, TypeId::Int64);
                assert_eq!(e.actual, TypeId::Boolean);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn erase_keeps_remaining_order() {
        let mut meta = MetaInfoMap::new();
        meta.insert("a", 1i32);
        meta.insert("b", 2i32);
        meta.insert("c", 3i32);

        assert!(meta.erase("b"));
        assert!(!meta.erase("b"));
        let keys: Vec<_> = meta.keys().collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let forward: MetaInfoMap = [("a", 1i32), ("b", 2i32)].into_iter().collect();
        let backward: MetaInfoMap = [("b", 2i32), ("a", 1i32)].into_iter().collect();
        assert_eq!(forward, backward);

        let different: MetaInfoMap = [("a", 1i32), ("b", 3i32)].into_iter().collect();
        assert_ne!(forward, different);
    }

    #[test]
    fn at_mut_allows_replacement_in_place() {
        let mut meta = MetaInfoMap::new();
        meta.insert("unit", "m");
        *meta.at_mut("unit").unwrap() = MetaValue::from("km");
        assert_eq!(meta.get::<String>("unit").unwrap(), "km");
    }
}
