//! Write-once string-keyed map used by map-typed shape fields.
//!
//! SageMaker maps (hyperparameters, environment variables, rule parameters)
//! reject duplicate keys on the client side: once a key has a value, a second
//! insert fails and the first value stays.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelError;

/// A map with unique string keys, iterated in key order.
///
/// Decoding goes through [`EntryMap::add_entry`], so a wire object that
/// repeats a key is rejected rather than silently keeping the last value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryMap<V = String> {
    entries: BTreeMap<String, V>,
}

impl<V> Default for EntryMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> EntryMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a map from pairs, failing on the first repeated key.
    pub fn try_from_entries<K, T, I>(entries: I) -> Result<Self, ModelError>
    where
        K: Into<String>,
        T: Into<V>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut map = Self::new();
        for (key, value) in entries {
            map.add_entry(key, value)?;
        }
        Ok(map)
    }

    /// Adds one entry.
    ///
    /// Fails with [`ModelError::DuplicateKey`] if `key` is already present;
    /// the existing value is left untouched.
    pub fn add_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<V>,
    ) -> Result<&mut Self, ModelError> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(ModelError::DuplicateKey { key });
        }
        self.entries.insert(key, value.into());
        Ok(self)
    }

    /// Removes every entry. Later adds succeed again.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consumes the map, returning the underlying `BTreeMap`.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, V> {
        self.entries
    }
}

impl<V: fmt::Display> fmt::Display for EntryMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for EntryMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntryMapVisitor(PhantomData))
    }
}

struct EntryMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntryMapVisitor<V> {
    type Value = EntryMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with unique string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = EntryMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.add_entry(key, value)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_add_distinct_keys() {
        let mut map = EntryMap::<String>::new();
        map.add_entry("epochs", "10")
            .and_then(|m| m.add_entry("batch_size", "32"))
            .expect("distinct keys");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("epochs").map(String::as_str), Some("10"));
    }

    #[test]
    fn test_should_reject_duplicate_key_and_keep_first_value() {
        let mut map = EntryMap::<String>::new();
        map.add_entry("K", "v1").expect("first insert");
        let err = map.add_entry("K", "v2").expect_err("duplicate");
        assert!(matches!(err, ModelError::DuplicateKey { ref key } if key == "K"));
        assert_eq!(err.to_string(), "Duplicated keys (K) are provided.");
        assert_eq!(map.get("K").map(String::as_str), Some("v1"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_should_accept_key_again_after_clear() {
        let mut map = EntryMap::<String>::new();
        map.add_entry("K", "v1").expect("first insert");
        map.clear();
        assert!(map.is_empty());
        map.add_entry("K", "v2").expect("insert after clear");
        assert_eq!(map.get("K").map(String::as_str), Some("v2"));
    }

    #[test]
    fn test_should_render_entries_in_key_order() {
        let map = EntryMap::<String>::try_from_entries([("b", "2"), ("a", "1")])
            .expect("distinct keys");
        assert_eq!(map.to_string(), "{a=1, b=2}");
        assert_eq!(EntryMap::<String>::new().to_string(), "{}");
    }

    #[test]
    fn test_should_fail_try_from_entries_on_repeat() {
        let result = EntryMap::<String>::try_from_entries([("a", "1"), ("a", "2")]);
        assert!(matches!(result, Err(ModelError::DuplicateKey { .. })));
    }

    #[test]
    fn test_should_serialize_as_plain_object() {
        let map = EntryMap::<String>::try_from_entries([("MODE", "fast")]).expect("map");
        let json = serde_json::to_string(&map).expect("serialize");
        assert_eq!(json, r#"{"MODE":"fast"}"#);
        let back: EntryMap = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, map);
    }

    #[test]
    fn test_should_reject_repeated_key_on_decode() {
        let err = serde_json::from_str::<EntryMap>(r#"{"K":"v1","K":"v2"}"#)
            .expect_err("repeated key");
        assert!(err.to_string().starts_with("Duplicated keys (K) are provided."));
    }
}
