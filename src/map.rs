//! Ordered map type for Simple mappings.
//!
//! This module provides [`SimpleMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for mapping entries. Entry order is the
//! serialization order, so a round trip through [`crate::stringify`] and
//! [`crate::parse`] preserves the order keys were first written in.
//!
//! Rebinding an existing key replaces its value in place (last write wins),
//! matching what a document that repeats a key parses to.
//!
//! Equality between two `SimpleMap`s compares key sets and values but not
//! entry order, which is exactly the structural equality the serializer's
//! run-length compression relies on.
//!
//! ## Examples
//!
//! ```rust
//! use simple_format::{SimpleMap, Value};
//!
//! let mut map = SimpleMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to Simple values.
///
/// # Examples
///
/// ```rust
/// use simple_format::{SimpleMap, Value};
///
/// let mut map = SimpleMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimpleMap(IndexMap<String, crate::Value>);

impl SimpleMap {
    /// Creates an empty `SimpleMap`.
    #[must_use]
    pub fn new() -> Self {
        SimpleMap(IndexMap::new())
    }

    /// Creates an empty `SimpleMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SimpleMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the entry keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for SimpleMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        SimpleMap(map.into_iter().collect())
    }
}

impl From<SimpleMap> for HashMap<String, crate::Value> {
    fn from(map: SimpleMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for SimpleMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SimpleMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for SimpleMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        SimpleMap(IndexMap::from_iter(iter))
    }
}
