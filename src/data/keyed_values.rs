use std::collections::HashMap;
use std::hash::Hash;

use super::KeyedValues;

/// Ordered key-to-value mapping stored in memory.
///
/// Entries keep their insertion order. Adding a value for a key that is
/// already present replaces the value in place, so keys stay unique and
/// the position of the key does not change.
///
/// # Examples
///
/// ```rust
/// use spenn::data::{DefaultKeyedValues, KeyedValues};
///
/// let mut values = DefaultKeyedValues::new();
/// values.add_value("A", 5.0);
/// values.add_value("B", 9.0);
/// values.add_value("A", 2.0);
///
/// assert_eq!(values.item_count(), 2);
/// assert_eq!(values.value(0), Some(2.0));
/// assert_eq!(values.index_of(&"B"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DefaultKeyedValues<K> {
    entries: Vec<(K, Option<f64>)>,
    index: HashMap<K, usize>,
}

impl<K> Default for DefaultKeyedValues<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

// The index is derived from `entries`, so only the entries take part.
impl<K: PartialEq> PartialEq for DefaultKeyedValues<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Clone + Eq + Hash> DefaultKeyedValues<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `key`, appending the key if it is new.
    pub fn add_value(&mut self, key: K, value: f64) {
        self.set_value(key, Some(value));
    }

    /// Sets an optional value for `key`, appending the key if it is new.
    ///
    /// `None` records the key with no value.
    pub fn set_value(&mut self, key: K, value: Option<f64>) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Removes `key` and returns its value slot, or `None` if the key was
    /// not present.
    pub fn remove_value(&mut self, key: &K) -> Option<Option<f64>> {
        let i = self.index.remove(key)?;
        let (_, value) = self.entries.remove(i);
        for (pos, (k, _)) in self.entries.iter().enumerate().skip(i) {
            self.index.insert(k.clone(), pos);
        }
        Some(value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Option<f64>)> + '_ {
        self.entries.iter().map(|(k, v)| (k, *v))
    }
}

impl<K: Clone + Eq + Hash> KeyedValues for DefaultKeyedValues<K> {
    type Key = K;

    fn item_count(&self) -> usize {
        self.entries.len()
    }

    fn key(&self, index: usize) -> Option<&K> {
        self.entries.get(index).map(|(k, _)| k)
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.entries.get(index).and_then(|(_, v)| *v)
    }

    fn index_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }
}

impl<K: Clone + Eq + Hash> FromIterator<(K, f64)> for DefaultKeyedValues<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (key, value) in iter {
            values.add_value(key, value);
        }
        values
    }
}
