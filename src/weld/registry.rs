//! UniqueRegistry: insertion-ordered interning of keys to dense indices.
//!
//! The registry pairs a hash map from each key to the index it received at
//! first insertion with an append-only `order` vector, so that iterating the
//! recorded keys yields first-occurrence order. Indices are dense: the `n`-th
//! distinct key ever inserted receives index `n`.

use crate::debug_invariants::{DebugInvariants, violation};
use crate::mesh_error::MeshWeldError;
use hashbrown::HashMap;
use std::hash::Hash;

/// `UniqueRegistry` maintains:
/// - a lookup `map` from each key to its assigned index,
/// - an `order` vector holding each key at the position of its index.
///
/// # Invariants
///
/// - Each key appears exactly once in `order`.
/// - `map` contains precisely the keys listed in `order`.
/// - `map[order[i]] == i` for every `i`.
///
/// Insertions only assert that `map` and `order` agree in length; the full
/// check is [`validate_invariants`](DebugInvariants::validate_invariants).
#[derive(Clone, Debug)]
pub struct UniqueRegistry<K> {
    map: HashMap<K, usize>,
    order: Vec<K>,
}

impl<K> Default for UniqueRegistry<K> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> UniqueRegistry<K> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Returns the index of `key`, assigning the next free index if the key
    /// has not been seen before.
    ///
    /// The second element is `true` iff this call inserted the key.
    ///
    /// # Example
    /// ```rust
    /// use mesh_weld::weld::registry::UniqueRegistry;
    /// let mut reg = UniqueRegistry::new();
    /// assert_eq!(reg.intern(&"a"), (0, true));
    /// assert_eq!(reg.intern(&"b"), (1, true));
    /// assert_eq!(reg.intern(&"a"), (0, false));
    /// ```
    ///
    /// # Complexity
    /// Amortized **O(1)**.
    pub fn intern(&mut self, key: &K) -> (usize, bool) {
        if let Some(&idx) = self.map.get(key) {
            return (idx, false);
        }
        let idx = self.order.len();
        self.map.insert(key.clone(), idx);
        self.order.push(key.clone());
        log::trace!("registry: new key at index {idx}");
        debug_assert_eq!(self.map.len(), self.order.len());
        (idx, true)
    }

    /// Index previously assigned to `key`, if any.
    #[inline]
    pub fn get(&self, key: &K) -> Option<usize> {
        self.map.get(key).copied()
    }

    /// Returns true iff `key` has been interned.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

impl<K> UniqueRegistry<K> {
    /// Key that received index `idx`.
    #[inline]
    pub fn key(&self, idx: usize) -> Option<&K> {
        self.order.get(idx)
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in insertion (first-occurrence) order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter()
    }

    /// Consumes the registry, returning its keys in insertion order.
    pub fn into_keys(self) -> Vec<K> {
        self.order
    }
}

impl<K: Hash + Eq + Clone> FromIterator<K> for UniqueRegistry<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut reg = Self::new();
        for key in iter {
            reg.intern(&key);
        }
        reg
    }
}

impl<K: Hash + Eq> DebugInvariants for UniqueRegistry<K> {
    fn validate_invariants(&self) -> Result<(), MeshWeldError> {
        if self.map.len() != self.order.len() {
            return Err(violation(format!(
                "registry map holds {} keys but order holds {}",
                self.map.len(),
                self.order.len()
            )));
        }
        for (pos, key) in self.order.iter().enumerate() {
            match self.map.get(key) {
                Some(&idx) if idx == pos => {}
                Some(&idx) => {
                    return Err(violation(format!(
                        "key at position {pos} is mapped to index {idx}"
                    )));
                }
                None => {
                    return Err(violation(format!(
                        "key at position {pos} missing from registry map"
                    )));
                }
            }
        }
        Ok(())
    }
}
