//! First-occurrence deduplication of point sequences.
//!
//! A single pass over the input interns each element in a
//! [`UniqueRegistry`]; the element's assigned index is appended to the index
//! sequence whether it was new or already known. The unique sequence is the
//! registry's keys in insertion order, so for every input position `i`:
//!
//! ```text
//! unique[indices[i]] == input[i]
//! ```

use crate::debug_invariants::{DebugInvariants, violation};
use crate::geometry::point::Point2;
use crate::mesh_error::MeshWeldError;
use crate::weld::options::WeldOptions;
use crate::weld::registry::UniqueRegistry;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Result of a deduplication pass.
///
/// `unique` holds each distinct element once, ordered by first appearance;
/// `indices` has one entry per input element pointing into `unique`.
///
/// Deserialization runs [`validate_invariants`](DebugInvariants::validate_invariants),
/// so every decoded index points into `unique`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawDedup<K>",
    bound(deserialize = "K: Deserialize<'de> + Hash + Eq")
)]
pub struct Dedup<K> {
    unique: Vec<K>,
    indices: Vec<usize>,
}

/// Unchecked wire form of [`Dedup`].
#[derive(Deserialize)]
struct RawDedup<K> {
    unique: Vec<K>,
    indices: Vec<usize>,
}

impl<K: Hash + Eq> TryFrom<RawDedup<K>> for Dedup<K> {
    type Error = MeshWeldError;

    fn try_from(raw: RawDedup<K>) -> Result<Self, MeshWeldError> {
        Dedup {
            unique: raw.unique,
            indices: raw.indices,
        }
        .checked()
    }
}

impl<K> Dedup<K> {
    /// Distinct elements in first-occurrence order.
    #[inline]
    pub fn unique(&self) -> &[K] {
        &self.unique
    }

    /// Per-input position of each element within [`unique`](Self::unique).
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Splits into `(unique, indices)`.
    pub fn into_parts(self) -> (Vec<K>, Vec<usize>) {
        (self.unique, self.indices)
    }

    /// Number of input elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of distinct elements.
    #[inline]
    pub fn unique_len(&self) -> usize {
        self.unique.len()
    }

    /// The input element at position `i`, looked up through the index map.
    pub fn resolve(&self, i: usize) -> Option<&K> {
        self.indices.get(i).and_then(|&idx| self.unique.get(idx))
    }
}

impl<K: Clone> Dedup<K> {
    /// Reconstructs the original input sequence.
    pub fn expand(&self) -> Vec<K> {
        self.indices
            .iter()
            .map(|&idx| self.unique[idx].clone())
            .collect()
    }
}

/// Renders the index list followed by the unique list, e.g.
/// `[0, 1, 0, 2, 0] [(0, 0), (1, 0), (2, 2)]`.
impl<K: fmt::Display> fmt::Display for Dedup<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}]",
            self.indices.iter().join(", "),
            self.unique.iter().join(", ")
        )
    }
}

impl<K: Hash + Eq> DebugInvariants for Dedup<K> {
    fn validate_invariants(&self) -> Result<(), MeshWeldError> {
        let mut seen = hashbrown::HashSet::with_capacity(self.unique.len());
        if let Some(pos) = self.unique.iter().position(|k| !seen.insert(k)) {
            return Err(violation(format!("unique element {pos} is a duplicate")));
        }
        // Indices must introduce unique entries in order: 0, 1, 2, ...
        let mut next = 0usize;
        for (pos, &idx) in self.indices.iter().enumerate() {
            if idx > next || idx >= self.unique.len() {
                return Err(violation(format!(
                    "index {idx} at position {pos} skips ahead of next fresh index {next}"
                )));
            }
            if idx == next {
                next += 1;
            }
        }
        if next != self.unique.len() {
            return Err(violation(format!(
                "{} unique elements but only {next} referenced",
                self.unique.len()
            )));
        }
        Ok(())
    }
}

/// Streaming deduplicator: feed elements one at a time, then [`finish`](Self::finish).
#[derive(Clone, Debug)]
pub struct Deduplicator<K> {
    registry: UniqueRegistry<K>,
    indices: Vec<usize>,
}

impl<K> Default for Deduplicator<K> {
    fn default() -> Self {
        Self {
            registry: UniqueRegistry::default(),
            indices: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> Deduplicator<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the registry according to `options.capacity_hint`.
    pub fn with_options(options: &WeldOptions) -> Self {
        match options.capacity_hint {
            Some(n) => Self {
                registry: UniqueRegistry::with_capacity(n),
                indices: Vec::with_capacity(n),
            },
            None => Self::new(),
        }
    }

    /// Records `item` and returns its index in the unique sequence.
    pub fn push(&mut self, item: &K) -> usize {
        let (idx, _) = self.registry.intern(item);
        self.indices.push(idx);
        idx
    }

    /// Number of elements pushed so far.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Index assigned to `item`, if it has been pushed.
    pub fn index_of(&self, item: &K) -> Option<usize> {
        self.registry.get(item)
    }

    pub fn finish(self) -> Dedup<K> {
        let out = Dedup {
            unique: self.registry.into_keys(),
            indices: self.indices,
        };
        log::debug!(
            "dedup: {} inputs -> {} unique",
            out.indices.len(),
            out.unique.len()
        );
        out.debug_assert_invariants();
        out
    }
}

impl<'a, K: Hash + Eq + Clone + 'a> Extend<&'a K> for Deduplicator<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// Deduplicates `items`, preserving first-occurrence order.
///
/// # Example
/// ```rust
/// use mesh_weld::weld::dedup::dedup;
/// let out = dedup(&["a", "b", "a"]);
/// assert_eq!(out.unique(), &["a", "b"]);
/// assert_eq!(out.indices(), &[0, 1, 0]);
/// ```
pub fn dedup<K: Hash + Eq + Clone>(items: &[K]) -> Dedup<K> {
    dedup_with(items, &WeldOptions::default())
}

/// [`dedup`] with explicit options.
///
/// `options.capacity_hint` is clamped to `items.len()`; `index_width` only
/// applies to geometry export and is ignored here.
pub fn dedup_with<K: Hash + Eq + Clone>(items: &[K], options: &WeldOptions) -> Dedup<K> {
    let presize = WeldOptions {
        capacity_hint: options.capacity_hint.map(|n| n.min(items.len())),
        ..options.clone()
    };
    let mut d = Deduplicator::with_options(&presize);
    d.indices.reserve(items.len());
    d.extend(items);
    d.finish()
}

/// Deduplicates a sequence of 2D integer points.
pub fn dedup_points(points: &[Point2]) -> Dedup<Point2> {
    dedup(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i64, i64)]) -> Vec<Point2> {
        raw.iter().copied().map(Point2::from).collect()
    }

    #[test]
    fn sample_with_repeats() {
        let input = pts(&[(0, 0), (1, 0), (0, 0), (2, 2), (0, 0)]);
        let out = dedup_points(&input);
        assert_eq!(out.unique(), pts(&[(0, 0), (1, 0), (2, 2)]).as_slice());
        assert_eq!(out.indices(), &[0, 1, 0, 2, 0]);
    }

    #[test]
    fn empty_input() {
        let out = dedup_points(&[]);
        assert!(out.unique().is_empty());
        assert!(out.indices().is_empty());
        assert!(out.is_empty());
        assert_eq!(out.to_string(), "[] []");
    }

    #[test]
    fn all_distinct_is_identity() {
        let input = pts(&[(0, 0), (1, 1), (2, 2)]);
        let out = dedup_points(&input);
        assert_eq!(out.unique(), input.as_slice());
        assert_eq!(out.indices(), &[0, 1, 2]);
    }

    #[test]
    fn single_repeated_point() {
        let input = pts(&[(7, -7); 4]);
        let out = dedup_points(&input);
        assert_eq!(out.unique(), pts(&[(7, -7)]).as_slice());
        assert_eq!(out.indices(), &[0, 0, 0, 0]);
    }

    #[test]
    fn display_matches_sample_line() {
        let input = pts(&[(0, 0), (1, 0), (0, 0), (2, 2), (0, 0)]);
        assert_eq!(
            dedup_points(&input).to_string(),
            "[0, 1, 0, 2, 0] [(0, 0), (1, 0), (2, 2)]"
        );
    }

    #[test]
    fn resolve_and_expand() {
        let input = pts(&[(3, 3), (1, 0), (3, 3)]);
        let out = dedup_points(&input);
        assert_eq!(out.resolve(2), Some(&Point2::new(3, 3)));
        assert_eq!(out.resolve(3), None);
        assert_eq!(out.expand(), input);
        assert_eq!(out.len(), 3);
        assert_eq!(out.unique_len(), 2);
    }

    #[test]
    fn streaming_matches_batch() {
        let input = pts(&[(5, 1), (5, 1), (0, 2), (5, 1)]);
        let mut d = Deduplicator::with_options(&WeldOptions {
            capacity_hint: Some(2),
            ..Default::default()
        });
        assert_eq!(d.push(&input[0]), 0);
        assert_eq!(d.push(&input[1]), 0);
        assert_eq!(d.push(&input[2]), 1);
        assert_eq!(d.index_of(&input[2]), Some(1));
        d.extend(&input[3..]);
        assert_eq!(d.len(), 4);
        assert_eq!(d.finish(), dedup_points(&input));
    }

    #[test]
    fn validate_rejects_out_of_order_indices() {
        let bad = Dedup {
            unique: pts(&[(0, 0), (1, 1)]),
            indices: vec![1, 0],
        };
        assert!(bad.validate_invariants().is_err());

        let dup = Dedup {
            unique: pts(&[(0, 0), (0, 0)]),
            indices: vec![0, 1],
        };
        assert!(dup.validate_invariants().is_err());
    }

    #[test]
    fn deserialize_rejects_out_of_range_indices() {
        let bad = r#"{"unique":[{"x":0,"y":0}],"indices":[0,5]}"#;
        let err = serde_json::from_str::<Dedup<Point2>>(bad).unwrap_err();
        assert!(err.to_string().contains("invariant violation"), "{err}");

        let dup = r#"{"unique":[{"x":1,"y":1},{"x":1,"y":1}],"indices":[0,1]}"#;
        assert!(serde_json::from_str::<Dedup<Point2>>(dup).is_err());
    }

    #[test]
    fn deserialize_accepts_valid_result() {
        let out = dedup_points(&pts(&[(4, 4), (0, 1), (4, 4)]));
        let json = serde_json::to_string(&out).unwrap();
        let back: Dedup<Point2> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.expand(), pts(&[(4, 4), (0, 1), (4, 4)]));
        assert_eq!(back, out);
    }

    #[test]
    fn oversized_capacity_hint_is_clamped() {
        let opts = WeldOptions {
            capacity_hint: Some(usize::MAX),
            ..Default::default()
        };
        let out = dedup_with(&[9u8, 9, 1], &opts);
        assert_eq!(out.indices(), &[0, 0, 1]);
    }

    #[test]
    fn serde_json_shape() {
        let out = dedup_points(&pts(&[(1, 2), (1, 2)]));
        let s = serde_json::to_string(&out).unwrap();
        assert_eq!(s, r#"{"unique":[{"x":1,"y":2}],"indices":[0,0]}"#);
    }
}
