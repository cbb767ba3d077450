//! Two-map reconciliation.
//!
//! Classifies every key of two maps as left-only, right-only, common (equal
//! values) or differing (unequal values). Absent values are modelled with
//! `Option` values, so `None` compared with `None` is common and `Some`
//! compared with `None` is differing.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Receives the classification of each key.
///
/// References handed to the visitor borrow from the compared maps, so a
/// visitor may keep them for as long as the maps live.
pub trait DiffVisitor<'a, K, V> {
    /// Key present only in the left map
    fn left_only(&mut self, key: &'a K, value: &'a V);

    /// Key present only in the right map
    fn right_only(&mut self, key: &'a K, value: &'a V);

    /// Key present in both maps with equal values
    fn common(&mut self, key: &'a K, value: &'a V);

    /// Key present in both maps with different values
    fn differing(&mut self, key: &'a K, left: &'a V, right: &'a V);
}

/// Compare two maps, reporting every key to `visitor`.
///
/// An absent map is treated as empty. Left keys are visited first, in the
/// left map's iteration order, followed by the right-only keys.
pub fn diff<'a, K, V, H, D>(
    left: Option<&'a HashMap<K, V, H>>,
    right: Option<&'a HashMap<K, V, H>>,
    visitor: &mut D,
) where
    K: Eq + Hash,
    V: PartialEq,
    H: BuildHasher,
    D: DiffVisitor<'a, K, V> + ?Sized,
{
    match (left, right) {
        (None, None) => {}
        (Some(left), None) => {
            for (key, value) in left {
                visitor.left_only(key, value);
            }
        }
        (None, Some(right)) => {
            for (key, value) in right {
                visitor.right_only(key, value);
            }
        }
        (Some(left), Some(right)) => {
            for (key, value) in left {
                match right.get(key) {
                    None => visitor.left_only(key, value),
                    Some(other) if value == other => visitor.common(key, value),
                    Some(other) => visitor.differing(key, value, other),
                }
            }
            for (key, value) in right {
                if !left.contains_key(key) {
                    visitor.right_only(key, value);
                }
            }
        }
    }
}

/// Closure form of [`diff`], one callback per classification.
pub fn diff_with<'a, K, V, H, L, R, C, D>(
    left: Option<&'a HashMap<K, V, H>>,
    right: Option<&'a HashMap<K, V, H>>,
    on_left_only: L,
    on_right_only: R,
    on_common: C,
    on_differing: D,
) where
    K: Eq + Hash,
    V: PartialEq,
    H: BuildHasher,
    L: FnMut(&'a K, &'a V),
    R: FnMut(&'a K, &'a V),
    C: FnMut(&'a K, &'a V),
    D: FnMut(&'a K, &'a V, &'a V),
{
    let mut visitor = Callbacks {
        on_left_only,
        on_right_only,
        on_common,
        on_differing,
    };
    diff(left, right, &mut visitor);
}

struct Callbacks<L, R, C, D> {
    on_left_only: L,
    on_right_only: R,
    on_common: C,
    on_differing: D,
}

impl<'a, K: 'a, V: 'a, L, R, C, D> DiffVisitor<'a, K, V> for Callbacks<L, R, C, D>
where
    L: FnMut(&'a K, &'a V),
    R: FnMut(&'a K, &'a V),
    C: FnMut(&'a K, &'a V),
    D: FnMut(&'a K, &'a V, &'a V),
{
    fn left_only(&mut self, key: &'a K, value: &'a V) {
        (self.on_left_only)(key, value)
    }

    fn right_only(&mut self, key: &'a K, value: &'a V) {
        (self.on_right_only)(key, value)
    }

    fn common(&mut self, key: &'a K, value: &'a V) {
        (self.on_common)(key, value)
    }

    fn differing(&mut self, key: &'a K, left: &'a V, right: &'a V) {
        (self.on_differing)(key, left, right)
    }
}

/// Collected difference between two maps.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDifference<'a, K, V> {
    pub left_only: Vec<(&'a K, &'a V)>,
    pub right_only: Vec<(&'a K, &'a V)>,
    pub common: Vec<(&'a K, &'a V)>,
    pub differing: Vec<(&'a K, &'a V, &'a V)>,
}

impl<'a, K, V> MapDifference<'a, K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    /// Compute the difference between `left` and `right`.
    pub fn of<H: BuildHasher>(
        left: Option<&'a HashMap<K, V, H>>,
        right: Option<&'a HashMap<K, V, H>>,
    ) -> Self {
        let mut difference = Self {
            left_only: Vec::new(),
            right_only: Vec::new(),
            common: Vec::new(),
            differing: Vec::new(),
        };
        diff(left, right, &mut difference);
        difference
    }

    /// Whether the maps hold the same keys with equal values.
    pub fn are_equal(&self) -> bool {
        self.left_only.is_empty() && self.right_only.is_empty() && self.differing.is_empty()
    }
}

impl<'a, K, V> DiffVisitor<'a, K, V> for MapDifference<'a, K, V> {
    fn left_only(&mut self, key: &'a K, value: &'a V) {
        self.left_only.push((key, value));
    }

    fn right_only(&mut self, key: &'a K, value: &'a V) {
        self.right_only.push((key, value));
    }

    fn common(&mut self, key: &'a K, value: &'a V) {
        self.common.push((key, value));
    }

    fn differing(&mut self, key: &'a K, left: &'a V, right: &'a V) {
        self.differing.push((key, left, right));
    }
}
