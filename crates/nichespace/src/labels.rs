//! Labels of observations and unordered pairs of labels.

use std::{
    collections::{hash_map::DefaultHasher, HashMap},
    hash::{Hash, Hasher},
};

use crate::{PairwiseError, Result};

/// The ordered, unique labels of a set of observations.
///
/// The position of a label is the row of its observation. Labels are shared,
/// through an `Arc`, by a set of observations and every distance result
/// computed from it.
#[derive(Debug, Clone)]
pub struct Labels<L> {
    /// The labels in row order.
    labels: Vec<L>,
    /// The row of each label.
    positions: HashMap<L, usize>,
}

impl Labels<usize> {
    /// Labels `n` observations by their 0-based positions.
    #[must_use]
    pub fn range(n: usize) -> Self {
        Self {
            labels: (0..n).collect(),
            positions: (0..n).map(|i| (i, i)).collect(),
        }
    }
}

impl<L: Eq + Hash + Clone> Labels<L> {
    /// Creates a new set of labels.
    ///
    /// # Errors
    ///
    /// * If any label appears more than once.
    pub fn new(labels: Vec<L>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if let Some(first) = positions.insert(label.clone(), i) {
                return Err(PairwiseError::Shape(format!(
                    "Duplicate label at rows {first} and {i}; labels must be unique."
                )));
            }
        }
        Ok(Self { labels, positions })
    }

    /// Returns the row of the given label, if it is present.
    pub fn position(&self, label: &L) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Returns the rows of both labels.
    ///
    /// # Errors
    ///
    /// * If either label is unknown.
    pub fn positions_of(&self, a: &L, b: &L) -> Result<(usize, usize)> {
        match (self.position(a), self.position(b)) {
            (Some(i), Some(j)) => Ok((i, j)),
            _ => Err(PairwiseError::Shape("Unknown label in lookup.".to_string())),
        }
    }
}

impl<L> Labels<L> {
    /// The number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label of the given row.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&L> {
        self.labels.get(index)
    }

    /// Returns the labels in row order.
    #[must_use]
    pub fn as_slice(&self) -> &[L] {
        &self.labels
    }

    /// Iterates over the labels in row order.
    pub fn iter(&self) -> impl Iterator<Item = &L> {
        self.labels.iter()
    }
}

/// An unordered pair `{a, b}` of labels.
///
/// `{a, b}` and `{b, a}` compare equal and hash identically, so either order
/// may be used to look up a distance.
#[derive(Debug, Clone, Copy)]
pub struct UnorderedPair<L> {
    /// The member from the earlier row.
    a: L,
    /// The member from the later row.
    b: L,
}

impl<L> UnorderedPair<L> {
    /// Creates a new pair.
    pub const fn new(a: L, b: L) -> Self {
        Self { a, b }
    }

    /// The member the pair was created with first.
    pub const fn first(&self) -> &L {
        &self.a
    }

    /// The member the pair was created with second.
    pub const fn second(&self) -> &L {
        &self.b
    }

    /// Consumes the pair, returning its members in creation order.
    pub fn into_inner(self) -> (L, L) {
        (self.a, self.b)
    }
}

impl<L: PartialEq> UnorderedPair<L> {
    /// Whether the pair contains the given label.
    pub fn contains(&self, label: &L) -> bool {
        &self.a == label || &self.b == label
    }

    /// Returns the member paired with the given label.
    pub fn other(&self, label: &L) -> Option<&L> {
        if &self.a == label {
            Some(&self.b)
        } else if &self.b == label {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl<L: Clone> UnorderedPair<&L> {
    /// Clones the members of a pair of references.
    #[must_use]
    pub fn cloned(&self) -> UnorderedPair<L> {
        UnorderedPair::new(self.a.clone(), self.b.clone())
    }
}

impl<L: PartialEq> PartialEq for UnorderedPair<L> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<L: Eq> Eq for UnorderedPair<L> {}

impl<L: Hash> Hash for UnorderedPair<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (x, y) = (hash_one(&self.a), hash_one(&self.b));
        state.write_u64(x.min(y));
        state.write_u64(x.max(y));
    }
}

impl<L: core::fmt::Display> core::fmt::Display for UnorderedPair<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{{{}, {}}}", self.a, self.b)
    }
}

/// Hashes a single value with a fixed-key hasher.
fn hash_one<L: Hash>(value: &L) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn pairs_are_unordered() {
        let ab = UnorderedPair::new("a", "b");
        let ba = UnorderedPair::new("b", "a");
        assert_eq!(ab, ba);
        assert_eq!(hash_one(&ab), hash_one(&ba));

        let set = [ab, ba, UnorderedPair::new("a", "c")].into_iter().collect::<HashSet<_>>();
        assert_eq!(set.len(), 2);

        assert_eq!(ab.other(&"a"), Some(&"b"));
        assert_eq!(ab.other(&"c"), None);
        assert_eq!(ab.to_string(), "{a, b}");
    }

    #[test]
    fn duplicate_labels() {
        let labels = Labels::new(vec!["x", "y", "x"]);
        assert!(matches!(labels, Err(PairwiseError::Shape(_))));

        let labels = Labels::new(vec!["x", "y", "z"]).unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(labels.position(&"z"), Some(2));
        assert_eq!(labels.positions_of(&"y", &"x"), Ok((1, 0)));
        assert!(labels.positions_of(&"y", &"w").is_err());
    }
}
