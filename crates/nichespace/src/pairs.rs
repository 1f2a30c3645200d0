//! The non-redundant form of pairwise distances.

use std::{hash::Hash, sync::Arc};

use ndarray::Array2;

use crate::{
    labels::{Labels, UnorderedPair},
    matrix::DistanceMatrix,
    PairwiseError, Result,
};

/// The position of the pair `(i, j)`, with `i < j < n`, in a condensed vector
/// of the strict upper triangle of an `n x n` matrix.
///
/// # Examples
///
/// ```
/// use nichespace::condensed_index;
///
/// assert_eq!(condensed_index(4, 0, 1), 0);
/// assert_eq!(condensed_index(4, 0, 3), 2);
/// assert_eq!(condensed_index(4, 1, 2), 3);
/// assert_eq!(condensed_index(4, 2, 3), 5);
/// ```
///
/// # Panics
///
/// * If `i < j < n` does not hold. Use [`DistancePairs::condensed_index`]
///   for a lookup that accepts either order and checks the bounds.
#[must_use]
pub const fn condensed_index(n: usize, i: usize, j: usize) -> usize {
    assert!(i < j && j < n, "condensed_index needs i < j < n");
    row_offset(n, i) + (j - i - 1)
}

/// The position of the first pair of row `i` in a condensed vector.
const fn row_offset(n: usize, i: usize) -> usize {
    n * i - i * (i + 1) / 2
}

/// The number of unordered pairs of distinct items among `n` items.
#[must_use]
pub const fn num_pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Distances between every unordered pair of distinct observations.
///
/// The distances are stored in a condensed vector in row-major order of the
/// strict upper triangle, i.e. `(0, 1), (0, 2), ..., (0, n-1), (1, 2), ...`.
/// Each pair is keyed by the labels of its observations, in either order.
#[derive(Debug, Clone)]
pub struct DistancePairs<L> {
    /// The labels of the observations.
    labels: Arc<Labels<L>>,
    /// The condensed distances.
    distances: Vec<f64>,
}

impl<L> DistancePairs<L> {
    /// Wraps distances computed for the given labels.
    pub(crate) fn new(labels: Arc<Labels<L>>, distances: Vec<f64>) -> Self {
        debug_assert_eq!(distances.len(), num_pairs(labels.len()));
        Self { labels, distances }
    }

    /// The number of pairs, i.e. `n * (n - 1) / 2`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// The number of observations.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.labels.len()
    }

    /// The labels of the observations.
    #[must_use]
    pub fn labels(&self) -> &Labels<L> {
        &self.labels
    }

    /// The condensed distances.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.distances
    }

    /// Consumes the struct, returning the condensed distances.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.distances
    }

    /// The position of the pair of rows `i` and `j`, in either order, in the
    /// condensed vector. Returns `None` if `i == j` or either is out of bounds.
    #[must_use]
    pub fn condensed_index(&self, i: usize, j: usize) -> Option<usize> {
        let n = self.cardinality();
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        (i != j && j < n).then(|| condensed_index(n, i, j))
    }

    /// The rows `(i, j)`, with `i < j`, of the pair at position `k`.
    #[must_use]
    pub fn pair_at(&self, k: usize) -> Option<(usize, usize)> {
        if k >= self.len() {
            return None;
        }
        let n = self.cardinality();

        // Invariant: `row_offset(lo) <= k < row_offset(hi)`.
        let (mut lo, mut hi) = (0, n - 1);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if row_offset(n, mid) <= k {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Some((lo, k - row_offset(n, lo) + lo + 1))
    }

    /// The distance between the observations at rows `i` and `j`.
    ///
    /// Returns `None` if `i == j` or either is out of bounds.
    #[must_use]
    pub fn get_by_index(&self, i: usize, j: usize) -> Option<f64> {
        self.condensed_index(i, j).map(|k| self.distances[k])
    }

    /// Iterates over the pairs and their distances in condensed order.
    pub fn iter(&self) -> impl Iterator<Item = (UnorderedPair<&L>, f64)> + '_ {
        let labels = self.labels.as_slice();
        let n = labels.len();
        (0..n)
            .flat_map(move |i| ((i + 1)..n).map(move |j| UnorderedPair::new(&labels[i], &labels[j])))
            .zip(self.distances.iter().copied())
    }

    /// Materializes the redundant form, with a zero diagonal.
    #[must_use]
    pub fn to_matrix(&self) -> DistanceMatrix<L> {
        let n = self.cardinality();
        let mut matrix = Array2::zeros((n, n));
        let mut k = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                matrix[[i, j]] = self.distances[k];
                matrix[[j, i]] = self.distances[k];
                k += 1;
            }
        }
        DistanceMatrix::new(Arc::clone(&self.labels), matrix)
    }
}

impl<L: Eq + Hash + Clone> DistancePairs<L> {
    /// Creates the non-redundant form from labels and condensed distances.
    ///
    /// # Errors
    ///
    /// * If there are fewer than 2 labels.
    /// * If the number of distances is not `n * (n - 1) / 2`.
    /// * If any label appears more than once.
    pub fn from_condensed(labels: Vec<L>, distances: Vec<f64>) -> Result<Self> {
        let n = labels.len();
        if n < 2 {
            return Err(PairwiseError::Shape(format!("Need at least 2 observations, got {n}.")));
        }
        if distances.len() != num_pairs(n) {
            return Err(PairwiseError::Shape(format!(
                "Expected {} distances for {n} observations, got {}.",
                num_pairs(n),
                distances.len()
            )));
        }
        Ok(Self::new(Arc::new(Labels::new(labels)?), distances))
    }

    /// The distance between the observations with labels `a` and `b`, in
    /// either order.
    ///
    /// Returns `None` if `a == b` or either label is unknown.
    pub fn get(&self, a: &L, b: &L) -> Option<f64> {
        let (i, j) = self.labels.positions_of(a, b).ok()?;
        self.get_by_index(i, j)
    }

    /// The distance for the given pair of labels.
    pub fn get_pair(&self, pair: &UnorderedPair<L>) -> Option<f64> {
        self.get(pair.first(), pair.second())
    }
}
