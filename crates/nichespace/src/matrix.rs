//! The redundant form of pairwise distances.

use std::{hash::Hash, sync::Arc};

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::{
    labels::Labels,
    pairs::{num_pairs, DistancePairs},
    PairwiseError, Result,
};

/// A square matrix of distances between observations.
///
/// Entry `(i, j)` is the distance between the observations at rows `i` and
/// `j`. Matrices computed by this crate are exactly symmetric.
#[derive(Debug, Clone)]
pub struct DistanceMatrix<L> {
    /// The labels of the observations.
    labels: Arc<Labels<L>>,
    /// The `n x n` distances.
    distances: Array2<f64>,
}

impl<L> DistanceMatrix<L> {
    /// Wraps distances computed for the given labels.
    pub(crate) fn new(labels: Arc<Labels<L>>, distances: Array2<f64>) -> Self {
        debug_assert_eq!(distances.dim(), (labels.len(), labels.len()));
        Self { labels, distances }
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

    /// The distances as an `n x n` array.
    #[must_use]
    pub fn as_array(&self) -> ArrayView2<f64> {
        self.distances.view()
    }

    /// Consumes the struct, returning the `n x n` array of distances.
    #[must_use]
    pub fn into_array(self) -> Array2<f64> {
        self.distances
    }

    /// The distance between the observations at rows `i` and `j`.
    #[must_use]
    pub fn get_by_index(&self, i: usize, j: usize) -> Option<f64> {
        self.distances.get([i, j]).copied()
    }

    /// The distances from the observation at row `i` to every observation.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<ArrayView1<f64>> {
        (i < self.cardinality()).then(|| self.distances.row(i))
    }

    /// Whether `d(i, j)` and `d(j, i)` are bit-identical for all `i` and `j`.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let n = self.cardinality();
        (0..n).all(|i| ((i + 1)..n).all(|j| self.distances[[i, j]].to_bits() == self.distances[[j, i]].to_bits()))
    }

    /// Whether every diagonal entry is within `tolerance` of zero.
    #[must_use]
    pub fn has_zero_diagonal(&self, tolerance: f64) -> bool {
        self.distances.diag().iter().all(|d| d.abs() <= tolerance)
    }

    /// Extracts the non-redundant form from the strict upper triangle.
    ///
    /// The lower triangle and the diagonal are not read, so no symmetry is
    /// checked here.
    #[must_use]
    pub fn to_pairs(&self) -> DistancePairs<L> {
        let n = self.cardinality();
        let mut distances = Vec::with_capacity(num_pairs(n));
        for (i, row) in self.distances.outer_iter().enumerate() {
            distances.extend(row.iter().skip(i + 1));
        }
        DistancePairs::new(Arc::clone(&self.labels), distances)
    }
}

impl<L: Eq + Hash + Clone> DistanceMatrix<L> {
    /// Creates the redundant form from labels and a square array.
    ///
    /// # Errors
    ///
    /// * If the array is not square.
    /// * If the number of labels differs from the number of rows.
    /// * If any label appears more than once.
    pub fn from_array(labels: Vec<L>, distances: Array2<f64>) -> Result<Self> {
        let (rows, cols) = distances.dim();
        if rows != cols {
            return Err(PairwiseError::Shape(format!("Distance matrix must be square, got {rows}x{cols}.")));
        }
        if labels.len() != rows {
            return Err(PairwiseError::Shape(format!(
                "Got {} labels for a {rows}x{rows} distance matrix.",
                labels.len()
            )));
        }
        Ok(Self::new(Arc::new(Labels::new(labels)?), distances))
    }

    /// The distance between the observations with labels `a` and `b`.
    pub fn get(&self, a: &L, b: &L) -> Option<f64> {
        let (i, j) = self.labels.positions_of(a, b).ok()?;
        self.get_by_index(i, j)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn upper_triangle() -> Result<()> {
        let distances = array![[0.0, 1.0, 2.0], [1.0, 0.0, 3.0], [2.0, 3.0, 0.0]];
        let matrix = DistanceMatrix::from_array(vec!["a", "b", "c"], distances.clone())?;

        assert!(matrix.is_symmetric());
        assert!(matrix.has_zero_diagonal(0.0));
        assert_eq!(matrix.to_pairs().as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(matrix.get(&"c", &"b"), Some(3.0));
        assert_eq!(matrix.get(&"c", &"d"), None);
        assert_eq!(matrix.to_pairs().to_matrix().into_array(), distances);
        Ok(())
    }

    #[test]
    fn asymmetric() -> Result<()> {
        let matrix = DistanceMatrix::from_array(vec![0, 1], array![[0.5, 1.0], [2.0, 0.0]])?;
        assert!(!matrix.is_symmetric());
        assert!(!matrix.has_zero_diagonal(0.1));
        assert!(matrix.has_zero_diagonal(0.5));
        Ok(())
    }

    #[test]
    fn not_square() {
        let result = DistanceMatrix::from_array(vec![0, 1], Array2::zeros((2, 3)));
        assert!(matches!(result, Err(PairwiseError::Shape(_))));
    }
}
