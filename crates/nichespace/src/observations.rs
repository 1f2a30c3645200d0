//! Observations, i.e. labelled rows of a feature matrix.

use std::{hash::Hash, sync::Arc};

use distances::Number;
use ndarray::Array2;

use crate::{labels::Labels, PairwiseError, Result};

/// A set of observations, e.g. genomes, by features, e.g. KEGG Orthologs.
///
/// The features are stored as a flat, row-major vector so that each
/// observation is a contiguous slice. The observations are shared read-only
/// by all workers of a distance computation.
///
/// # Type Parameters
///
/// - `T`: The type of the feature values.
/// - `L`: The type of the labels. Unlabelled observations use their
///   0-based positions, i.e. `usize`.
#[derive(Debug, Clone)]
pub struct Observations<T, L = usize> {
    /// The feature values, row-major.
    values: Vec<T>,
    /// The number of features of each observation.
    dimensionality: usize,
    /// The labels of the observations.
    labels: Arc<Labels<L>>,
}

impl<T: Number> Observations<T, usize> {
    /// Creates unlabelled observations from the rows of a 2d array.
    ///
    /// Observations are labelled by their 0-based row positions.
    #[must_use]
    pub fn from_array(data: &Array2<T>) -> Self {
        let (n, dimensionality) = data.dim();
        Self {
            values: data.iter().copied().collect(),
            dimensionality,
            labels: Arc::new(Labels::range(n)),
        }
    }

    /// Creates unlabelled observations from a vector of rows.
    ///
    /// # Errors
    ///
    /// * If the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        let (values, dimensionality) = flatten(rows)?;
        Ok(Self {
            values,
            dimensionality,
            labels: Arc::new(Labels::range(n)),
        })
    }
}

impl<T: Number, L: Eq + Hash + Clone> Observations<T, L> {
    /// Creates labelled observations from the rows of a 2d array.
    ///
    /// # Errors
    ///
    /// * If the number of labels differs from the number of rows.
    /// * If any label appears more than once.
    pub fn from_array_labelled(data: &Array2<T>, labels: Vec<L>) -> Result<Self> {
        let (n, dimensionality) = data.dim();
        Self::new(data.iter().copied().collect(), dimensionality, n, labels)
    }

    /// Creates labelled observations from a vector of rows.
    ///
    /// # Errors
    ///
    /// * If the rows do not all have the same length.
    /// * If the number of labels differs from the number of rows.
    /// * If any label appears more than once.
    pub fn from_rows_labelled(rows: Vec<Vec<T>>, labels: Vec<L>) -> Result<Self> {
        let n = rows.len();
        let (values, dimensionality) = flatten(rows)?;
        Self::new(values, dimensionality, n, labels)
    }

    /// Checks the labels against the number of rows and builds the struct.
    fn new(values: Vec<T>, dimensionality: usize, n: usize, labels: Vec<L>) -> Result<Self> {
        if labels.len() != n {
            return Err(PairwiseError::Shape(format!(
                "Got {} labels for {n} observations.",
                labels.len()
            )));
        }
        Ok(Self {
            values,
            dimensionality,
            labels: Arc::new(Labels::new(labels)?),
        })
    }

    /// Returns the observation with the given label.
    pub fn get_labelled(&self, label: &L) -> Option<&[T]> {
        self.labels.position(label).map(|i| self.get(i))
    }
}

impl<T, L> Observations<T, L> {
    /// The number of observations.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.labels.len()
    }

    /// The number of features of each observation.
    #[must_use]
    pub const fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// Returns the features of the observation at the given row.
    ///
    /// # Panics
    ///
    /// * If `index` is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> &[T] {
        &self.values[index * self.dimensionality..(index + 1) * self.dimensionality]
    }

    /// Iterates over the observations in row order.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        (0..self.cardinality()).map(|i| self.get(i))
    }

    /// The labels of the observations.
    #[must_use]
    pub fn labels(&self) -> &Labels<L> {
        &self.labels
    }

    /// A shared handle to the labels of the observations.
    pub(crate) fn shared_labels(&self) -> Arc<Labels<L>> {
        Arc::clone(&self.labels)
    }
}

impl<T: Clone, L> Observations<T, L> {
    /// Copies the observations into a 2d array.
    ///
    /// # Errors
    ///
    /// * If the array cannot be shaped from the values.
    pub fn to_array(&self) -> Result<Array2<T>> {
        Array2::from_shape_vec((self.cardinality(), self.dimensionality), self.values.clone())
            .map_err(|e| PairwiseError::Shape(e.to_string()))
    }
}

/// Flattens rows into a row-major vector, checking that they have equal lengths.
fn flatten<T>(rows: Vec<Vec<T>>) -> Result<(Vec<T>, usize)> {
    let dimensionality = rows.first().map_or(0, Vec::len);
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != dimensionality) {
        return Err(PairwiseError::Shape(format!(
            "Row {i} has {} features but row 0 has {dimensionality}.",
            row.len()
        )));
    }
    Ok((rows.into_iter().flatten().collect(), dimensionality))
}
