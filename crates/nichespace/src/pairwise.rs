//! The pairwise distance calculator.

use distances::Number;
use ndarray::{Array2, Axis};

use crate::{
    jobs::Jobs,
    matrix::DistanceMatrix,
    metric::Metric,
    observations::Observations,
    pairs::{num_pairs, DistancePairs},
    PairwiseError, Result,
};

/// Pairwise distances in either of their two forms.
#[derive(Debug, Clone)]
pub enum Pairwise<L> {
    /// The full, symmetric `n x n` matrix.
    Redundant(DistanceMatrix<L>),
    /// The `n * (n - 1) / 2` distances between distinct observations.
    NonRedundant(DistancePairs<L>),
}

impl<L> Pairwise<L> {
    /// Whether this is the redundant form.
    #[must_use]
    pub const fn is_redundant(&self) -> bool {
        matches!(self, Self::Redundant(_))
    }

    /// The number of observations.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        match self {
            Self::Redundant(m) => m.cardinality(),
            Self::NonRedundant(p) => p.cardinality(),
        }
    }

    /// The distance between the observations at rows `i` and `j`.
    ///
    /// In the non-redundant form there is no entry for `i == j`.
    #[must_use]
    pub fn get_by_index(&self, i: usize, j: usize) -> Option<f64> {
        match self {
            Self::Redundant(m) => m.get_by_index(i, j),
            Self::NonRedundant(p) => p.get_by_index(i, j),
        }
    }

    /// Converts to the redundant form.
    #[must_use]
    pub fn into_matrix(self) -> DistanceMatrix<L> {
        match self {
            Self::Redundant(m) => m,
            Self::NonRedundant(p) => p.to_matrix(),
        }
    }

    /// Converts to the non-redundant form.
    #[must_use]
    pub fn into_pairs(self) -> DistancePairs<L> {
        match self {
            Self::Redundant(m) => m.to_pairs(),
            Self::NonRedundant(p) => p,
        }
    }
}

impl<L: Eq + std::hash::Hash + Clone> Pairwise<L> {
    /// The distance between the observations with labels `a` and `b`.
    pub fn get(&self, a: &L, b: &L) -> Option<f64> {
        match self {
            Self::Redundant(m) => m.get(a, b),
            Self::NonRedundant(p) => p.get(a, b),
        }
    }
}

/// Computes the distances between every pair of observations.
///
/// Each of the `n * (n - 1) / 2` distances between distinct observations is
/// computed exactly once. The result does not depend on `n_jobs`.
///
/// # Arguments
///
/// * `data`: The observations.
/// * `metric`: The distance metric.
/// * `n_jobs`: The number of worker threads. Values `<= 0` use all available
///   compute units and `1` runs sequentially.
/// * `redundant_form`: Whether to return the full `n x n` matrix instead of
///   the non-redundant pairs.
///
/// # Errors
///
/// * `InvalidMetric` if the parameters of the metric are malformed.
/// * `Shape` if there are fewer than 2 observations.
/// * `Resource` if `n_jobs` cannot be satisfied.
///
/// # Examples
///
/// ```
/// use nichespace::{compute, Metric, Observations, UnorderedPair};
///
/// let data = Observations::from_rows(vec![vec![1, 0, 1], vec![1, 1, 0], vec![0, 0, 1]]).unwrap();
/// let pairs = compute(&data, &Metric::Jaccard, 1, false).unwrap().into_pairs();
///
/// assert_eq!(pairs.len(), 3);
/// assert!((pairs.get(&1, &0).unwrap() - 2.0 / 3.0).abs() < 1e-12);
/// assert!((pairs.get_pair(&UnorderedPair::new(0, 2)).unwrap() - 0.5).abs() < 1e-12);
/// assert!((pairs.get(&1, &2).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn compute<T: Number, L>(
    data: &Observations<T, L>,
    metric: &Metric<T>,
    n_jobs: i32,
    redundant_form: bool,
) -> Result<Pairwise<L>> {
    if redundant_form {
        square_form(data, metric, n_jobs).map(Pairwise::Redundant)
    } else {
        non_redundant(data, metric, n_jobs).map(Pairwise::NonRedundant)
    }
}

/// Computes the full, symmetric `n x n` distance matrix.
///
/// The rows of the upper triangle are filled in parallel and then mirrored
/// into the lower triangle. The diagonal is zero for metrics with the identity
/// property and is computed otherwise.
///
/// # Errors
///
/// See [`compute`].
pub fn square_form<T: Number, L>(data: &Observations<T, L>, metric: &Metric<T>, n_jobs: i32) -> Result<DistanceMatrix<L>> {
    let jobs = check_inputs(data, metric, n_jobs)?;
    let rows = data.iter().collect::<Vec<_>>();
    let n = rows.len();
    let identity = metric.has_identity();

    ftlog::info!(
        "Computing {n}x{n} {} distance matrix on {} threads...",
        metric.name(),
        jobs.num_threads()
    );

    let mut distances = Array2::<f64>::zeros((n, n));
    let upper = distances.axis_iter_mut(Axis(0)).enumerate().collect::<Vec<_>>();
    jobs.for_each(upper, |(i, mut row)| {
        let x = rows[i];
        if !identity {
            row[i] = metric.distance(x, x);
        }
        for j in (i + 1)..n {
            row[j] = metric.distance(x, rows[j]);
        }
    })?;

    for i in 0..n {
        for j in (i + 1)..n {
            distances[[j, i]] = distances[[i, j]];
        }
    }
    ftlog::debug!("Mirrored the upper triangle of the {} distance matrix.", metric.name());

    Ok(DistanceMatrix::new(data.shared_labels(), distances))
}

/// Computes the `n * (n - 1) / 2` distances between distinct observations.
///
/// The condensed vector is split into one disjoint segment per row of the
/// upper triangle and the segments are filled in parallel. The square matrix
/// is never materialized.
///
/// # Errors
///
/// See [`compute`].
pub fn non_redundant<T: Number, L>(data: &Observations<T, L>, metric: &Metric<T>, n_jobs: i32) -> Result<DistancePairs<L>> {
    let jobs = check_inputs(data, metric, n_jobs)?;
    let rows = data.iter().collect::<Vec<_>>();
    let n = rows.len();

    ftlog::info!(
        "Computing {} non-redundant {} distances on {} threads...",
        num_pairs(n),
        metric.name(),
        jobs.num_threads()
    );

    let mut distances = vec![0.0; num_pairs(n)];

    let mut segments = Vec::with_capacity(n - 1);
    let mut rest = distances.as_mut_slice();
    for i in 0..(n - 1) {
        let (segment, tail) = core::mem::take(&mut rest).split_at_mut(n - i - 1);
        segments.push((i, segment));
        rest = tail;
    }

    jobs.for_each(segments, |(i, segment)| {
        let x = rows[i];
        for (d, &y) in segment.iter_mut().zip(&rows[(i + 1)..]) {
            *d = metric.distance(x, y);
        }
    })?;
    ftlog::debug!("Filled {} condensed {} distances.", distances.len(), metric.name());

    Ok(DistancePairs::new(data.shared_labels(), distances))
}

/// Validates the inputs and resolves the parallelism.
fn check_inputs<T, L>(data: &Observations<T, L>, metric: &Metric<T>, n_jobs: i32) -> Result<Jobs> {
    metric.validate()?;
    let n = data.cardinality();
    if n < 2 {
        return Err(PairwiseError::Shape(format!(
            "Pairwise distances need at least 2 observations, got {n}."
        )));
    }
    Jobs::resolve(n_jobs)
}
