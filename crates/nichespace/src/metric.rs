//! The distance metrics available for pairwise computations.

use std::sync::Arc;

use distances::Number;

use crate::{PairwiseError, Result};

/// The signature of a user-supplied distance function.
pub type DistanceFn<T> = dyn Fn(&[T], &[T]) -> f64 + Send + Sync;

/// A user-supplied distance function.
///
/// The function must return a non-negative value and should be symmetric.
/// Each unordered pair of observations is passed to it exactly once, with the
/// observation from the earlier row first, and the result is used for both
/// orders. The diagonal of a square distance matrix is computed by calling the
/// function on each observation with itself, unless the metric declares the
/// identity property with [`CustomMetric::with_identity`], in which case the
/// diagonal is zero.
#[derive(Clone)]
pub struct CustomMetric<T> {
    /// The name of the metric, used in logs.
    name: String,
    /// The distance function.
    function: Arc<DistanceFn<T>>,
    /// Whether `d(x, x) == 0` for all `x`.
    identity: bool,
}

impl<T> CustomMetric<T> {
    /// Creates a new custom metric without the identity property.
    pub fn new<F>(name: &str, function: F) -> Self
    where
        F: Fn(&[T], &[T]) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            function: Arc::new(function),
            identity: false,
        }
    }

    /// Declares that the distance from any observation to itself is zero.
    #[must_use]
    pub fn with_identity(mut self) -> Self {
        self.identity = true;
        self
    }

    /// The name of the metric.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> core::fmt::Debug for CustomMetric<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CustomMetric")
            .field("name", &self.name)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// A distance metric between two observations.
///
/// The built-in metrics follow the definitions of `scipy.spatial.distance`.
/// `Jaccard` and `Dice` treat every non-zero feature as present. All built-in
/// metrics are symmetric and give zero distance from an observation to itself.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Metric<T> {
    /// Sum of absolute differences over sum of absolute sums.
    BrayCurtis,
    /// Sum of absolute differences, each over the sum of absolute values.
    Canberra,
    /// Largest absolute difference.
    Chebyshev,
    /// One minus the cosine similarity.
    Cosine,
    /// Features present in exactly one observation over the sum of the
    /// numbers of present features.
    Dice,
    /// L2 norm of the difference.
    Euclidean,
    /// Fraction of features that differ.
    Hamming,
    /// One minus the size of the intersection over the size of the union of
    /// present features.
    Jaccard,
    /// L1 norm of the difference, also called city-block.
    Manhattan,
    /// Lp norm of the difference, with `p >= 1`. The order may be
    /// fractional or infinite.
    Minkowski {
        /// The order of the norm.
        p: f64,
    },
    /// Squared L2 norm of the difference.
    SqEuclidean,
    /// A user-supplied distance function.
    Custom(CustomMetric<T>),
}

impl<T> Metric<T> {
    /// Parses a metric name, with the Minkowski order given separately.
    ///
    /// Names are case-insensitive and accept the `scipy` spellings, e.g.
    /// `"cityblock"` and `"sqeuclidean"`. The order `p` is only used with
    /// `"minkowski"`, where it defaults to `2`.
    ///
    /// # Errors
    ///
    /// * If the name is not recognized.
    /// * If `p` is less than 1 or is NaN.
    pub fn parse(name: &str, p: Option<f64>) -> Result<Self> {
        let metric = match name.to_lowercase().as_str() {
            "braycurtis" | "bray_curtis" | "bray-curtis" => Self::BrayCurtis,
            "canberra" => Self::Canberra,
            "chebyshev" | "linf" => Self::Chebyshev,
            "cosine" => Self::Cosine,
            "dice" => Self::Dice,
            "euclidean" | "l2" => Self::Euclidean,
            "hamming" => Self::Hamming,
            "jaccard" => Self::Jaccard,
            "manhattan" | "cityblock" | "l1" => Self::Manhattan,
            "minkowski" => Self::Minkowski { p: p.unwrap_or(2.0) },
            "sqeuclidean" | "euclidean_sq" => Self::SqEuclidean,
            _ => return Err(PairwiseError::InvalidMetric(format!("Unknown metric: {name}"))),
        };
        metric.validate()?;
        Ok(metric)
    }

    /// Creates a metric from a user-supplied distance function.
    pub fn custom<F>(name: &str, function: F) -> Self
    where
        F: Fn(&[T], &[T]) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(CustomMetric::new(name, function))
    }

    /// Checks the parameters of the metric.
    ///
    /// # Errors
    ///
    /// * If the order of a Minkowski metric is less than 1 or is NaN.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Minkowski { p } if p.is_nan() || *p < 1.0 => Err(PairwiseError::InvalidMetric(format!(
                "Minkowski order must be at least 1, got {p}."
            ))),
            _ => Ok(()),
        }
    }

    /// The name of the metric.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BrayCurtis => "braycurtis",
            Self::Canberra => "canberra",
            Self::Chebyshev => "chebyshev",
            Self::Cosine => "cosine",
            Self::Dice => "dice",
            Self::Euclidean => "euclidean",
            Self::Hamming => "hamming",
            Self::Jaccard => "jaccard",
            Self::Manhattan => "manhattan",
            Self::Minkowski { .. } => "minkowski",
            Self::SqEuclidean => "sqeuclidean",
            Self::Custom(c) => c.name(),
        }
    }

    /// Whether the distance from any observation to itself is zero.
    ///
    /// This is used when computing the diagonal of a square distance matrix.
    #[must_use]
    pub const fn has_identity(&self) -> bool {
        match self {
            Self::Custom(c) => c.identity,
            _ => true,
        }
    }
}

impl<T: Number> Metric<T> {
    /// Computes the distance between two observations.
    pub fn distance(&self, x: &[T], y: &[T]) -> f64 {
        use distances::{sets, vectors};

        match self {
            Self::BrayCurtis => vectors::bray_curtis(x, y),
            Self::Canberra => vectors::canberra(x, y),
            Self::Chebyshev => vectors::chebyshev(x, y),
            Self::Cosine => vectors::cosine(x, y),
            Self::Dice => sets::dice(x, y),
            Self::Euclidean => vectors::euclidean(x, y),
            Self::Hamming => vectors::hamming(x, y),
            Self::Jaccard => sets::jaccard(x, y),
            Self::Manhattan => vectors::manhattan(x, y),
            Self::Minkowski { p } => vectors::minkowski(x, y, *p),
            Self::SqEuclidean => vectors::euclidean_sq(x, y),
            Self::Custom(c) => (c.function)(x, y),
        }
    }
}

impl<T> core::str::FromStr for Metric<T> {
    type Err = PairwiseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        for (name, expected) in [
            ("Jaccard", "jaccard"),
            ("cityblock", "manhattan"),
            ("L2", "euclidean"),
            ("sqeuclidean", "sqeuclidean"),
            ("braycurtis", "braycurtis"),
            ("minkowski", "minkowski"),
        ] {
            let metric = name.parse::<Metric<f64>>().unwrap_or_else(|e| unreachable!("{e}"));
            assert_eq!(metric.name(), expected);
        }
    }

    #[test]
    fn invalid_metrics() {
        assert!(matches!(
            "mahalanobis-ish".parse::<Metric<f64>>(),
            Err(PairwiseError::InvalidMetric(_))
        ));
        for p in [0.0, 0.5, -1.0, f64::NAN] {
            assert!(
                matches!(Metric::<f64>::parse("minkowski", Some(p)), Err(PairwiseError::InvalidMetric(_))),
                "p = {p}"
            );
        }
    }

    #[test]
    fn fractional_minkowski() {
        let metric = Metric::<f64>::parse("minkowski", Some(1.5)).unwrap_or_else(|e| unreachable!("{e}"));
        assert!(matches!(metric, Metric::Minkowski { p } if (p - 1.5).abs() <= f64::EPSILON));

        let d = metric.distance(&[0.0, 0.0], &[1.0, 1.0]);
        assert!((d - 2.0_f64.powf(1.0 / 1.5)).abs() <= 1e-12);

        let metric = Metric::<f64>::parse("minkowski", Some(f64::INFINITY)).unwrap_or_else(|e| unreachable!("{e}"));
        assert!((metric.distance(&[0.0, 3.0], &[1.0, 1.0]) - 2.0).abs() <= f64::EPSILON);
    }

    #[test]
    fn custom_identity() {
        let metric = Metric::custom("ones", |_: &[u8], _: &[u8]| 1.0);
        assert!(!metric.has_identity());
        assert!((metric.distance(&[1], &[1]) - 1.0).abs() <= f64::EPSILON);

        let metric = Metric::Custom(CustomMetric::new("zeros", |_: &[u8], _: &[u8]| 0.0).with_identity());
        assert!(metric.has_identity());
        assert_eq!(metric.name(), "zeros");
    }
}
