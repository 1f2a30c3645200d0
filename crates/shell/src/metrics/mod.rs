//! Metrics available in the CLI.

use nichespace::Metric;

/// The names of the metrics available in the CLI.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMetric {
    #[clap(name = "braycurtis")]
    BrayCurtis,
    #[clap(name = "canberra")]
    Canberra,
    #[clap(name = "chebyshev")]
    Chebyshev,
    #[clap(name = "cosine")]
    Cosine,
    #[clap(name = "dice")]
    Dice,
    #[clap(name = "euclidean")]
    Euclidean,
    #[clap(name = "hamming")]
    Hamming,
    #[clap(name = "jaccard")]
    Jaccard,
    #[clap(name = "manhattan", alias = "cityblock")]
    Manhattan,
    #[clap(name = "minkowski")]
    Minkowski,
    #[clap(name = "sqeuclidean")]
    SqEuclidean,
}

impl ShellMetric {
    /// The name under which the library parses the metric.
    const fn name(self) -> &'static str {
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
            Self::Minkowski => "minkowski",
            Self::SqEuclidean => "sqeuclidean",
        }
    }

    /// Get the `Metric` for the distance function.
    ///
    /// The order `p` is only used by `minkowski`.
    pub fn metric<T>(self, p: Option<f64>) -> Result<Metric<T>, String> {
        if p.is_some() && self != Self::Minkowski {
            ftlog::warn!("Ignoring the order p for the {} metric.", self.name());
        }
        Metric::parse(self.name(), p).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::ShellMetric;

    #[test]
    fn every_metric_parses() {
        for &metric in ShellMetric::value_variants() {
            let parsed = metric.metric::<f32>(None).unwrap_or_else(|e| unreachable!("{e}"));
            assert_eq!(parsed.name(), metric.name());
        }
        assert!(ShellMetric::Minkowski.metric::<f32>(Some(0.0)).is_err());
        assert!(ShellMetric::Minkowski.metric::<f32>(Some(1.5)).is_ok());
    }
}
