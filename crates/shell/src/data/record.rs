//! A compact binary encoding of the non-redundant form.

use std::path::Path;

use nichespace::DistancePairs;

/// Labels and condensed distances, encoded with `bitcode`.
#[derive(bitcode::Encode, bitcode::Decode, Debug, Clone, PartialEq)]
pub struct PairsRecord {
    /// The name of the metric the distances were computed with.
    pub metric: String,
    /// The labels of the observations, in row order.
    pub labels: Vec<String>,
    /// The distances in condensed order.
    pub distances: Vec<f64>,
}

impl PairsRecord {
    /// Creates a record from the non-redundant form.
    pub fn new(metric: &str, pairs: DistancePairs<String>) -> Self {
        let labels = pairs.labels().as_slice().to_vec();
        Self {
            metric: metric.to_string(),
            labels,
            distances: pairs.into_vec(),
        }
    }

    /// Rebuilds the non-redundant form.
    pub fn into_pairs(self) -> Result<DistancePairs<String>, String> {
        DistancePairs::from_condensed(self.labels, self.distances).map_err(|e| e.to_string())
    }

    /// Saves the record to the specified path using bitcode.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let contents = bitcode::encode(self);
        std::fs::write(path, contents).map_err(|e| e.to_string())
    }

    /// Reads a record from the specified path using bitcode.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = std::fs::read(path).map_err(|e| e.to_string())?;
        bitcode::decode(&contents).map_err(|e| e.to_string())
    }
}
