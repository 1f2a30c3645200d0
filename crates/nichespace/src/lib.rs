#![doc = include_str!("../README.md")]

mod error;
mod grouping;
mod jobs;
mod labels;
mod matrix;
mod metric;
mod neighbors;
mod observations;
mod pairs;
mod pairwise;
mod sized_heap;

pub use error::{PairwiseError, Result};
pub use grouping::group_any;
pub use jobs::Jobs;
pub use labels::{Labels, UnorderedPair};
pub use matrix::DistanceMatrix;
pub use metric::{CustomMetric, DistanceFn, Metric};
pub use neighbors::DistanceLookup;
pub use observations::Observations;
pub use pairs::{condensed_index, num_pairs, DistancePairs};
pub use pairwise::{compute, non_redundant, square_form, Pairwise};
pub use sized_heap::SizedHeap;

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
