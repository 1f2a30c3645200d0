//! The commands under the `nichespace` CLI.

pub mod distance;
pub mod neighbors;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute pairwise distances between observations.
    Distance(distance::DistanceArgs),
    /// Find the k nearest neighbors of every observation from stored distances.
    Neighbors(neighbors::NeighborsArgs),
}
