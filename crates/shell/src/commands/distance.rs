//! The `distance` subcommand.

use std::path::{Path, PathBuf};

use distances::Number;
use ndarray::{Array2, ArrayView1};
use nichespace::{compute, group_any, Observations, Pairwise};

use crate::{
    data::{
        npy::{self, NpyType, ShellData},
        text, Format, PairsRecord,
    },
    metrics::ShellMetric,
};

/// Arguments of the `distance` subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct DistanceArgs {
    /// The path to the `.npy` file of observations by features.
    #[arg(short('i'), long)]
    pub inp_path: PathBuf,

    /// The path to a file with one label per observation, one per line.
    /// Observations are labelled by their row numbers if omitted.
    #[arg(short('l'), long)]
    pub labels: Option<PathBuf>,

    /// The path to a `label<TAB>group` file. If given, observations are
    /// collapsed into one presence row per group before computing distances.
    #[arg(short('g'), long)]
    pub groups: Option<PathBuf>,

    /// The name of the metric to use.
    #[arg(short('m'), long, default_value = "jaccard")]
    pub metric: ShellMetric,

    /// The order of the Minkowski metric. It may be fractional, e.g. 1.5.
    #[arg(long)]
    pub p: Option<f64>,

    /// The number of worker threads. Values <= 0 use all compute units.
    #[arg(short('j'), long, default_value_t = -1, allow_negative_numbers = true)]
    pub n_jobs: i32,

    /// Whether to output the full square matrix instead of the distances
    /// between distinct pairs.
    #[arg(short('r'), long, default_value_t = false)]
    pub redundant: bool,

    /// The path to the output file: `.npy`, `.tsv` or `.bin`.
    #[arg(short('o'), long)]
    pub out_path: PathBuf,
}

/// Computes pairwise distances and writes them to the output file.
pub fn run(args: &DistanceArgs) -> Result<(), String> {
    let format = Format::from_path(&args.out_path)?;

    let data = NpyType::read(&args.inp_path)?;
    let (car, dim) = data.dim();
    ftlog::info!(
        "Read {car}x{dim} {} features from {:?}.",
        data.type_name(),
        args.inp_path
    );

    let labels = match &args.labels {
        Some(path) => text::read_labels(path)?,
        None => (0..car).map(|i| i.to_string()).collect(),
    };

    match data {
        ShellData::Bool(features) => distances_of(&features, labels, args, format),
        ShellData::F32(features) => distances_of(&features, labels, args, format),
        ShellData::F64(features) => distances_of(&features, labels, args, format),
        ShellData::I8(features) => distances_of(&features, labels, args, format),
        ShellData::I16(features) => distances_of(&features, labels, args, format),
        ShellData::I32(features) => distances_of(&features, labels, args, format),
        ShellData::I64(features) => distances_of(&features, labels, args, format),
        ShellData::U8(features) => distances_of(&features, labels, args, format),
        ShellData::U16(features) => distances_of(&features, labels, args, format),
        ShellData::U32(features) => distances_of(&features, labels, args, format),
        ShellData::U64(features) => distances_of(&features, labels, args, format),
    }
}

/// Labels the features, applies any grouping and computes the distances.
fn distances_of<T: Number>(
    features: &Array2<T>,
    labels: Vec<String>,
    args: &DistanceArgs,
    format: Format,
) -> Result<(), String> {
    let data = Observations::from_array_labelled(features, labels).map_err(|e| e.to_string())?;

    if let Some(path) = &args.groups {
        let assignments = text::read_groups(path)?;
        let grouped = group_any(&data, &assignments).map_err(|e| e.to_string())?;
        ftlog::info!(
            "Collapsed {} observations into {} groups.",
            data.cardinality(),
            grouped.cardinality()
        );
        compute_and_write(&grouped, args, format)
    } else {
        compute_and_write(&data, args, format)
    }
}

/// Computes the distances and writes them in the requested format.
fn compute_and_write<T: Number>(data: &Observations<T, String>, args: &DistanceArgs, format: Format) -> Result<(), String> {
    let metric = args.metric.metric::<T>(args.p)?;

    let redundant = if args.redundant && format == Format::Bin {
        ftlog::warn!("The binary format stores only the distances between distinct pairs.");
        false
    } else {
        args.redundant
    };

    let result = compute(data, &metric, args.n_jobs, redundant).map_err(|e| e.to_string())?;
    ftlog::info!("Writing {} distances to {:?}...", metric.name(), args.out_path);
    write(result, metric.name(), &args.out_path, format)
}

/// Writes the distances to `path`.
///
/// `.npy` outputs get their labels written beside them, in `<stem>.labels.txt`.
fn write(result: Pairwise<String>, metric: &str, path: &Path, format: Format) -> Result<(), String> {
    match (format, result) {
        (Format::Npy, Pairwise::Redundant(matrix)) => {
            npy::write_distances(path, &matrix.as_array())?;
            text::write_labels(labels_path(path), matrix.labels().as_slice())
        }
        (Format::Npy, Pairwise::NonRedundant(pairs)) => {
            npy::write_distances(path, &ArrayView1::from(pairs.as_slice()))?;
            text::write_labels(labels_path(path), pairs.labels().as_slice())
        }
        (Format::Tsv, Pairwise::Redundant(matrix)) => text::write_matrix(path, &matrix),
        (Format::Tsv, Pairwise::NonRedundant(pairs)) => text::write_pairs(path, &pairs),
        (Format::Bin, result) => PairsRecord::new(metric, result.into_pairs()).write_to(path),
    }
}

/// The path of the labels written beside a `.npy` output.
pub fn labels_path(path: &Path) -> PathBuf {
    path.with_extension("labels.txt")
}
