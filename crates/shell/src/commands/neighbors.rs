//! The `neighbors` subcommand.

use std::path::PathBuf;

use nichespace::DistanceLookup;

use crate::data::{text, PairsRecord};

/// Arguments of the `neighbors` subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct NeighborsArgs {
    /// The path to a `.bin` file written by the `distance` subcommand.
    #[arg(short('i'), long)]
    pub inp_path: PathBuf,

    /// The number of neighbors of each observation.
    #[arg(short('k'), long, default_value_t = 10)]
    pub k: usize,

    /// The number of worker threads. Values <= 0 use all compute units.
    #[arg(short('j'), long, default_value_t = -1, allow_negative_numbers = true)]
    pub n_jobs: i32,

    /// The path to the output `.tsv` file.
    #[arg(short('o'), long)]
    pub out_path: PathBuf,
}

/// Finds the `k` nearest neighbors of every observation and writes them out.
pub fn run(args: &NeighborsArgs) -> Result<(), String> {
    let record = PairsRecord::read_from(&args.inp_path)?;
    ftlog::info!(
        "Read {} {} distances between {} observations from {:?}.",
        record.distances.len(),
        record.metric,
        record.labels.len(),
        args.inp_path
    );

    let pairs = record.into_pairs()?;
    let neighbors = pairs.k_nearest(args.k, args.n_jobs).map_err(|e| e.to_string())?;

    ftlog::info!("Writing neighbors to {:?}...", args.out_path);
    text::write_neighbors(&args.out_path, pairs.labels().as_slice(), &neighbors)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::{run, NeighborsArgs};
    use crate::data::PairsRecord;

    #[test]
    fn nearest_from_record() -> Result<(), String> {
        let tmp_dir = TempDir::new("neighbors-command").map_err(|e| e.to_string())?;
        let inp_path = tmp_dir.path().join("pairs.bin");

        PairsRecord {
            metric: "jaccard".to_string(),
            labels: vec!["g0".to_string(), "g1".to_string(), "g2".to_string()],
            distances: vec![0.75, 0.5, 1.0],
        }
        .write_to(&inp_path)?;

        let mut args = NeighborsArgs {
            inp_path,
            k: 1,
            n_jobs: 1,
            out_path: tmp_dir.path().join("knn.tsv"),
        };
        run(&args)?;

        let contents = std::fs::read_to_string(&args.out_path).map_err(|e| e.to_string())?;
        assert_eq!(
            contents,
            "query\trank\tneighbor\tdistance\ng0\t1\tg2\t0.5\ng1\t1\tg0\t0.75\ng2\t1\tg0\t0.5\n"
        );

        args.k = 3;
        assert!(run(&args).is_err());
        Ok(())
    }
}
