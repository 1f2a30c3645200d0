//! Tab-separated inputs and outputs: labels, group assignments and tables.
//!
//! Fields that contain a tab, a quote or a line break are quoted, so labels
//! may contain any of them.

use std::{collections::HashMap, path::Path};

use nichespace::{DistanceMatrix, DistancePairs};

/// Reads one label per non-empty line.
///
/// Surrounding whitespace is trimmed. A label that contains a tab must be
/// quoted.
pub fn read_labels<P: AsRef<Path>>(path: P) -> Result<Vec<String>, String> {
    let mut reader = reader(&path, None)?;
    let mut labels = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        match (record.len(), record.get(0)) {
            (1, Some(label)) => labels.push(label.to_string()),
            (n, _) => {
                return Err(format!(
                    "Line {} of {} has {n} fields. Quote labels that contain tabs.",
                    line_of(&record),
                    path.as_ref().display()
                ))
            }
        }
    }
    Ok(labels)
}

/// Writes one label per line.
pub fn write_labels<P: AsRef<Path>>(path: P, labels: &[String]) -> Result<(), String> {
    let mut writer = writer(path)?;
    for label in labels {
        writer.write_record([label]).map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}

/// Reads `label<TAB>group` assignments, one per non-empty line.
///
/// Lines starting with `#` are comments.
pub fn read_groups<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>, String> {
    let mut reader = reader(&path, Some(b'#'))?;
    let mut groups = HashMap::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let (2, Some(label), Some(group)) = (record.len(), record.get(0), record.get(1)) else {
            return Err(format!(
                "Line {} of {} is not `label<TAB>group`.",
                line_of(&record),
                path.as_ref().display()
            ));
        };
        if groups.insert(label.to_string(), group.to_string()).is_some() {
            return Err(format!("Label {label} is assigned more than once."));
        }
    }
    Ok(groups)
}

/// Writes the non-redundant form as `a<TAB>b<TAB>distance` rows.
pub fn write_pairs<P: AsRef<Path>>(path: P, pairs: &DistancePairs<String>) -> Result<(), String> {
    let mut writer = writer(path)?;
    writer.write_record(["a", "b", "distance"]).map_err(|e| e.to_string())?;
    for (pair, d) in pairs.iter() {
        writer
            .write_record([pair.first().as_str(), pair.second().as_str(), d.to_string().as_str()])
            .map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}

/// Writes the redundant form as a square table with labelled rows and columns.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &DistanceMatrix<String>) -> Result<(), String> {
    let mut writer = writer(path)?;
    let labels = matrix.labels().as_slice();
    writer
        .write_record(std::iter::once("").chain(labels.iter().map(String::as_str)))
        .map_err(|e| e.to_string())?;
    for (label, row) in labels.iter().zip(matrix.as_array().outer_iter()) {
        writer
            .write_record(std::iter::once(label.clone()).chain(row.iter().map(ToString::to_string)))
            .map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}

/// Writes neighbors as `query<TAB>rank<TAB>neighbor<TAB>distance` rows, with
/// 1-based ranks.
pub fn write_neighbors<P: AsRef<Path>>(
    path: P,
    labels: &[String],
    neighbors: &[Vec<(usize, f64)>],
) -> Result<(), String> {
    let mut writer = writer(path)?;
    writer
        .write_record(["query", "rank", "neighbor", "distance"])
        .map_err(|e| e.to_string())?;
    for (query, hits) in labels.iter().zip(neighbors) {
        for (rank, &(j, d)) in hits.iter().enumerate() {
            writer
                .write_record([
                    query.as_str(),
                    (rank + 1).to_string().as_str(),
                    labels[j].as_str(),
                    d.to_string().as_str(),
                ])
                .map_err(|e| e.to_string())?;
        }
    }
    writer.flush().map_err(|e| e.to_string())
}

/// Opens a headerless tab-separated file for reading.
fn reader<P: AsRef<Path>>(path: P, comment: Option<u8>) -> Result<csv::Reader<std::fs::File>, String> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(comment)
        .from_path(&path)
        .map_err(|e| format!("Could not read {}: {e}", path.as_ref().display()))
}

/// Creates a tab-separated file for writing.
fn writer<P: AsRef<Path>>(path: P) -> Result<csv::Writer<std::fs::File>, String> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(&path)
        .map_err(|e| format!("Could not create {}: {e}", path.as_ref().display()))
}

/// The 1-based line on which a record starts.
fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    /// Reads every row of a tab-separated file back as fields.
    fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, String> {
        let mut reader = reader(path, None)?;
        reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(ToString::to_string).collect())
                    .map_err(|e| e.to_string())
            })
            .collect()
    }

    #[test]
    fn labels_and_groups() -> Result<(), String> {
        let tmp_dir = TempDir::new("text-io").map_err(|e| e.to_string())?;

        let path = tmp_dir.path().join("labels.txt");
        std::fs::write(&path, "GCA_1\n  GCA_2 \n\nGCA_3\n").map_err(|e| e.to_string())?;
        assert_eq!(read_labels(&path)?, vec!["GCA_1", "GCA_2", "GCA_3"]);

        let path = tmp_dir.path().join("groups.tsv");
        std::fs::write(&path, "# genome\tcluster\nGCA_1\tani_1\nGCA_2\tani_1\nGCA_3\tani_2\n").map_err(|e| e.to_string())?;
        let groups = read_groups(&path)?;
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.get("GCA_3").map(String::as_str), Some("ani_2"));

        std::fs::write(&path, "GCA_1 ani_1\n").map_err(|e| e.to_string())?;
        assert!(read_groups(&path).is_err());

        std::fs::write(&path, "GCA_1\tani_1\nGCA_1\tani_2\n").map_err(|e| e.to_string())?;
        assert!(read_groups(&path).is_err());
        Ok(())
    }

    #[test]
    fn tables() -> Result<(), String> {
        let tmp_dir = TempDir::new("text-tables").map_err(|e| e.to_string())?;
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let pairs = DistancePairs::from_condensed(labels.clone(), vec![0.5, 1.0, 0.25]).map_err(|e| e.to_string())?;

        let path = tmp_dir.path().join("pairs.tsv");
        write_pairs(&path, &pairs)?;
        let contents = std::fs::read_to_string(&path).map_err(|e| e.to_string())?;
        assert_eq!(contents, "a\tb\tdistance\na\tb\t0.5\na\tc\t1\nb\tc\t0.25\n");

        let path = tmp_dir.path().join("matrix.tsv");
        write_matrix(&path, &pairs.to_matrix())?;
        assert_eq!(
            read_rows(&path)?,
            vec![
                vec!["", "a", "b", "c"],
                vec!["a", "0", "0.5", "1"],
                vec!["b", "0.5", "0", "0.25"],
                vec!["c", "1", "0.25", "0"],
            ]
        );

        let path = tmp_dir.path().join("knn.tsv");
        write_neighbors(&path, &labels, &[vec![(1, 0.5)], vec![(2, 0.25)], vec![(1, 0.25)]])?;
        let contents = std::fs::read_to_string(&path).map_err(|e| e.to_string())?;
        assert_eq!(
            contents,
            "query\trank\tneighbor\tdistance\na\t1\tb\t0.5\nb\t1\tc\t0.25\nc\t1\tb\t0.25\n"
        );
        Ok(())
    }

    #[test]
    fn labels_with_tabs_and_quotes() -> Result<(), String> {
        let tmp_dir = TempDir::new("text-quoting").map_err(|e| e.to_string())?;
        let labels = vec![
            "GCA_1\tplasmid".to_string(),
            "GCA_2 \"draft\"".to_string(),
            "GCA_3".to_string(),
        ];

        let path = tmp_dir.path().join("labels.txt");
        write_labels(&path, &labels)?;
        assert_eq!(read_labels(&path)?, labels);

        let pairs = DistancePairs::from_condensed(labels.clone(), vec![0.5, 1.0, 0.25]).map_err(|e| e.to_string())?;

        let path = tmp_dir.path().join("pairs.tsv");
        write_pairs(&path, &pairs)?;
        let rows = read_rows(&path)?;
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 3), "ragged rows: {rows:?}");
        assert_eq!(rows[1], vec![labels[0].clone(), labels[1].clone(), "0.5".to_string()]);

        let path = tmp_dir.path().join("matrix.tsv");
        write_matrix(&path, &pairs.to_matrix())?;
        let rows = read_rows(&path)?;
        assert!(rows.iter().all(|row| row.len() == 4), "ragged rows: {rows:?}");
        assert_eq!(rows[0][1..], labels[..]);
        assert_eq!(rows[2][0], labels[1]);

        let path = tmp_dir.path().join("knn.tsv");
        write_neighbors(&path, &labels, &[vec![(1, 0.5)], vec![(2, 0.25)], vec![(1, 0.25)]])?;
        let rows = read_rows(&path)?;
        assert!(rows.iter().all(|row| row.len() == 4), "ragged rows: {rows:?}");
        assert_eq!(rows[1][0], labels[0]);
        assert_eq!(rows[1][2], labels[1]);

        let path = tmp_dir.path().join("groups.tsv");
        std::fs::write(&path, "\"GCA_1\tplasmid\"\tani_1\nGCA_3\tani_2\n").map_err(|e| e.to_string())?;
        let groups = read_groups(&path)?;
        assert_eq!(groups.get(&labels[0]).map(String::as_str), Some("ani_1"));

        let path = tmp_dir.path().join("unquoted.txt");
        std::fs::write(&path, "GCA_1\tplasmid\n").map_err(|e| e.to_string())?;
        assert!(read_labels(&path).is_err());
        Ok(())
    }
}
