//! Aggregating observations into groups before computing distances.

use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

use distances::Number;

use crate::{observations::Observations, PairwiseError, Result};

/// Collapses observations into one presence row per group.
///
/// A feature is present in a group if it is present, i.e. non-zero, in any
/// member of the group. The groups are labelled by their identifiers and
/// sorted in ascending order.
///
/// # Arguments
///
/// * `data`: The observations.
/// * `assignments`: The group of each observation, keyed by label.
///
/// # Errors
///
/// * `Shape` if any observation has no group.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use nichespace::{group_any, Observations};
///
/// let data = Observations::from_rows_labelled(
///     vec![vec![1, 0, 0], vec![0, 0, 1], vec![0, 1, 0]],
///     vec!["a", "b", "c"],
/// ).unwrap();
/// let assignments = HashMap::from([("a", 7), ("b", 7), ("c", 3)]);
///
/// let groups = group_any(&data, &assignments).unwrap();
/// assert_eq!(groups.labels().as_slice(), &[3, 7]);
/// assert_eq!(groups.get_labelled(&7), Some(&[true, false, true][..]));
/// ```
pub fn group_any<T, L, G>(data: &Observations<T, L>, assignments: &HashMap<L, G>) -> Result<Observations<bool, G>>
where
    T: Number,
    L: Eq + Hash + Clone + core::fmt::Debug,
    G: Ord + Eq + Hash + Clone,
{
    let members = data
        .labels()
        .iter()
        .map(|label| {
            assignments
                .get(label)
                .ok_or_else(|| PairwiseError::Shape(format!("Observation {label:?} is not assigned to a group.")))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut groups = BTreeMap::new();
    for (i, &group) in members.iter().enumerate() {
        let row = groups
            .entry(group)
            .or_insert_with(|| vec![false; data.dimensionality()]);
        for (present, &value) in row.iter_mut().zip(data.get(i)) {
            *present |= value.is_present();
        }
    }

    ftlog::info!("Grouped {} observations into {} groups.", data.cardinality(), groups.len());

    let (labels, rows): (Vec<_>, Vec<_>) = groups.into_iter().map(|(g, row)| (g.clone(), row)).unzip();
    Observations::from_rows_labelled(rows, labels)
}
