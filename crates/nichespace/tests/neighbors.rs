//! Tests for k-nearest-neighbor queries.

use test_case::test_case;

use nichespace::{non_redundant, square_form, DistanceLookup, Metric, PairwiseError};

mod common;

#[test]
fn tiny_neighbors() -> Result<(), PairwiseError> {
    let data = common::data_gen::tiny();
    let pairs = non_redundant(&data, &Metric::Jaccard, 1)?;

    let knn = pairs.k_nearest(2, 1)?;
    assert_eq!(knn.len(), 3);
    assert_eq!(knn[0], vec![(2, 0.5), (1, 2.0 / 3.0)]);
    assert_eq!(knn[1], vec![(0, 2.0 / 3.0), (2, 1.0)]);
    assert_eq!(knn[2], vec![(0, 0.5), (1, 1.0)]);
    Ok(())
}

#[test]
fn invalid_k() -> Result<(), PairwiseError> {
    let data = common::data_gen::tiny();
    let pairs = non_redundant(&data, &Metric::Jaccard, 1)?;
    assert!(matches!(pairs.k_nearest(0, 1), Err(PairwiseError::Shape(_))));
    assert!(matches!(pairs.k_nearest(3, 1), Err(PairwiseError::Shape(_))));
    Ok(())
}

#[test_case(50, 1 ; "50_k1")]
#[test_case(50, 10 ; "50_k10")]
#[test_case(120, 49 ; "120_k49")]
fn forms_agree(car: usize, k: usize) -> Result<(), PairwiseError> {
    let data = common::data_gen::presence(car, 24, 5);
    let pairs = non_redundant(&data, &Metric::Jaccard, -1)?;
    let matrix = square_form(&data, &Metric::Jaccard, -1)?;

    let from_pairs = pairs.k_nearest(k, -1)?;
    let from_matrix = matrix.k_nearest(k, 1)?;
    assert_eq!(from_pairs, from_matrix);

    for (i, neighbors) in from_pairs.iter().enumerate() {
        assert_eq!(neighbors.len(), k);
        assert!(neighbors.iter().all(|&(j, _)| j != i), "{i} is its own neighbor");
        assert!(neighbors.windows(2).all(|w| (w[0].1, w[0].0) < (w[1].1, w[1].0)), "unsorted");

        // No other observation is closer than the farthest neighbor.
        let farthest = neighbors[k - 1].1;
        let closer = (0..car)
            .filter(|&j| j != i && pairs.get_by_index(i, j).is_some_and(|d| d < farthest))
            .count();
        assert!(closer < k);
    }
    Ok(())
}
