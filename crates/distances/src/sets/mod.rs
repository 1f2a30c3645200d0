//! Distance functions for sets represented as presence/absence vectors.
//!
//! Each position of a vector is a feature, e.g. a KEGG Ortholog, and any
//! non-zero element marks the feature as present. Two vectors are therefore
//! compared as the sets of features they contain.

use crate::{number::Float, Number};

/// Counts of features present in both, only the first, and only the second of
/// two vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Contingency {
    /// Present in both vectors.
    both: usize,
    /// Present only in the first vector.
    only_x: usize,
    /// Present only in the second vector.
    only_y: usize,
}

impl Contingency {
    /// Tallies the contingency counts of two presence vectors.
    fn new<T: Number>(x: &[T], y: &[T]) -> Self {
        x.iter()
            .zip(y.iter())
            .fold(Self::default(), |mut c, (&a, &b)| {
                match (a.is_present(), b.is_present()) {
                    (true, true) => c.both += 1,
                    (true, false) => c.only_x += 1,
                    (false, true) => c.only_y += 1,
                    (false, false) => (),
                }
                c
            })
    }

    /// The number of features present in exactly one of the vectors.
    const fn differing(&self) -> usize {
        self.only_x + self.only_y
    }
}

/// Jaccard distance.
///
/// The Jaccard distance is a measure of how dissimilar two sets are. It is
/// defined as one minus the cardinality of the intersection of the sets
/// divided by the cardinality of the union of the sets. Two empty sets are at
/// distance zero.
///
/// # Arguments
///
/// * `x`: A presence/absence vector.
/// * `y`: A presence/absence vector.
///
/// # Examples
///
/// ```
/// use distances::sets::jaccard;
///
/// let x = [1_u8, 0, 1];
/// let y = [1_u8, 1, 0];
///
/// let distance: f32 = jaccard(&x, &y);
///
/// assert!((distance - 2.0 / 3.0).abs() < f32::EPSILON);
/// ```
pub fn jaccard<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let c = Contingency::new(x, y);
    let union = c.both + c.differing();
    if union == 0 {
        U::ZERO
    } else {
        U::from(c.differing()) / U::from(union)
    }
}

/// Dice distance.
///
/// Dice distance, between two sets, measures how dissimilar they are by
/// considering the proportion of elements they don't share in common. It is
/// the number of elements present in exactly one set divided by the sum of
/// the sizes of both sets. Two empty sets are at distance zero.
///
/// # Arguments
///
/// * `x`: A presence/absence vector.
/// * `y`: A presence/absence vector.
///
/// # Examples
///
/// ```
/// use distances::sets::dice;
///
/// let x = [true, true, true, true, false, false];
/// let y = [false, false, true, true, true, true];
///
/// let distance: f32 = dice(&x, &y);
///
/// assert!((distance - 0.5).abs() < f32::EPSILON);
/// ```
pub fn dice<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let c = Contingency::new(x, y);
    let size = 2 * c.both + c.differing();
    if size == 0 {
        U::ZERO
    } else {
        U::from(c.differing()) / U::from(size)
    }
}
