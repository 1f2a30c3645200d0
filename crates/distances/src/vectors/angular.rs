//! Angular and normalized distances between vectors.

use crate::{number::Float, Number};

/// Computes the Cosine distance between two vectors.
///
/// The cosine distance is defined as `1.0 - c` where `c` is the cosine
/// similarity, i.e. the dot product of the two vectors divided by the product
/// of their magnitudes. The result is clamped to `[0, 2]` to absorb rounding
/// errors. If either vector has zero magnitude, the distance is `1.0`.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors
///
/// # Arguments
///
/// * `x`: A slice of numbers.
/// * `y`: A slice of numbers.
///
/// # Examples
///
/// ```
/// use distances::vectors::cosine;
///
/// let x: Vec<f32> = vec![1.0, 0.0, 0.0];
/// let y: Vec<f32> = vec![0.0, 1.0, 0.0];
///
/// let distance: f32 = cosine(&x, &y);
///
/// assert!((distance - 1.0).abs() < f32::EPSILON);
/// ```
///
/// # References
///
/// * [Cosine similarity](https://en.wikipedia.org/wiki/Cosine_similarity)
pub fn cosine<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let [xx, yy, xy] = x
        .iter()
        .zip(y.iter())
        .map(|(&a, &b)| (U::from(a), U::from(b)))
        .fold([U::ZERO; 3], |[xx, yy, xy], (a, b)| [xx + a * a, yy + b * b, xy + a * b]);

    if xx == U::ZERO || yy == U::ZERO {
        U::ONE
    } else {
        let two = U::ONE + U::ONE;
        (U::ONE - xy * (xx * yy).inv_sqrt()).max(U::ZERO).min(two)
    }
}

/// Computes the normalized Hamming distance between two vectors.
///
/// This is the fraction of positions at which the corresponding elements are
/// different. Two empty vectors are at distance zero.
///
/// # Examples
///
/// ```
/// use distances::vectors::hamming;
///
/// let x: Vec<u8> = vec![1, 2, 3, 4];
/// let y: Vec<u8> = vec![1, 2, 4, 4];
///
/// let distance: f64 = hamming(&x, &y);
///
/// assert!((distance - 0.25).abs() <= f64::EPSILON);
/// ```
///
/// # References
///
/// * [Hamming distance](https://en.wikipedia.org/wiki/Hamming_distance)
pub fn hamming<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let n = x.len().min(y.len());
    if n == 0 {
        return U::ZERO;
    }
    let different = x.iter().zip(y.iter()).filter(|(a, b)| a != b).count();
    U::from(different) / U::from(n)
}

/// Computes the Canberra distance between two vectors.
///
/// The Canberra distance is the sum, over all positions, of the absolute
/// difference of the elements divided by the sum of their absolute values.
/// Positions where both elements are zero contribute nothing.
///
/// # Examples
///
/// ```
/// use distances::vectors::canberra;
///
/// let x: Vec<f32> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f32> = vec![4.0, 5.0, 6.0];
///
/// let distance: f32 = canberra(&x, &y);
///
/// assert!((distance - 143.0 / 105.0).abs() <= 1e-6);
/// ```
///
/// # References
///
/// * [Canberra distance](https://en.wikipedia.org/wiki/Canberra_distance)
pub fn canberra<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    x.iter()
        .zip(y.iter())
        .map(|(&a, &b)| (U::from(a), U::from(b)))
        .filter_map(|(a, b)| {
            let denominator = a.abs() + b.abs();
            if denominator == U::ZERO {
                None
            } else {
                Some(a.abs_diff(b) / denominator)
            }
        })
        .sum()
}

/// Computes the Bray-Curtis distance between two vectors.
///
/// This is the sum of absolute differences divided by the sum of absolute
/// sums. It is bounded in `[0, 1]` for non-negative data, e.g. abundance
/// profiles. If the denominator is zero, the distance is zero.
///
/// # Examples
///
/// ```
/// use distances::vectors::bray_curtis;
///
/// let x: Vec<u32> = vec![6, 7, 4];
/// let y: Vec<u32> = vec![10, 0, 6];
///
/// let distance: f64 = bray_curtis(&x, &y);
///
/// assert!((distance - 13.0 / 33.0).abs() <= f64::EPSILON);
/// ```
///
/// # References
///
/// * [Bray-Curtis dissimilarity](https://en.wikipedia.org/wiki/Bray%E2%80%93Curtis_dissimilarity)
pub fn bray_curtis<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let (numerator, denominator) = x
        .iter()
        .zip(y.iter())
        .map(|(&a, &b)| (U::from(a), U::from(b)))
        .fold((U::ZERO, U::ZERO), |(num, den), (a, b)| {
            (num + a.abs_diff(b), den + (a + b).abs())
        });

    if denominator == U::ZERO {
        U::ZERO
    } else {
        numerator / denominator
    }
}
