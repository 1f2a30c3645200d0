//! Distances induced by Lp norms.

use crate::{number::Float, Number};

/// Computes the element-wise absolute differences of two vectors as `Float`s.
fn abs_diffs<'a, T: Number, U: Float>(x: &'a [T], y: &'a [T]) -> impl Iterator<Item = U> + 'a {
    x.iter().zip(y.iter()).map(|(&a, &b)| U::from(a).abs_diff(U::from(b)))
}

/// Euclidean distance between two vectors.
///
/// Also known as the L2-norm of the difference.
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
/// use distances::vectors::euclidean;
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f64> = vec![4.0, 5.0, 6.0];
///
/// let distance: f64 = euclidean(&x, &y);
///
/// assert!((distance - 27.0_f64.sqrt()).abs() <= f64::EPSILON);
/// ```
pub fn euclidean<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    euclidean_sq::<T, U>(x, y).sqrt()
}

/// Squared Euclidean distance between two vectors.
///
/// This is cheaper to compute than the Euclidean distance but does not obey
/// the triangle inequality.
///
/// # Examples
///
/// ```
/// use distances::vectors::euclidean_sq;
///
/// let x: Vec<i32> = vec![1, 2, 3];
/// let y: Vec<i32> = vec![4, 5, 6];
///
/// let distance: f64 = euclidean_sq(&x, &y);
///
/// assert!((distance - 27.0).abs() <= f64::EPSILON);
/// ```
pub fn euclidean_sq<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    abs_diffs::<T, U>(x, y).map(|d| d * d).sum()
}

/// Manhattan distance between two vectors.
///
/// Also known as the L1-norm of the difference, or the city-block distance.
///
/// # Examples
///
/// ```
/// use distances::vectors::manhattan;
///
/// let x: Vec<f32> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f32> = vec![4.0, 5.0, 6.0];
///
/// let distance: f32 = manhattan(&x, &y);
///
/// assert!((distance - 9.0).abs() <= f32::EPSILON);
/// ```
pub fn manhattan<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    abs_diffs::<T, U>(x, y).sum()
}

/// Chebyshev distance between two vectors.
///
/// Also known as the L-infinity norm of the difference.
///
/// # Examples
///
/// ```
/// use distances::vectors::chebyshev;
///
/// let x: Vec<f32> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f32> = vec![4.0, 7.0, 6.0];
///
/// let distance: f32 = chebyshev(&x, &y);
///
/// assert!((distance - 5.0).abs() <= f32::EPSILON);
/// ```
pub fn chebyshev<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    abs_diffs::<T, U>(x, y).fold(U::ZERO, Float::max)
}

/// Minkowski distance of order `p` between two vectors.
///
/// `p = 1` is the Manhattan distance, `p = 2` is the Euclidean distance and
/// `p = inf` is the Chebyshev distance. Fractional orders are allowed. The
/// caller is responsible for `p >= 1`; smaller orders do not produce a
/// metric.
///
/// # Examples
///
/// ```
/// use distances::vectors::minkowski;
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f64> = vec![4.0, 5.0, 6.0];
///
/// let distance: f64 = minkowski(&x, &y, 3.0);
/// assert!((distance - 81.0_f64.cbrt()).abs() <= 1e-12);
///
/// let distance: f64 = minkowski(&x, &y, 1.5);
/// assert!((distance - 3.0 * 9.0_f64.cbrt()).abs() <= 1e-12);
/// ```
pub fn minkowski<T: Number, U: Float>(x: &[T], y: &[T], p: U) -> U {
    if p == U::ONE {
        manhattan(x, y)
    } else if p == U::from(2) {
        euclidean(x, y)
    } else if p == U::from(f64::INFINITY) {
        chebyshev(x, y)
    } else {
        abs_diffs::<T, U>(x, y)
            .map(|d| d.powf(p))
            .sum::<U>()
            .powf(U::ONE / p)
    }
}
