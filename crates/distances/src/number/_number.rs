//! A `Number` is a general element type for feature vectors.
//!
//! We calculate distances over collections of `Number`s. Every `Number` can be
//! viewed as a floating point value and as a presence flag (non-zero).

use core::fmt::{Debug, Display};

/// Collections of `Number`s can be used to calculate distances.
pub trait Number: Copy + PartialEq + PartialOrd + Send + Sync + Debug + Display + Default {
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Casts a number to `Self`. This may be a lossy conversion.
    fn from<T: Number>(n: T) -> Self;

    /// Returns the number as a `f64`. This may be a lossy conversion.
    fn as_f64(self) -> f64;

    /// Whether the number counts as a present feature, i.e. is non-zero.
    fn is_present(self) -> bool {
        self != Self::ZERO
    }

    /// Returns a random `Number`.
    ///
    /// Integers are drawn uniformly over their full range, floats uniformly
    /// from `[0, 1)` and booleans with even odds.
    fn next_random<R: rand::Rng>(rng: &mut R) -> Self;
}

impl Number for bool {
    const ZERO: Self = false;
    const ONE: Self = true;

    fn from<T: Number>(n: T) -> Self {
        n.is_present()
    }

    fn as_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }

    fn is_present(self) -> bool {
        self
    }

    fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
        rng.gen()
    }
}

/// Macro to implement `Number` for all primitive integer and float types.
macro_rules! impl_number {
    ($zero:expr, $one:expr, $($ty:ty),*) => {
        $(
            #[allow(
                clippy::cast_lossless,
                clippy::cast_possible_truncation,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss
            )]
            impl Number for $ty {
                const ZERO: Self = $zero;
                const ONE: Self = $one;

                fn from<T: Number>(n: T) -> Self {
                    n.as_f64() as Self
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
                    rng.gen()
                }
            }
        )*
    }
}

impl_number!(0, 1, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_number!(0.0, 1.0, f32, f64);
