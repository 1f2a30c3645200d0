//! The `Float` sub-trait of `Number`, used for distance values.

use core::{
    iter::Sum,
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::Number;

/// Sub-trait of `Number` for all floating point types.
pub trait Float:
    Number
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Sum<Self>
{
    /// Returns the absolute value of a `Float`.
    #[must_use]
    fn abs(self) -> Self;

    /// Returns the absolute difference between `self` and `other`.
    #[must_use]
    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }

    /// Returns the square root of a `Float`.
    #[must_use]
    fn sqrt(self) -> Self;

    /// Returns the inverse square root of a `Float`, i.e. `1.0 / self.sqrt()`.
    #[must_use]
    fn inv_sqrt(self) -> Self {
        Self::ONE / self.sqrt()
    }

    /// Returns `self` raised to the power of `exp`.
    #[must_use]
    fn powf(self, exp: Self) -> Self;

    /// Returns the larger of two values, ignoring NaNs.
    #[must_use]
    fn max(self, other: Self) -> Self;

    /// Returns the smaller of two values, ignoring NaNs.
    #[must_use]
    fn min(self, other: Self) -> Self;
}

/// Macro to implement `Float` for the primitive floating point types.
macro_rules! impl_float {
    ($($ty:ident),*) => {
        $(
            impl Float for $ty {
                fn abs(self) -> Self {
                    $ty::abs(self)
                }

                fn sqrt(self) -> Self {
                    $ty::sqrt(self)
                }

                fn powf(self, exp: Self) -> Self {
                    $ty::powf(self, exp)
                }

                fn max(self, other: Self) -> Self {
                    $ty::max(self, other)
                }

                fn min(self, other: Self) -> Self {
                    $ty::min(self, other)
                }
            }
        )*
    }
}

impl_float!(f32, f64);
