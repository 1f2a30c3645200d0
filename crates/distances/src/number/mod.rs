//! The `Number` trait is used to represent the elements of feature vectors.
//!
//! We provide implementations for the following types:
//!
//! * `bool`, for presence/absence features.
//! * All primitive unsigned integers: `u8`, `u16`, `u32`, `u64`, `usize`.
//! * All primitive signed integers: `i8`, `i16`, `i32`, `i64`, `isize`.
//! * All primitive floating point numbers: `f32`, `f64`.
//!
//! Distance values are represented as `Float`s.

mod _number;
mod _variants;

pub use _number::Number;
pub use _variants::Float;
