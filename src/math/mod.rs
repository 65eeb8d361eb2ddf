//! Small matrix and vector types.
//!
//! Provides `Matrix` (2D, row-major) and `Vector` (fixed length) with
//! shape-checked arithmetic. The two types are independent of each other;
//! both are generic over any signed numeric `Element`.
use std::fmt;
use std::ops::Neg;

use num_traits::{AsPrimitive, Num};

pub mod matrix;
pub mod vector;

pub use matrix::{Matrix, MatrixOperand};
pub use vector::{Product, Vector, VectorOperand};

/// Numeric types that can be stored in a `Matrix` or `Vector`.
///
/// Implemented for every copyable signed numeric type that can be widened
/// to `f64` (all signed integers, `f32` and `f64`). Division always
/// produces `f64`.
///
/// # Panics
///
/// Integer elements use Rust's native arithmetic: an overflowing sum,
/// product or negation (e.g. `i32::MAX + 1`, `-i8::MIN`) panics in debug
/// builds and wraps in release builds. Pick an element type wide enough for
/// the values involved, such as `i64` or `f64`.
pub trait Element:
    Num + Neg<Output = Self> + Copy + PartialEq + fmt::Debug + AsPrimitive<f64> + 'static
{
}

impl<T> Element for T where
    T: Num + Neg<Output = T> + Copy + PartialEq + fmt::Debug + AsPrimitive<f64> + 'static
{
}
