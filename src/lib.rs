//! mini-numpy: small matrix and vector containers.
//!
//! This crate provides a row-major `Matrix` and a fixed-length `Vector` with
//! shape-checked arithmetic (negation, addition, subtraction, scalar and
//! matrix multiplication, dot product, division). Every fallible operation
//! returns a `LinalgError` instead of panicking.
//!
//! ```
//! use mini_numpy::math::Matrix;
//!
//! let a = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
//! let b = Matrix::new(vec![vec![10, 11], vec![20, 21], vec![30, 31]]).unwrap();
//! assert_eq!(a.matmul(&b).unwrap().to_string(), "Matrix([[140, 146], [320, 335]])");
//! ```
pub mod config;
pub mod error;
pub mod math;

pub use config::PrintOptions;
pub use error::{LinalgError, Result};
pub use math::{Element, Matrix, MatrixOperand, Product, Vector, VectorOperand};
