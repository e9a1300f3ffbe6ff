//! # strassen-core
//!
//! Core library for Strassen-rs: square integer matrices, the classical
//! triple-loop product, and Strassen's recursive multiplication with a
//! configurable crossover threshold.

pub mod constants;
pub mod error;
pub mod generate;
pub mod graph;
pub mod matrix;
pub mod naive;
pub mod strassen;

// Re-exports
pub use constants::{exit_codes, DEFAULT_MAX_ELEMENT, DEFAULT_THRESHOLD};
pub use error::MatrixError;
pub use matrix::Matrix;
pub use strassen::MultiplyStats;

/// Multiply two square matrices with Strassen's algorithm at the default
/// crossover threshold.
///
/// # Example
/// ```
/// use strassen_core::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = strassen_core::multiply(&a, &b).unwrap();
/// assert_eq!(c.rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    strassen::multiply(a, b, DEFAULT_THRESHOLD)
}
