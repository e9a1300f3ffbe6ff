//! Error type for matrix construction and multiplication.

/// Contract violations detected before any arithmetic is performed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Operands do not share the same dimension.
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    ShapeMismatch { left: usize, right: usize },

    /// Input rows do not form a square grid.
    #[error("matrix is not square: {rows} rows, row of length {cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Crossover threshold must be at least 1.
    #[error("invalid threshold {0}: must be at least 1")]
    InvalidThreshold(usize),
}
