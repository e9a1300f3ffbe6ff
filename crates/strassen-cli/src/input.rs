//! Two-matrix text input.
//!
//! The format is one integer per line: the first `dim²` values are the
//! first matrix in row-major order, the next `dim²` the second. Blank lines
//! and surrounding whitespace are ignored.

use std::path::{Path, PathBuf};

use strassen_core::{Matrix, MatrixError};

/// Errors reading or parsing a matrix pair.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank line is not an integer.
    #[error("line {line}: invalid integer {text:?}")]
    Parse { line: usize, text: String },

    /// The number of values does not match the requested dimension.
    #[error("expected {expected} values for two {dim}x{dim} matrices, found {found}")]
    Count {
        dim: usize,
        expected: usize,
        found: usize,
    },

    /// Two `dim`×`dim` matrices cannot be addressed on this platform.
    #[error("dimension {dim} is too large")]
    DimensionTooLarge { dim: usize },

    /// The values do not form a valid matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Read two `dim`×`dim` matrices from a file.
pub fn read_matrix_pair(path: &Path, dim: usize) -> Result<(Matrix, Matrix), InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), dim, "reading matrix pair");
    parse_matrix_pair(&text, dim)
}

/// Parse two `dim`×`dim` matrices from text.
pub fn parse_matrix_pair(text: &str, dim: usize) -> Result<(Matrix, Matrix), InputError> {
    let per_matrix = dim
        .checked_mul(dim)
        .filter(|n| n.checked_mul(2).is_some())
        .ok_or(InputError::DimensionTooLarge { dim })?;

    let mut values = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<i64>().map_err(|_| InputError::Parse {
            line: idx + 1,
            text: trimmed.to_string(),
        })?;
        values.push(value);
    }

    if values.len() != 2 * per_matrix {
        return Err(InputError::Count {
            dim,
            expected: 2 * per_matrix,
            found: values.len(),
        });
    }

    let second = values.split_off(per_matrix);
    Ok((Matrix::from_vec(dim, values)?, Matrix::from_vec(dim, second)?))
}
