//! Classical O(n³) matrix multiplication.
//!
//! Used directly for small operands and as the leaf case of the Strassen
//! recursion. Loops run in i-k-j order so the inner loop walks rows of both
//! `b` and the output with stride 1.

use crate::error::MatrixError;
use crate::matrix::{check_same_dim, Matrix};

/// Compute `a · b` with the triple-loop algorithm.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    check_same_dim(a, b)?;
    Ok(multiply_unchecked(a, b))
}

pub(crate) fn multiply_unchecked(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.dim();
    let mut out = vec![0i64; n * n];
    for i in 0..n {
        let a_row = a.row(i);
        let out_row = &mut out[i * n..(i + 1) * n];
        for (k, &a_ik) in a_row.iter().enumerate() {
            if a_ik == 0 {
                continue;
            }
            for (acc, &b_kj) in out_row.iter_mut().zip(b.row(k)) {
                *acc = acc.wrapping_add(a_ik.wrapping_mul(b_kj));
            }
        }
    }
    Matrix::from_parts(n, out)
}
