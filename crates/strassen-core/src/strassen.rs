//! Strassen's recursive matrix multiplication.
//!
//! Above the crossover threshold each call splits both operands into
//! quadrants, forms seven half-size products from ten auxiliary sums and
//! differences, and recombines them. Odd dimensions are handled by
//! multiplying zero-padded copies and cropping the result. At or below the
//! threshold the classical product is used.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::matrix::{check_same_dim, Matrix};
use crate::naive;

/// Work performed by a single top-level multiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplyStats {
    /// Calls answered by the classical product.
    pub base_cases: u64,
    /// Calls that split into seven sub-products.
    pub recursive_steps: u64,
    /// Recursive calls whose operands had to be padded to an even size.
    pub padded_steps: u64,
    /// Deepest recursion level reached (0 = top-level call).
    pub max_depth: u32,
}

/// Multiply `a · b` with Strassen's algorithm.
///
/// Both operands must have the same dimension and `threshold` must be at
/// least 1. Operands of dimension `<= threshold` are multiplied classically.
pub fn multiply(a: &Matrix, b: &Matrix, threshold: usize) -> Result<Matrix, MatrixError> {
    multiply_with_stats(a, b, threshold).map(|(product, _)| product)
}

/// Like [`multiply`], also reporting how much work the recursion performed.
pub fn multiply_with_stats(
    a: &Matrix,
    b: &Matrix,
    threshold: usize,
) -> Result<(Matrix, MultiplyStats), MatrixError> {
    if threshold < 1 {
        return Err(MatrixError::InvalidThreshold(threshold));
    }
    check_same_dim(a, b)?;

    tracing::debug!(dim = a.dim(), threshold, "strassen multiply");
    let mut stats = MultiplyStats::default();
    let product = multiply_rec(a, b, threshold, 0, &mut stats);
    tracing::debug!(
        base_cases = stats.base_cases,
        recursive_steps = stats.recursive_steps,
        padded_steps = stats.padded_steps,
        max_depth = stats.max_depth,
        "strassen multiply complete"
    );
    Ok((product, stats))
}

fn multiply_rec(
    a: &Matrix,
    b: &Matrix,
    threshold: usize,
    depth: u32,
    stats: &mut MultiplyStats,
) -> Matrix {
    stats.max_depth = stats.max_depth.max(depth);
    let n = a.dim();
    if n <= threshold {
        stats.base_cases += 1;
        return naive::multiply_unchecked(a, b);
    }
    stats.recursive_steps += 1;

    let padded = n % 2 == 1;
    let (a, b): (Cow<'_, Matrix>, Cow<'_, Matrix>) = if padded {
        tracing::trace!(dim = n, depth, "padding odd dimension");
        stats.padded_steps += 1;
        (Cow::Owned(a.padded(n + 1)), Cow::Owned(b.padded(n + 1)))
    } else {
        (Cow::Borrowed(a), Cow::Borrowed(b))
    };

    let [a11, a12, a21, a22] = a.quadrants();
    let [b11, b12, b21, b22] = b.quadrants();

    let s1 = b12.subtract_unchecked(&b22);
    let s2 = a11.add_unchecked(&a12);
    let s3 = a21.add_unchecked(&a22);
    let s4 = b21.subtract_unchecked(&b11);
    let s5 = a11.add_unchecked(&a22);
    let s6 = b11.add_unchecked(&b22);
    let s7 = a12.subtract_unchecked(&a22);
    let s8 = b21.add_unchecked(&b22);
    let s9 = a11.subtract_unchecked(&a21);
    let s10 = b11.add_unchecked(&b12);

    let depth = depth + 1;
    let p1 = multiply_rec(&a11, &s1, threshold, depth, stats);
    let p2 = multiply_rec(&s2, &b22, threshold, depth, stats);
    let p3 = multiply_rec(&s3, &b11, threshold, depth, stats);
    let p4 = multiply_rec(&a22, &s4, threshold, depth, stats);
    let p5 = multiply_rec(&s5, &s6, threshold, depth, stats);
    let p6 = multiply_rec(&s7, &s8, threshold, depth, stats);
    let p7 = multiply_rec(&s9, &s10, threshold, depth, stats);

    let c11 = p5
        .add_unchecked(&p4.add_unchecked(&p6))
        .subtract_unchecked(&p2);
    let c12 = p1.add_unchecked(&p2);
    let c21 = p3.add_unchecked(&p4);
    let c22 = p1
        .add_unchecked(&p5)
        .subtract_unchecked(&p3)
        .subtract_unchecked(&p7);

    let out = Matrix::from_quadrants(&c11, &c12, &c21, &c22);
    if padded {
        out.cropped(n)
    } else {
        out
    }
}
