//! Random matrix and graph generators.
//!
//! Generators take the RNG as an argument so experiments are reproducible;
//! callers typically seed a `ChaCha8Rng` with `seed_from_u64`.

use rand::Rng;

use crate::matrix::Matrix;

/// n×n matrix with entries drawn uniformly from `[0, max_value)`.
///
/// A `max_value` of zero (or less) yields the zero matrix.
pub fn random_matrix<R: Rng>(dim: usize, max_value: i64, rng: &mut R) -> Matrix {
    if max_value <= 0 {
        return Matrix::zeros(dim);
    }
    let data = (0..dim * dim).map(|_| rng.gen_range(0..max_value)).collect();
    Matrix::from_parts(dim, data)
}

/// Adjacency matrix of an Erdős–Rényi random graph on `vertices` nodes.
///
/// Each unordered pair is connected independently with probability `p`
/// (clamped to `[0, 1]`). The result is symmetric with a zero diagonal.
pub fn random_graph<R: Rng>(vertices: usize, p: f64, rng: &mut R) -> Matrix {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    let mut graph = Matrix::zeros(vertices);
    for i in 0..vertices {
        for j in i + 1..vertices {
            if rng.gen_bool(p) {
                graph.set(i, j, 1);
                graph.set(j, i, 1);
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_matrix_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let m = random_matrix(10, 100, &mut rng);
        assert_eq!(m.dim(), 10);
        assert!(m.as_slice().iter().all(|&v| (0..100).contains(&v)));
    }

    #[test]
    fn random_matrix_is_reproducible() {
        let a = random_matrix(6, 1000, &mut ChaCha8Rng::seed_from_u64(42));
        let b = random_matrix(6, 1000, &mut ChaCha8Rng::seed_from_u64(42));
        let c = random_matrix(6, 1000, &mut ChaCha8Rng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_matrix_zero_bound() {
        let m = random_matrix(3, 0, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(m, Matrix::zeros(3));
    }

    #[test]
    fn random_graph_is_symmetric_without_loops() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let g = random_graph(30, 0.3, &mut rng);
        for i in 0..30 {
            assert_eq!(g[(i, i)], 0);
            for j in 0..30 {
                assert_eq!(g[(i, j)], g[(j, i)]);
                assert!(g[(i, j)] == 0 || g[(i, j)] == 1);
            }
        }
    }

    #[test]
    fn random_graph_extreme_probabilities() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(random_graph(5, 0.0, &mut rng), Matrix::zeros(5));
        let complete = random_graph(5, 1.5, &mut rng);
        let edges: i64 = complete.as_slice().iter().sum();
        assert_eq!(edges, 5 * 4);
    }
}
