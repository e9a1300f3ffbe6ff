//! Triangle counting in undirected graphs via matrix cubing.
//!
//! For a symmetric 0/1 adjacency matrix `G` with zero diagonal, the trace
//! of `G³` counts every triangle six times (three starting vertices, two
//! directions).

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EDGE_PROBABILITIES, DEFAULT_SEED, DEFAULT_THRESHOLD, DEFAULT_TRIANGLE_TRIALS,
    DEFAULT_TRIANGLE_VERTICES,
};
use crate::error::MatrixError;
use crate::generate::random_graph;
use crate::matrix::Matrix;
use crate::strassen;

/// Number of triangles in the graph with adjacency matrix `graph`.
///
/// `graph` must be a symmetric 0/1 matrix with a zero diagonal. Other
/// matrices yield `trace(graph³) / 6`, which may be negative.
pub fn count_triangles(graph: &Matrix, threshold: usize) -> Result<i64, MatrixError> {
    let squared = strassen::multiply(graph, graph, threshold)?;
    let cubed = strassen::multiply(&squared, graph, threshold)?;
    Ok(cubed.trace() / 6)
}

/// Expected triangle count of a random graph: `C(n, 3) · p³`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn expected_triangles(vertices: usize, p: f64) -> f64 {
    let n = vertices as f64;
    n * (n - 1.0) * (n - 2.0) / 6.0 * p.powi(3)
}

/// Parameters for the random-graph triangle experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleExperiment {
    pub vertices: usize,
    pub probabilities: Vec<f64>,
    pub trials: usize,
    pub threshold: usize,
    pub seed: u64,
}

impl Default for TriangleExperiment {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_TRIANGLE_VERTICES,
            probabilities: DEFAULT_EDGE_PROBABILITIES.to_vec(),
            trials: DEFAULT_TRIANGLE_TRIALS,
            threshold: DEFAULT_THRESHOLD,
            seed: DEFAULT_SEED,
        }
    }
}

/// Outcome for one edge probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleReport {
    pub p: f64,
    /// Mean over trials, truncated toward zero.
    pub mean_count: i64,
    pub expected: f64,
}

impl TriangleExperiment {
    /// Generate `trials` graphs per probability and count their triangles.
    ///
    /// A single seeded RNG drives every graph, so the whole experiment is
    /// reproducible from `seed`.
    pub fn run(&self) -> Result<Vec<TriangleReport>, MatrixError> {
        if self.threshold < 1 {
            return Err(MatrixError::InvalidThreshold(self.threshold));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut reports = Vec::with_capacity(self.probabilities.len());
        for &p in &self.probabilities {
            let mut total = 0i64;
            for _ in 0..self.trials {
                let graph = random_graph(self.vertices, p, &mut rng);
                total = total.wrapping_add(count_triangles(&graph, self.threshold)?);
            }
            let mean_count = i64::try_from(self.trials)
                .ok()
                .and_then(|trials| total.checked_div(trials))
                .unwrap_or(0);
            let expected = expected_triangles(self.vertices, p);
            tracing::info!(p, mean_count, expected, "triangle experiment");
            reports.push(TriangleReport {
                p,
                mean_count,
                expected,
            });
        }
        Ok(reports)
    }
}
