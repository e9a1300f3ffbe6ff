//! Crossover sweep: time Strassen multiplication across dimensions and
//! thresholds to find where the classical product stops paying off.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use strassen_core::constants::{DEFAULT_SEED, DEFAULT_SWEEP_DIMS, DEFAULT_SWEEP_THRESHOLDS};
use strassen_core::generate::random_matrix;
use strassen_core::{strassen, MatrixError, DEFAULT_MAX_ELEMENT};

use crate::runner::benchmark_detailed;

/// Current report format version.
pub const REPORT_VERSION: u32 = 1;

/// Parameters of a crossover sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossoverSweep {
    pub dims: Vec<usize>,
    pub thresholds: Vec<usize>,
    pub seed: u64,
    pub warmup: u32,
    pub iterations: u32,
}

impl Default for CrossoverSweep {
    fn default() -> Self {
        Self {
            dims: DEFAULT_SWEEP_DIMS.to_vec(),
            thresholds: DEFAULT_SWEEP_THRESHOLDS.to_vec(),
            seed: DEFAULT_SEED,
            warmup: 0,
            iterations: 1,
        }
    }
}

/// Timing for one (dimension, threshold) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub dim: usize,
    pub threshold: usize,
    pub mean_ns: u64,
    pub median_ns: u64,
    pub min_ns: u64,
    pub max_ns: u64,
}

/// All points measured by a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    pub version: u32,
    pub seed: u64,
    pub points: Vec<SweepPoint>,
}

impl SweepReport {
    /// Fastest threshold (by median) for each dimension, in ascending
    /// dimension order. Ties keep the smaller threshold.
    #[must_use]
    pub fn best_thresholds(&self) -> Vec<(usize, usize)> {
        let mut best: BTreeMap<usize, &SweepPoint> = BTreeMap::new();
        for point in &self.points {
            best.entry(point.dim)
                .and_modify(|current| {
                    if (point.median_ns, point.threshold) < (current.median_ns, current.threshold) {
                        *current = point;
                    }
                })
                .or_insert(point);
        }
        best.into_iter()
            .map(|(dim, point)| (dim, point.threshold))
            .collect()
    }
}

impl CrossoverSweep {
    /// Number of points this sweep will measure.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dims.len() * self.thresholds.len()
    }

    /// Whether the sweep has nothing to measure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run the sweep, calling `on_point` after each measurement.
    ///
    /// Operands for a dimension are generated once and reused for every
    /// threshold. Thresholds are validated before any timing starts.
    #[allow(clippy::cast_possible_truncation)]
    pub fn run<F>(&self, mut on_point: F) -> Result<SweepReport, MatrixError>
    where
        F: FnMut(&SweepPoint),
    {
        if let Some(&bad) = self.thresholds.iter().find(|&&t| t < 1) {
            return Err(MatrixError::InvalidThreshold(bad));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut points = Vec::with_capacity(self.len());
        for &dim in &self.dims {
            let a = random_matrix(dim, DEFAULT_MAX_ELEMENT, &mut rng);
            let b = random_matrix(dim, DEFAULT_MAX_ELEMENT, &mut rng);
            for &threshold in &self.thresholds {
                let mut outcome = Ok(());
                let result = benchmark_detailed(self.warmup, self.iterations, || {
                    match strassen::multiply(&a, &b, threshold) {
                        Ok(product) => {
                            std::hint::black_box(product);
                        }
                        Err(e) => outcome = Err(e),
                    }
                });
                outcome?;

                let point = SweepPoint {
                    dim,
                    threshold,
                    mean_ns: result.mean.as_nanos() as u64,
                    median_ns: result.median.as_nanos() as u64,
                    min_ns: result.min.as_nanos() as u64,
                    max_ns: result.max.as_nanos() as u64,
                };
                tracing::debug!(
                    dim,
                    threshold,
                    mean_ns = point.mean_ns,
                    median_ns = point.median_ns,
                    "sweep point measured"
                );
                on_point(&point);
                points.push(point);
            }
        }

        let report = SweepReport {
            version: REPORT_VERSION,
            seed: self.seed,
            points,
        };
        for (dim, threshold) in report.best_thresholds() {
            tracing::info!(dim, threshold, "fastest crossover threshold");
        }
        Ok(report)
    }
}
