//! Default thresholds and experiment parameters.

/// Default crossover dimension below which the classical product is used.
pub const DEFAULT_THRESHOLD: usize = 32;

/// Upper bound (exclusive) for randomly generated matrix entries.
pub const DEFAULT_MAX_ELEMENT: i64 = 1_000_000;

/// Matrix dimensions swept by the crossover experiment.
/// Includes odd sizes to exercise the padding path.
pub const DEFAULT_SWEEP_DIMS: [usize; 6] = [512, 1024, 2048, 513, 1025, 2049];

/// Crossover thresholds tried for every swept dimension.
pub const DEFAULT_SWEEP_THRESHOLDS: [usize; 6] = [8, 16, 32, 64, 128, 256];

/// Number of vertices in triangle-counting experiments.
pub const DEFAULT_TRIANGLE_VERTICES: usize = 1024;

/// Edge probabilities used by triangle-counting experiments.
pub const DEFAULT_EDGE_PROBABILITIES: [f64; 5] = [0.01, 0.02, 0.03, 0.04, 0.05];

/// Random graphs generated per edge probability.
pub const DEFAULT_TRIANGLE_TRIALS: usize = 5;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0x5EED_5742_A55E;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_dims_include_odd_sizes() {
        assert!(DEFAULT_SWEEP_DIMS.iter().any(|d| d % 2 == 1));
    }

    #[test]
    fn sweep_thresholds_are_positive() {
        assert!(DEFAULT_SWEEP_THRESHOLDS.iter().all(|&t| t >= 1));
    }

    #[test]
    fn default_threshold_is_in_sweep() {
        assert!(DEFAULT_SWEEP_THRESHOLDS.contains(&DEFAULT_THRESHOLD));
    }
}
