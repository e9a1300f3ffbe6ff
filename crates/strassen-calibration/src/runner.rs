//! Benchmark runner for crossover sweeps.

use std::time::{Duration, Instant};

/// Run `f` after a warmup phase and summarize the measured durations.
pub fn benchmark_detailed<F>(warmup_iters: u32, measure_iters: u32, mut f: F) -> BenchmarkResult
where
    F: FnMut(),
{
    for _ in 0..warmup_iters {
        f();
    }

    let measure_iters = measure_iters.max(1);
    let mut durations = Vec::with_capacity(measure_iters as usize);
    for _ in 0..measure_iters {
        let start = Instant::now();
        f();
        durations.push(start.elapsed());
    }

    durations.sort();
    let min = durations.first().copied().unwrap_or_default();
    let max = durations.last().copied().unwrap_or_default();
    let mid = durations.len() / 2;
    let median = if durations.len() % 2 == 1 {
        durations[mid]
    } else {
        (durations[mid - 1] + durations[mid]) / 2
    };
    let total: Duration = durations.iter().sum();

    BenchmarkResult {
        mean: total / measure_iters,
        median,
        min,
        max,
    }
}

/// Summary of one benchmarked closure.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_of_statistics() {
        let result = benchmark_detailed(2, 5, || {
            std::hint::black_box(2 + 2);
        });
        assert!(result.min <= result.median);
        assert!(result.min <= result.mean && result.mean <= result.max);
        assert!(result.median <= result.max);
        assert!(result.mean.as_nanos() < 1_000_000);
    }

    #[test]
    fn zero_iterations_measures_once() {
        let mut calls = 0;
        let result = benchmark_detailed(0, 0, || calls += 1);
        assert_eq!(calls, 1);
        assert_eq!(result.min, result.max);
    }

    #[test]
    fn warmup_calls_are_not_measured() {
        let mut calls = 0;
        benchmark_detailed(3, 4, || calls += 1);
        assert_eq!(calls, 7);
    }
}
