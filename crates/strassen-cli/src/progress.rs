//! Progress bar for crossover sweeps.

use indicatif::{ProgressBar, ProgressStyle};

use strassen_calibration::SweepPoint;

/// Progress bar advanced once per measured sweep point.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a bar for `total` points; a hidden bar when `quiet`.
    #[must_use]
    pub fn new(total: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };
        let style = ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }

    /// Record a finished point.
    pub fn on_point(&self, point: &SweepPoint) {
        self.bar
            .set_message(format!("dim {} threshold {}", point.dim, point.threshold));
        self.bar.inc(1);
    }

    /// Number of points recorded so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_counts_points() {
        let progress = SweepProgress::new(2, true);
        let point = SweepPoint {
            dim: 8,
            threshold: 2,
            mean_ns: 1,
            median_ns: 1,
            min_ns: 1,
            max_ns: 1,
        };
        progress.on_point(&point);
        progress.on_point(&point);
        assert_eq!(progress.position(), 2);
        progress.finish();
    }
}
