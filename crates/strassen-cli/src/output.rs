//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use strassen_calibration::SweepReport;
use strassen_core::graph::TriangleReport;
use strassen_core::Matrix;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write the main diagonal, one entry per line.
pub fn write_diagonal(out: &mut dyn Write, m: &Matrix) -> io::Result<()> {
    for value in m.diagonal() {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Write every row as space-separated values.
pub fn write_matrix(out: &mut dyn Write, m: &Matrix) -> io::Result<()> {
    write!(out, "{m}")
}

/// Write a sweep report as a table followed by the best threshold per
/// dimension.
pub fn write_sweep_table(out: &mut dyn Write, report: &SweepReport) -> io::Result<()> {
    writeln!(
        out,
        "{:>8} {:>10} {:>12} {:>12}",
        "dim", "threshold", "mean", "median"
    )?;
    writeln!(out, "{:-<45}", "")?;
    for p in &report.points {
        writeln!(
            out,
            "{:>8} {:>10} {:>12} {:>12}",
            p.dim,
            p.threshold,
            format_duration(Duration::from_nanos(p.mean_ns)),
            format_duration(Duration::from_nanos(p.median_ns))
        )?;
    }
    let best = report.best_thresholds();
    if !best.is_empty() {
        writeln!(out)?;
        writeln!(out, "Best threshold per dimension:")?;
        for (dim, threshold) in best {
            writeln!(out, "  {dim:>8}: {threshold}")?;
        }
    }
    Ok(())
}

/// Write triangle experiment results, one probability per line.
pub fn write_triangle_table(out: &mut dyn Write, reports: &[TriangleReport]) -> io::Result<()> {
    writeln!(out, "{:>6} {:>12} {:>14}", "p", "actual", "expected")?;
    writeln!(out, "{:-<34}", "")?;
    for r in reports {
        writeln!(out, "{:>6.2} {:>12} {:>14.1}", r.p, r.mean_count, r.expected)?;
    }
    Ok(())
}
