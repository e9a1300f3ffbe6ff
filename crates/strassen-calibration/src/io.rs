//! Sweep report persistence (JSON).

use std::io;
use std::path::Path;

use crate::sweep::{SweepReport, REPORT_VERSION};

/// Write a report as pretty-printed JSON.
pub fn save_report(report: &SweepReport, path: &Path) -> io::Result<()> {
    let content = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    std::fs::write(path, content)
}

/// Read a report previously written by [`save_report`].
///
/// Reports with a different format version are rejected as invalid data.
pub fn load_report(path: &Path) -> io::Result<SweepReport> {
    let content = std::fs::read_to_string(path)?;
    let report: SweepReport = serde_json::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if report.version != REPORT_VERSION {
        tracing::info!(
            found = report.version,
            expected = REPORT_VERSION,
            "sweep report version mismatch"
        );
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("unsupported report version {}", report.version),
        ));
    }
    Ok(report)
}
