//! Destination path planning for a series.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use pracsync_core::sanitize_filename;

/// The directory one series is synchronized into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesDestination {
    /// `<output root>/<sanitized series label>`
    pub series_dir: PathBuf,
}

impl SeriesDestination {
    /// Plan the destination for a series under `output_root`.
    pub fn plan(output_root: &Path, series_label: &str) -> Self {
        Self {
            series_dir: output_root.join(sanitize_filename(series_label)),
        }
    }

    /// Ensure the series directory exists, creating it if necessary.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.series_dir)
    }

    /// Full path for a file inside the series directory.
    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.series_dir.join(file_name)
    }

    /// Path of the report for a run of `series_label` started at `started`.
    pub fn report_path(&self, series_label: &str, started: DateTime<Utc>) -> PathBuf {
        self.series_dir.join(format!(
            "{}_download_report_{}.csv",
            sanitize_filename(series_label),
            started.format("%Y%m%d_%H%M%S")
        ))
    }
}
