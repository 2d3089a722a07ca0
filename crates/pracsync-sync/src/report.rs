//! Per-attempt records, the running tally and the CSV report.

use std::path::Path;

use chrono::{DateTime, Utc};
use pracsync_core::{OutcomeKind, SlotDescriptor, Tally, TransferOutcome};
use serde::Serialize;

use crate::error::ReportError;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Report header row, in column order.
pub const REPORT_COLUMNS: [&str; 8] = [
    "Practice Number",
    "Practice Name",
    "File Type",
    "Original Filename",
    "Downloaded Filename",
    "Status",
    "File Size (MB)",
    "Timestamp",
];

/// One row of the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    /// 1-based position of the item within the series.
    pub practice_number: usize,
    /// Item display name.
    pub practice_name: String,
    /// Slot category, e.g. `Short_English`.
    pub file_type: String,
    /// Filename declared by the uploader, empty when none.
    pub original_filename: String,
    /// Name of the file inside the series directory.
    pub downloaded_filename: String,
    pub status: OutcomeKind,
    pub size_bytes: Option<u64>,
    pub timestamp: DateTime<Utc>,
}

// Serialized positionally under REPORT_COLUMNS.
#[derive(Serialize)]
struct CsvRow<'a> {
    practice_number: usize,
    practice_name: &'a str,
    file_type: &'a str,
    original_filename: &'a str,
    downloaded_filename: &'a str,
    status: &'static str,
    size_mb: String,
    timestamp: String,
}

impl<'a> From<&'a ReportRecord> for CsvRow<'a> {
    #[allow(clippy::cast_precision_loss)]
    fn from(record: &'a ReportRecord) -> Self {
        Self {
            practice_number: record.practice_number,
            practice_name: &record.practice_name,
            file_type: &record.file_type,
            original_filename: &record.original_filename,
            downloaded_filename: &record.downloaded_filename,
            status: record.status.label(),
            size_mb: record
                .size_bytes
                .map(|bytes| format!("{:.2}", bytes as f64 / BYTES_PER_MB))
                .unwrap_or_default(),
            timestamp: record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Accumulates outcomes for one run.
///
/// The builder is owned by the run and threaded through it explicitly; the
/// tally is updated exactly once per recorded outcome.
#[derive(Debug, Default, Clone)]
pub struct ReportBuilder {
    records: Vec<ReportRecord>,
    tally: Tally,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one (item, slot) attempt.
    pub fn record(
        &mut self,
        practice_number: usize,
        practice_name: &str,
        slot: &SlotDescriptor,
        original_filename: &str,
        outcome: &TransferOutcome,
    ) {
        self.tally.record(outcome.kind);
        self.records.push(ReportRecord {
            practice_number,
            practice_name: practice_name.to_string(),
            file_type: slot.category.to_string(),
            original_filename: original_filename.to_string(),
            downloaded_filename: outcome.file_name.clone(),
            status: outcome.kind,
            size_bytes: outcome.size_bytes,
            timestamp: outcome.timestamp,
        });
    }

    pub const fn tally(&self) -> Tally {
        self.tally
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    /// Consume the builder, returning the records and the final tally.
    pub fn into_parts(self) -> (Vec<ReportRecord>, Tally) {
        (self.records, self.tally)
    }

    /// Write all records to `path` as CSV with a header row.
    pub fn write_csv(&self, path: &Path) -> Result<(), ReportError> {
        write_records(&self.records, path)
    }
}

/// Write `records` to `path` as CSV with a header row.
///
/// The header is always written, even when there are no records.
pub fn write_records(records: &[ReportRecord], path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(REPORT_COLUMNS)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pracsync_core::PRACTICE_SLOTS;

    fn sample() -> ReportBuilder {
        let mut builder = ReportBuilder::new();
        builder.record(
            1,
            "Body Scan",
            &PRACTICE_SLOTS[0],
            "body scan.mp3",
            &TransferOutcome::downloaded("001_Body_Scan_Short_English.mp3", 3 * 1024 * 1024),
        );
        builder.record(
            1,
            "Body Scan",
            &PRACTICE_SLOTS[4],
            "",
            &TransferOutcome::transfer_failed("001_Body_Scan_Cover_Photo.jpg", "HTTP 500"),
        );
        builder
    }

    #[test]
    fn test_record_updates_tally() {
        let builder = sample();
        assert_eq!(
            builder.tally(),
            Tally {
                total_files: 2,
                downloaded: 1,
                skipped: 0,
                failed: 1,
            }
        );
        assert_eq!(builder.records().len(), 2);
        assert_eq!(builder.records()[1].file_type, "Cover_Photo");
    }

    #[test]
    fn test_write_csv_columns_and_rows() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("report.csv");
        sample().write_csv(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Practice Number,Practice Name,File Type,Original Filename,Downloaded Filename,Status,File Size (MB),Timestamp"
        );
        assert!(lines[1].starts_with(
            "1,Body Scan,Short_English,body scan.mp3,001_Body_Scan_Short_English.mp3,Downloaded,3.00,"
        ));
        assert!(lines[2].contains(",Failed (transfer),,"));
    }

    #[test]
    fn test_every_row_matches_header_width() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("report.csv");
        sample().write_csv(&path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(header, REPORT_COLUMNS);
        for row in reader.records() {
            assert_eq!(row.unwrap().len(), REPORT_COLUMNS.len());
        }
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("empty.csv");
        ReportBuilder::new().write_csv(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing").join("report.csv");
        assert!(sample().write_csv(&path).is_err());
    }
}
