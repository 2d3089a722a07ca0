//! End-of-run summary.

use std::fmt::Write;
use std::path::Path;

use pracsync_sync::SyncRun;

/// Width of the `=` rules framing the summary.
pub const SEPARATOR_WIDTH: usize = 60;

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "=".repeat(width));
}

/// Render the summary block for a finished or interrupted run.
pub fn format_summary(run: &SyncRun) -> String {
    let rule = "=".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "DOWNLOAD SUMMARY");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Total files found:     {}", run.tally.total_files);
    let _ = writeln!(out, "Downloaded:            {}", run.tally.downloaded);
    let _ = writeln!(out, "Skipped (exist):       {}", run.tally.skipped);
    let _ = writeln!(out, "Failed:                {}", run.tally.failed);
    if let Some(path) = &run.report_path {
        let _ = writeln!(out, "\nReport saved to: {}", display_absolute(path));
    }
    let _ = writeln!(out, "\nFiles saved to: {}", display_absolute(&run.output_dir));
    out
}

fn display_absolute(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pracsync_core::Tally;
    use pracsync_sync::SyncRun;
    use std::path::PathBuf;

    fn run(report: Option<&str>) -> SyncRun {
        SyncRun {
            series: "Elementary Core".to_string(),
            output_dir: PathBuf::from("/data/Elementary_Core"),
            items_selected: 2,
            tally: Tally {
                total_files: 2,
                downloaded: 1,
                skipped: 1,
                failed: 0,
            },
            records: Vec::new(),
            report_path: report.map(PathBuf::from),
            report_error: None,
            interrupted: false,
        }
    }

    #[test]
    fn test_summary_counts() {
        let text = format_summary(&run(None));
        assert!(text.contains("DOWNLOAD SUMMARY"));
        assert!(text.contains("Total files found:     2\n"));
        assert!(text.contains("Downloaded:            1\n"));
        assert!(text.contains("Skipped (exist):       1\n"));
        assert!(text.contains("Failed:                0\n"));
        assert!(text.contains("Files saved to: /data/Elementary_Core"));
        assert!(!text.contains("Report saved to"));
    }

    #[test]
    fn test_summary_mentions_report() {
        let text = format_summary(&run(Some("/data/Elementary_Core/r.csv")));
        assert!(text.contains("Report saved to: /data/Elementary_Core/r.csv"));
    }
}
