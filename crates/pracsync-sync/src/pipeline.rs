//! The orchestrator: fetch, filter, iterate, finalize.
//!
//! A run moves through `Fetching -> Filtering -> IteratingItems ->
//! Finalizing` without looping back. Only a failure while fetching aborts
//! the run; everything after that degrades to per-slot outcomes.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use pracsync_core::{BoardItem, BoardPortError, BoardSource, PageRequest, Tally};
use tokio_util::sync::CancellationToken;

use crate::config::SyncConfig;
use crate::error::{Interrupted, ReportError, SyncError};
use crate::extract::extract_file;
use crate::filter::filter_by_group;
use crate::observer::SyncObserver;
use crate::report::{ReportBuilder, ReportRecord};
use crate::transfer::{ContentFetcher, SeriesDestination, SlotTarget, TransferEngine};

/// The result of one sync run.
#[derive(Debug)]
pub struct SyncRun {
    /// Group label that was synchronized.
    pub series: String,
    /// Directory the series was written to.
    pub output_dir: PathBuf,
    /// Number of board items in the series.
    pub items_selected: usize,
    pub tally: Tally,
    pub records: Vec<ReportRecord>,
    /// Where the report was written, if it was.
    pub report_path: Option<PathBuf>,
    /// Why the report could not be written. Downloads are unaffected.
    pub report_error: Option<ReportError>,
    /// The run was cancelled before every item was processed.
    pub interrupted: bool,
}

impl SyncRun {
    /// Whether the run reached item iteration.
    pub const fn processed_items(&self) -> bool {
        self.items_selected > 0
    }
}

/// Drives a sync run against a board and a content fetcher.
pub struct SyncPipeline {
    board: Arc<dyn BoardSource>,
    engine: TransferEngine,
    config: SyncConfig,
}

impl SyncPipeline {
    pub fn new(
        board: Arc<dyn BoardSource>,
        fetcher: Arc<dyn ContentFetcher>,
        config: SyncConfig,
    ) -> Self {
        let engine = TransferEngine::new(Arc::clone(&board), fetcher, config.read_timeout);
        Self {
            board,
            engine,
            config,
        }
    }

    pub const fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Fetch every item on the board, page by page.
    ///
    /// Stops on an empty page or a page without a cursor. A cursor equal to
    /// the one just used would loop forever and is rejected.
    pub async fn fetch_items(
        &self,
        observer: &mut dyn SyncObserver,
        cancel: &CancellationToken,
    ) -> Result<Vec<BoardItem>, SyncError> {
        let mut request = PageRequest::first(&self.config.board_id, self.config.page_size);
        let mut items = Vec::new();
        let mut page_number = 0;

        loop {
            let page = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(SyncError::Interrupted),
                page = self.board.fetch_page(&request) => page?,
            };
            page_number += 1;
            tracing::debug!(
                page = page_number,
                items = page.items.len(),
                has_cursor = page.cursor.is_some(),
                "Fetched board page"
            );
            observer.page_fetched(page_number, page.items.len());

            let last = page.is_last();
            items.extend(page.items);
            let cursor = match page.cursor {
                Some(cursor) if !last => cursor,
                _ => break,
            };
            if request.cursor.as_deref() == Some(cursor.as_str()) {
                return Err(BoardPortError::InvalidResponse {
                    message: format!("pagination cursor did not advance ({cursor})"),
                }
                .into());
            }
            request = request.next(cursor);
        }

        tracing::info!(items = items.len(), pages = page_number, "Board listing complete");
        Ok(items)
    }

    /// Synchronize the series whose group title is `series_label`.
    pub async fn run(
        &self,
        series_label: &str,
        observer: &mut dyn SyncObserver,
        cancel: &CancellationToken,
    ) -> Result<SyncRun, SyncError> {
        let started = Utc::now();
        let destination = SeriesDestination::plan(&self.config.output_root, series_label);

        let items = filter_by_group(self.fetch_items(observer, cancel).await?, series_label);
        observer.items_selected(series_label, items.len());
        tracing::info!(series = series_label, items = items.len(), "Series selected");

        let mut run = SyncRun {
            series: series_label.to_string(),
            output_dir: destination.series_dir.clone(),
            items_selected: items.len(),
            tally: Tally::default(),
            records: Vec::new(),
            report_path: None,
            report_error: None,
            interrupted: false,
        };
        if items.is_empty() {
            return Ok(run);
        }

        destination
            .ensure_dir()
            .map_err(|source| SyncError::OutputDir {
                path: destination.series_dir.clone(),
                source,
            })?;

        let mut report = ReportBuilder::new();
        for (index, item) in items.iter().enumerate() {
            if self
                .process_item(&destination, index + 1, item, &mut report, observer, cancel)
                .await
                .is_err()
            {
                tracing::info!(item = %item.name, "Run interrupted");
                run.interrupted = true;
                break;
            }
        }

        if self.config.write_report {
            let path = destination.report_path(series_label, started);
            match report.write_csv(&path) {
                Ok(()) => run.report_path = Some(path),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Report not written");
                    run.report_error = Some(e);
                }
            }
        }

        (run.records, run.tally) = report.into_parts();
        tracing::info!(
            total = run.tally.total_files,
            downloaded = run.tally.downloaded,
            skipped = run.tally.skipped,
            failed = run.tally.failed,
            "Sync finished"
        );
        Ok(run)
    }

    async fn process_item(
        &self,
        destination: &SeriesDestination,
        sequence: usize,
        item: &BoardItem,
        report: &mut ReportBuilder,
        observer: &mut dyn SyncObserver,
        cancel: &CancellationToken,
    ) -> Result<(), Interrupted> {
        observer.item_started(sequence, &item.name);
        let mut files_found = false;

        for slot in &self.config.slots {
            if cancel.is_cancelled() {
                return Err(Interrupted);
            }
            let Some(descriptor) = item.value(slot.column_id).and_then(extract_file) else {
                continue;
            };
            files_found = true;

            let target = SlotTarget {
                sequence,
                item_name: &item.name,
                slot,
            };
            let outcome = self
                .engine
                .transfer(destination, target, &descriptor, cancel)
                .await?;
            observer.slot_finished(slot, &outcome);
            report.record(
                sequence,
                &item.name,
                slot,
                descriptor.declared_name_or_empty(),
                &outcome,
            );
        }

        if !files_found {
            tracing::debug!(item = %item.name, "No files available");
            observer.item_without_files(sequence, &item.name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;
    use crate::transfer::testing::{CannedContent, FakeFetcher};
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;
    use pracsync_core::{BoardPage, BoardPortResult, OutcomeKind, SlotDescriptor, TransferOutcome};

    mock! {
        Board {}

        #[async_trait]
        impl BoardSource for Board {
            async fn fetch_page(&self, request: &PageRequest) -> BoardPortResult<BoardPage>;
            async fn resolve_asset_url(&self, asset_id: u64) -> Option<String>;
        }
    }

    fn file_value(name: &str, url: &str) -> String {
        format!(r#"{{"files":[{{"name":"{name}","url":"{url}"}}]}}"#)
    }

    fn page(items: Vec<BoardItem>, cursor: Option<&str>) -> BoardPage {
        BoardPage {
            items,
            cursor: cursor.map(String::from),
        }
    }

    fn items(prefix: &str, count: usize) -> Vec<BoardItem> {
        (0..count)
            .map(|i| BoardItem::new(format!("{prefix}{i}"), format!("Item {prefix}{i}")))
            .collect()
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl SyncObserver for Recorder {
        fn page_fetched(&mut self, page: usize, items: usize) {
            self.events.push(format!("page {page}: {items}"));
        }

        fn item_started(&mut self, sequence: usize, item_name: &str) {
            self.events.push(format!("item {sequence:03}_{item_name}"));
        }

        fn slot_finished(&mut self, slot: &SlotDescriptor, outcome: &TransferOutcome) {
            self.events.push(format!("{} {}", slot.tag, outcome.kind));
        }

        fn item_without_files(&mut self, _sequence: usize, _item_name: &str) {
            self.events.push("no files".to_string());
        }
    }

    fn pipeline(board: MockBoard, fetcher: FakeFetcher, root: &std::path::Path) -> SyncPipeline {
        SyncPipeline::new(
            Arc::new(board),
            Arc::new(fetcher),
            SyncConfig::new().with_output_root(root).with_page_size(2),
        )
    }

    #[tokio::test]
    async fn test_pagination_stops_at_page_without_cursor() {
        let temp = tempfile::tempdir().unwrap();
        let mut board = MockBoard::new();
        board
            .expect_fetch_page()
            .withf(|r| r.cursor.is_none())
            .times(1)
            .returning(|_| Ok(page(items("a", 2), Some("c1"))));
        board
            .expect_fetch_page()
            .withf(|r| r.cursor.as_deref() == Some("c1"))
            .times(1)
            .returning(|_| Ok(page(items("b", 2), Some("c2"))));
        board
            .expect_fetch_page()
            .withf(|r| r.cursor.as_deref() == Some("c2"))
            .times(1)
            .returning(|_| Ok(page(items("c", 1), None)));

        let pipeline = pipeline(board, FakeFetcher::new(), temp.path());
        let mut recorder = Recorder::default();
        let fetched = pipeline
            .fetch_items(&mut recorder, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(fetched.len(), 5);
        assert_eq!(recorder.events, vec!["page 1: 2", "page 2: 2", "page 3: 1"]);
    }

    #[tokio::test]
    async fn test_pagination_stops_at_empty_page() {
        let temp = tempfile::tempdir().unwrap();
        let mut board = MockBoard::new();
        board
            .expect_fetch_page()
            .withf(|r| r.cursor.is_none())
            .times(1)
            .returning(|_| Ok(page(items("a", 2), Some("c1"))));
        board
            .expect_fetch_page()
            .withf(|r| r.cursor.as_deref() == Some("c1"))
            .times(1)
            .returning(|_| Ok(page(Vec::new(), Some("c2"))));

        let pipeline = pipeline(board, FakeFetcher::new(), temp.path());
        let fetched = pipeline
            .fetch_items(&mut NoopObserver, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(fetched.len(), 2);
    }

    #[tokio::test]
    async fn test_repeated_cursor_is_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let mut board = MockBoard::new();
        board
            .expect_fetch_page()
            .times(2)
            .returning(|_| Ok(page(items("a", 2), Some("same"))));

        let pipeline = pipeline(board, FakeFetcher::new(), temp.path());
        let err = pipeline
            .fetch_items(&mut NoopObserver, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SyncError::Board(BoardPortError::InvalidResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_listing_failure_aborts_before_any_download() {
        let temp = tempfile::tempdir().unwrap();
        let mut board = MockBoard::new();
        board
            .expect_fetch_page()
            .times(1)
            .returning(|_| Err(BoardPortError::RateLimited));
        board.expect_resolve_asset_url().never();
        let fetcher = FakeFetcher::new();

        let pipeline = pipeline(board, fetcher.clone(), temp.path());
        let err = pipeline
            .run("Elementary Core", &mut NoopObserver, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::Board(BoardPortError::RateLimited)));
        assert!(fetcher.requests().is_empty());
        assert!(!temp.path().join("Elementary_Core").exists());
    }

    #[tokio::test]
    async fn test_no_matching_items_ends_without_report() {
        let temp = tempfile::tempdir().unwrap();
        let mut board = MockBoard::new();
        board.expect_fetch_page().times(1).returning(|_| {
            Ok(page(
                vec![BoardItem::new("1", "Rain").with_group("Sound Practices")],
                None,
            ))
        });

        let pipeline = pipeline(board, FakeFetcher::new(), temp.path());
        let run = pipeline
            .run("Elementary Core", &mut NoopObserver, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(run.items_selected, 0);
        assert!(!run.processed_items());
        assert!(run.report_path.is_none());
        assert!(!run.output_dir.exists());
    }

    #[tokio::test]
    async fn test_asset_resolution_goes_through_board() {
        let temp = tempfile::tempdir().unwrap();
        let mut board = MockBoard::new();
        board.expect_fetch_page().times(1).returning(|_| {
            Ok(page(
                vec![
                    BoardItem::new("1", "Calm")
                        .with_group("Elementary Core")
                        .with_value("file_mkza76s9", r#"{"files":[{"name":"calm.mp3","assetId":11}]}"#)
                        .with_value("file_mkzan21e", r#"{"files":[{"name":"calm.jpg","assetId":12}]}"#),
                ],
                None,
            ))
        });
        board
            .expect_resolve_asset_url()
            .with(eq(11))
            .times(1)
            .returning(|_| Some("https://files/calm.mp3".to_string()));
        board
            .expect_resolve_asset_url()
            .with(eq(12))
            .times(1)
            .returning(|_| None);
        let fetcher = FakeFetcher::new().with("https://files/calm.mp3", CannedContent::Chunks(vec!["mp3"]));

        let pipeline = pipeline(board, fetcher, temp.path());
        let mut recorder = Recorder::default();
        let run = pipeline
            .run("Elementary Core", &mut recorder, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(run.tally.downloaded, 1);
        assert_eq!(run.tally.failed, 1);
        assert_eq!(run.records[1].status, OutcomeKind::FailedResolve);
        assert_eq!(
            recorder.events[1..],
            [
                "item 001_Calm".to_string(),
                "5min_EN Downloaded".to_string(),
                "Cover Failed (unresolved asset)".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_slots_follow_configured_order() {
        let temp = tempfile::tempdir().unwrap();
        let mut board = MockBoard::new();
        board.expect_fetch_page().times(1).returning(|_| {
            Ok(page(
                vec![
                    BoardItem::new("1", "Calm")
                        .with_group("Elementary Core")
                        .with_value("file_mkzan21e", file_value("c.jpg", "https://cdn/c.jpg"))
                        .with_value("file_mkzacaj0", file_value("l.mp3", "https://cdn/l.mp3"))
                        .with_value("file_mkza76s9", file_value("s.mp3", "https://cdn/s.mp3")),
                ],
                None,
            ))
        });
        let fetcher = FakeFetcher::new()
            .with("https://cdn/c.jpg", CannedContent::Chunks(vec!["c"]))
            .with("https://cdn/l.mp3", CannedContent::Chunks(vec!["l"]))
            .with("https://cdn/s.mp3", CannedContent::Chunks(vec!["s"]));

        let pipeline = pipeline(board, fetcher.clone(), temp.path());
        pipeline
            .run("Elementary Core", &mut NoopObserver, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            fetcher.requests(),
            vec!["https://cdn/s.mp3", "https://cdn/l.mp3", "https://cdn/c.jpg"]
        );
    }

    #[tokio::test]
    async fn test_report_written_next_to_downloads() {
        let temp = tempfile::tempdir().unwrap();
        let mut board = MockBoard::new();
        board.expect_fetch_page().times(1).returning(|_| {
            Ok(page(
                vec![
                    BoardItem::new("1", "Calm")
                        .with_group("Elementary Core")
                        .with_value("file_mkza76s9", file_value("s.mp3", "https://cdn/s.mp3")),
                ],
                None,
            ))
        });
        let fetcher = FakeFetcher::new().with("https://cdn/s.mp3", CannedContent::Chunks(vec!["s"]));
        let pipeline = pipeline(board, fetcher, temp.path());

        let run = pipeline
            .run("Elementary Core", &mut NoopObserver, &CancellationToken::new())
            .await
            .unwrap();

        let series_dir = temp.path().join("Elementary_Core");
        assert_eq!(run.output_dir, series_dir);
        assert_eq!(run.tally.downloaded, 1);
        assert!(series_dir.join("001_Calm_Short_English.mp3").exists());
        let report_path = run.report_path.unwrap();
        assert!(report_path.starts_with(&series_dir));
        assert!(
            report_path
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("Elementary_Core_download_report_")
        );
        assert!(run.report_error.is_none());
    }

    #[tokio::test]
    async fn test_report_can_be_disabled() {
        let temp = tempfile::tempdir().unwrap();
        let mut board = MockBoard::new();
        board.expect_fetch_page().times(1).returning(|_| {
            Ok(page(
                vec![BoardItem::new("1", "Calm").with_group("Elementary Core")],
                None,
            ))
        });
        let pipeline = SyncPipeline::new(
            Arc::new(board),
            Arc::new(FakeFetcher::new()),
            SyncConfig::new().with_output_root(temp.path()).without_report(),
        );

        let run = pipeline
            .run("Elementary Core", &mut NoopObserver, &CancellationToken::new())
            .await
            .unwrap();

        assert!(run.processed_items());
        assert!(run.report_path.is_none());
        assert_eq!(std::fs::read_dir(&run.output_dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_run_before_listing() {
        let temp = tempfile::tempdir().unwrap();
        let mut board = MockBoard::new();
        board.expect_fetch_page().never();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let pipeline = pipeline(board, FakeFetcher::new(), temp.path());
        let err = pipeline
            .run("Elementary Core", &mut NoopObserver, &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::Interrupted));
    }
}
