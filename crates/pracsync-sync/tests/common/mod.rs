//! Shared fakes for the pipeline integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use pracsync_core::{
    BoardItem, BoardPage, BoardPortResult, BoardSource, PageRequest, SlotDescriptor,
    TransferOutcome,
};
use pracsync_sync::{ContentFetcher, ContentStream, SyncObserver, TransferError, TransferResult};
use tokio_util::sync::CancellationToken;

pub const SHORT_EN: &str = "file_mkza76s9";
pub const SHORT_ES: &str = "file_mkzapzwb";
pub const LONG_EN: &str = "file_mkzanc1b";
pub const COVER: &str = "file_mkzan21e";

/// Slot value holding a single file with a direct URL.
pub fn url_file(name: &str, url: &str) -> String {
    serde_json::json!({ "files": [{ "name": name, "url": url }] }).to_string()
}

/// Board serving a fixed item list in a single page. Knows no assets.
pub struct StaticBoard {
    items: Vec<BoardItem>,
}

impl StaticBoard {
    pub const fn new(items: Vec<BoardItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl BoardSource for StaticBoard {
    async fn fetch_page(&self, _request: &PageRequest) -> BoardPortResult<BoardPage> {
        Ok(BoardPage {
            items: self.items.clone(),
            cursor: None,
        })
    }

    async fn resolve_asset_url(&self, _asset_id: u64) -> Option<String> {
        None
    }
}

/// Observer keeping item-level events as text.
#[derive(Default)]
pub struct EventLog {
    pub events: Vec<String>,
}

impl SyncObserver for EventLog {
    fn item_started(&mut self, sequence: usize, item_name: &str) {
        self.events.push(format!("start {sequence} {item_name}"));
    }

    fn slot_finished(&mut self, slot: &SlotDescriptor, outcome: &TransferOutcome) {
        self.events.push(format!("{} {}", slot.tag, outcome.kind));
    }

    fn item_without_files(&mut self, sequence: usize, item_name: &str) {
        self.events.push(format!("no files {sequence} {item_name}"));
    }
}

/// How the fetcher answers one URL.
#[derive(Clone)]
pub enum Serve {
    Body(&'static str),
    Status(u16),
    /// Cancel the run and then never deliver a byte.
    CancelAndStall(CancellationToken),
}

/// Fetcher serving canned responses and logging requested URLs.
#[derive(Clone, Default)]
pub struct CannedFetcher {
    routes: Arc<Mutex<HashMap<String, Serve>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl CannedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, url: &str, serve: Serve) -> Self {
        self.routes.lock().unwrap().insert(url.to_string(), serve);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentFetcher for CannedFetcher {
    async fn open(&self, url: &str) -> TransferResult<ContentStream> {
        self.requests.lock().unwrap().push(url.to_string());
        let serve = self.routes.lock().unwrap().get(url).cloned();
        match serve {
            Some(Serve::Body(body)) => {
                let chunk: TransferResult<Bytes> = Ok(Bytes::from_static(body.as_bytes()));
                Ok(Box::pin(futures_util::stream::iter([chunk])))
            }
            Some(Serve::Status(status)) => Err(TransferError::HttpStatus { status }),
            Some(Serve::CancelAndStall(token)) => {
                token.cancel();
                Ok(Box::pin(futures_util::stream::pending::<TransferResult<Bytes>>()))
            }
            None => Err(TransferError::HttpStatus { status: 404 }),
        }
    }
}
