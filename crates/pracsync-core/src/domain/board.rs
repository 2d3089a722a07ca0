//! Board items as delivered by the remote project board.

use std::collections::HashMap;

/// Board holding the current practice catalogue.
pub const DEFAULT_BOARD_ID: &str = "18393634822";

/// Number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// One unit of remote content: a practice with its per-slot values.
///
/// Items are created by a [`BoardSource`](crate::ports::BoardSource) while
/// paging through a board and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardItem {
    /// Remote item identifier.
    pub id: String,
    /// Display name of the practice.
    pub name: String,
    /// Title of the group (series) the item belongs to.
    pub group: Option<String>,
    /// Raw slot values keyed by column id. Null values are omitted.
    pub values: HashMap<String, String>,
}

impl BoardItem {
    /// Create an item with no slot values.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: None,
            values: HashMap::new(),
        }
    }

    /// Set the group title.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Attach a raw value to a slot.
    #[must_use]
    pub fn with_value(mut self, slot_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(slot_id.into(), value.into());
        self
    }

    /// Raw value stored for a slot, if any.
    pub fn value(&self, slot_id: &str) -> Option<&str> {
        self.values.get(slot_id).map(String::as_str)
    }

    /// Whether the item belongs to the group with exactly this title.
    pub fn in_group(&self, title: &str) -> bool {
        self.group.as_deref() == Some(title)
    }
}

/// Parameters for fetching one page of board items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Board to list.
    pub board_id: String,
    /// Maximum number of items per page.
    pub limit: u32,
    /// Continuation token from the previous page, `None` for the first page.
    pub cursor: Option<String>,
}

impl PageRequest {
    /// Request for the first page of a board.
    pub fn first(board_id: impl Into<String>, limit: u32) -> Self {
        Self {
            board_id: board_id.into(),
            limit,
            cursor: None,
        }
    }

    /// Request for the page following `cursor`.
    #[must_use]
    pub fn next(&self, cursor: impl Into<String>) -> Self {
        Self {
            board_id: self.board_id.clone(),
            limit: self.limit,
            cursor: Some(cursor.into()),
        }
    }
}

/// A single page of board items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardPage {
    /// Items on this page, in board order.
    pub items: Vec<BoardItem>,
    /// Continuation token, `None` when this is the last page.
    pub cursor: Option<String>,
}

impl BoardPage {
    /// Whether paging should stop after this page.
    pub fn is_last(&self) -> bool {
        self.items.is_empty() || self.cursor.as_deref().is_none_or(str::is_empty)
    }
}
