//! Static slot configuration.

/// Maps a board column to the category used in file names and the short
/// tag shown in progress output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDescriptor {
    /// Column id on the board (e.g. `file_mkza76s9`).
    pub column_id: &'static str,
    /// Category used in the output file name (e.g. `Short_English`).
    pub category: &'static str,
    /// Short type tag (e.g. `5min_EN`).
    pub tag: &'static str,
}

impl SlotDescriptor {
    /// Create a slot descriptor.
    pub const fn new(column_id: &'static str, category: &'static str, tag: &'static str) -> Self {
        Self {
            column_id,
            category,
            tag,
        }
    }
}

/// File columns of the practice board, in processing order.
pub const PRACTICE_SLOTS: &[SlotDescriptor] = &[
    SlotDescriptor::new("file_mkza76s9", "Short_English", "5min_EN"),
    SlotDescriptor::new("file_mkzapzwb", "Short_Spanish", "5min_ES"),
    SlotDescriptor::new("file_mkzanc1b", "Long_English", "10min_EN"),
    SlotDescriptor::new("file_mkzacaj0", "Long_Spanish", "10min_ES"),
    SlotDescriptor::new("file_mkzan21e", "Cover_Photo", "Cover"),
];
