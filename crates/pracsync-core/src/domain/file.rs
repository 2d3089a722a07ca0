//! File references resolved from a single board slot.

/// Where the bytes of a file can be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLocator {
    /// Directly fetchable URL.
    Url(String),
    /// Opaque asset handle that must be resolved to a URL first.
    Asset(u64),
}

impl FileLocator {
    /// Whether a follow-up resolution call is needed before fetching.
    pub const fn needs_resolution(&self) -> bool {
        matches!(self, Self::Asset(_))
    }
}

/// A file referenced by one slot of one board item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// How to obtain the file.
    pub locator: FileLocator,
    /// Filename declared by the uploader, if any.
    pub declared_name: Option<String>,
}

impl FileDescriptor {
    /// Descriptor for a direct URL.
    pub fn url(url: impl Into<String>, declared_name: Option<String>) -> Self {
        Self {
            locator: FileLocator::Url(url.into()),
            declared_name,
        }
    }

    /// Descriptor for an asset handle.
    pub const fn asset(asset_id: u64, declared_name: Option<String>) -> Self {
        Self {
            locator: FileLocator::Asset(asset_id),
            declared_name,
        }
    }

    /// Declared name, or an empty string.
    pub fn declared_name_or_empty(&self) -> &str {
        self.declared_name.as_deref().unwrap_or("")
    }
}
