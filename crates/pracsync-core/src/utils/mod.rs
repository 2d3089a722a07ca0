//! Shared utility functions.

mod filename;

pub use filename::{file_extension, sanitize_filename, target_file_name};
