use thiserror::Error;

/// Reasons a rename plan cannot be built. All of them are raised before any
/// file is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("no {list} found in album record")]
    NoEntries { list: &'static str },
    #[error("number of files in {dir}/ ({files}) doesn't match number of {list} in album record ({entries})")]
    CardinalityMismatch {
        dir: &'static str,
        list: &'static str,
        files: usize,
        entries: usize,
    },
    #[error("entry {number} has no usable title after sanitizing: {title:?}")]
    EmptyTitle { number: u32, title: String },
    #[error("two entries would be renamed to {name}")]
    DuplicateTarget { name: String },
}
