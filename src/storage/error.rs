/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing the store file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization or deserialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// A stored value exists but cannot be interpreted.
    #[error("corrupt value for key {key}: {reason}")]
    CorruptValue {
        /// The key holding the unreadable value.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
}
