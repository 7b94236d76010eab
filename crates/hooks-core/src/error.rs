//! Error types for hooks-core

/// Result type for hooks-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hooks-core operations
///
/// Resolution itself never fails; these cover the typed settings view and
/// serialization of resolved trees.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A resolved tree has a value of the wrong type for a known setting
    #[error("Invalid hook settings: {message}")]
    InvalidSettings { message: String },

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
