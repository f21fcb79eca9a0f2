//! Error types for mailto operations.

/// Result type alias for mailto operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Mailto error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is not a `mailto:` URI.
    #[error("Invalid argument: not a mailto URI: {0:?}")]
    InvalidArgument(String),
}
