//! Error types for the social network library.

use thiserror::Error;

/// All errors that can occur in the social network library.
///
/// Graph mutations never fail; only the shortest-path query produces
/// [`SocialError::UnknownMember`]. The remaining variants come from the
/// edge-list reader and the CLI output layer.
#[derive(Error, Debug)]
pub enum SocialError {
    /// A queried person was never added to the network.
    #[error("At least one of the given persons does not exist in the social network!")]
    UnknownMember,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed edge-list record.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for social network operations.
pub type SocialResult<T> = Result<T, SocialError>;
