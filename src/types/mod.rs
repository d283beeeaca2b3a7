//! Shared types for the social network library.

pub mod error;

pub use error::{SocialError, SocialResult};

/// Hop count reported when two members lie in different connected components.
pub const UNREACHABLE: i64 = -1;

/// Character that starts a comment in an edge-list file.
pub const COMMENT_PREFIX: char = '#';
