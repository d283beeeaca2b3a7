//! Social network — an undirected friendship graph over arbitrary member types.
//!
//! Members are any `Eq + Hash + Clone` value. Friendships are symmetric and
//! unweighted, and the one query answers how many hops separate two people.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::EdgeListReader;
pub use graph::{bfs_hops, HopSearch, NetworkBuilder, SocialNetwork};
pub use types::{SocialError, SocialResult, UNREACHABLE};
