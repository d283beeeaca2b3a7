//! In-memory friendship graph — the core data structure and its queries.

pub mod builder;
pub mod social_network;
pub mod traversal;

pub use builder::NetworkBuilder;
pub use social_network::SocialNetwork;
pub use traversal::{bfs_hops, HopSearch};
