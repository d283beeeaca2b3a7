//! CLI command implementations.

use std::path::Path;

use crate::format::EdgeListReader;
use crate::graph::{NetworkBuilder, SocialNetwork};
use crate::types::SocialResult;

/// Friendships of the built-in demo network:
///
/// ```text
///        1
///       / \
///      2   3
///     / \
///    4   5
///     \ /
///      6
/// ```
pub const DEMO_FRIENDSHIPS: [(u32, u32); 6] = [(1, 2), (1, 3), (2, 4), (2, 5), (4, 6), (5, 6)];

/// Build the demo network.
pub fn demo_network() -> SocialNetwork<u32> {
    NetworkBuilder::new().friendships(DEMO_FRIENDSHIPS).build()
}

/// Query the demo network in both directions between 1 and 6.
pub fn cmd_demo(json: bool) -> SocialResult<()> {
    let network = demo_network();
    let (first, second) = (1, 6);
    let forward = network.shortest_path_length(&first, &second)?;
    let backward = network.shortest_path_length(&second, &first)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "queries": [
                    {"from": first, "to": second, "length": forward},
                    {"from": second, "to": first, "length": backward},
                ]
            })
        );
    } else {
        println!("shortest_path_length({}, {}) = {}", first, second, forward);
        println!("shortest_path_length({}, {}) = {}", second, first, backward);
    }
    Ok(())
}

/// Length of the shortest friendship chain between two people in a file.
pub fn cmd_path(path: &Path, first: &str, second: &str, json: bool) -> SocialResult<()> {
    let network = EdgeListReader::read_from_file(path)?;
    let length = network.shortest_path_length(&first.to_string(), &second.to_string())?;

    if json {
        println!(
            "{}",
            serde_json::json!({"from": first, "to": second, "length": length})
        );
    } else {
        println!("{}", length);
    }
    Ok(())
}

/// Summary statistics about a network file.
pub fn cmd_stats(path: &Path, json: bool) -> SocialResult<()> {
    let network = EdgeListReader::read_from_file(path)?;
    let stats = NetworkStats::from_network(&network);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("File: {}", path.display());
        println!("Members: {}", stats.members);
        println!("Friendships: {}", stats.friendships);
        println!("Max degree: {}", stats.max_degree);
        println!("Isolated members: {}", stats.isolated);
    }
    Ok(())
}

/// Export a network file as JSON.
pub fn cmd_export(path: &Path, pretty: bool) -> SocialResult<()> {
    let network = EdgeListReader::read_from_file(path)?;
    let output = if pretty {
        serde_json::to_string_pretty(&network)?
    } else {
        serde_json::to_string(&network)?
    };
    println!("{}", output);
    Ok(())
}

/// Aggregate figures reported by `snet stats`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NetworkStats {
    pub members: usize,
    pub friendships: usize,
    pub max_degree: usize,
    /// Members with no friends at all.
    pub isolated: usize,
}

impl NetworkStats {
    /// Compute the statistics of a loaded network.
    pub fn from_network<M: Eq + std::hash::Hash>(network: &SocialNetwork<M>) -> Self {
        let degrees = network.friends().values().map(|friends| friends.len());
        Self {
            members: network.member_count(),
            friendships: network.friendship_count(),
            max_degree: degrees.clone().max().unwrap_or(0),
            isolated: degrees.filter(|&degree| degree == 0).count(),
        }
    }
}
