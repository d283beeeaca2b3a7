//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Outcome of a breadth-first hop search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopSearch {
    /// Hops from source to target, `None` if the target was never reached.
    pub hops: Option<usize>,
    /// Members marked visited before the search stopped (source included).
    pub visited: usize,
    /// Queue pushes performed, source included. Equals `visited` because
    /// members are marked when enqueued.
    pub enqueued: usize,
}

/// Breadth-first search for the minimum number of hops from `source` to
/// `target` over an undirected adjacency map.
///
/// Members are marked visited when enqueued, so each one enters the queue at
/// most once. The first time `target` is dequeued its distance is minimal.
pub fn bfs_hops<M>(adjacency: &HashMap<M, HashSet<M>>, source: &M, target: &M) -> HopSearch
where
    M: Eq + Hash,
{
    let mut visited: HashSet<&M> = HashSet::new();
    let mut queue: VecDeque<(&M, usize)> = VecDeque::new();

    visited.insert(source);
    queue.push_back((source, 0));
    let mut enqueued = 1;

    while let Some((current, distance)) = queue.pop_front() {
        if current == target {
            return HopSearch {
                hops: Some(distance),
                visited: visited.len(),
                enqueued,
            };
        }

        let Some(friends) = adjacency.get(current) else {
            continue;
        };

        for friend in friends {
            if visited.insert(friend) {
                queue.push_back((friend, distance + 1));
                enqueued += 1;
            }
        }
    }

    HopSearch {
        hops: None,
        visited: visited.len(),
        enqueued,
    }
}
