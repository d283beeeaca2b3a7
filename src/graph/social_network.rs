//! Core graph structure — members mapped to their set of friends.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::types::{SocialError, SocialResult, UNREACHABLE};

use super::traversal::bfs_hops;

/// An undirected friendship graph over members of type `M`.
///
/// Every member present as a key owns a (possibly empty) friend set, and
/// friendships are always stored in both directions.
#[derive(Debug, Clone)]
pub struct SocialNetwork<M> {
    /// Adjacency: member -> direct friends.
    friends: HashMap<M, HashSet<M>>,
}

impl<M> SocialNetwork<M>
where
    M: Eq + Hash + Clone,
{
    /// Create a new empty network.
    pub fn new() -> Self {
        Self {
            friends: HashMap::new(),
        }
    }

    /// Create an empty network with room for `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            friends: HashMap::with_capacity(capacity),
        }
    }

    /// Add a person to the network. Adding an existing member is a no-op.
    pub fn add_member(&mut self, member: M) {
        self.friends.entry(member).or_default();
    }

    /// Add a symmetric friendship, registering either person if needed.
    pub fn add_friendship(&mut self, first: M, second: M) {
        self.friends
            .entry(first.clone())
            .or_default()
            .insert(second.clone());
        self.friends.entry(second).or_default().insert(first);
    }

    /// Length of the shortest friendship chain between two members, or `None`
    /// when they lie in different connected components.
    pub fn hops(&self, source: &M, target: &M) -> SocialResult<Option<usize>> {
        if !self.contains(source) || !self.contains(target) {
            return Err(SocialError::UnknownMember);
        }

        let search = bfs_hops(&self.friends, source, target);
        log::trace!(
            "hops: {:?} ({} members visited, {} enqueued)",
            search.hops,
            search.visited,
            search.enqueued
        );
        Ok(search.hops)
    }

    /// Length of the shortest friendship chain between two members.
    ///
    /// Returns `0` when both arguments are the same member and
    /// [`UNREACHABLE`] (`-1`) when no chain exists.
    pub fn shortest_path_length(&self, source: &M, target: &M) -> SocialResult<i64> {
        Ok(self
            .hops(source, target)?
            .map_or(UNREACHABLE, |hops| hops as i64))
    }
}

impl<M> SocialNetwork<M>
where
    M: Eq + Hash,
{
    /// Read-only view of the whole adjacency structure.
    pub fn friends(&self) -> &HashMap<M, HashSet<M>> {
        &self.friends
    }

    /// Direct friends of a member, if registered.
    pub fn friends_of(&self, member: &M) -> Option<&HashSet<M>> {
        self.friends.get(member)
    }

    /// Iterate over all registered members, in no particular order.
    pub fn members(&self) -> impl Iterator<Item = &M> {
        self.friends.keys()
    }

    /// Whether the person is registered in the network.
    pub fn contains(&self, member: &M) -> bool {
        self.friends.contains_key(member)
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.friends.len()
    }

    /// Number of distinct undirected friendships.
    pub fn friendship_count(&self) -> usize {
        let degrees: usize = self.friends.values().map(HashSet::len).sum();
        let self_loops = self
            .friends
            .iter()
            .filter(|(person, friends)| friends.contains(*person))
            .count();
        // A self-friendship adds one to the degree sum, every other friendship two.
        (degrees + self_loops) / 2
    }

    /// Number of direct friends of a member, if registered.
    pub fn degree(&self, member: &M) -> Option<usize> {
        self.friends.get(member).map(HashSet::len)
    }

    /// Whether two members are direct friends.
    pub fn are_friends(&self, first: &M, second: &M) -> bool {
        self.friends
            .get(first)
            .is_some_and(|friends| friends.contains(second))
    }

    /// Each undirected friendship exactly once.
    pub fn friendship_pairs(&self) -> Vec<(&M, &M)> {
        let mut seen: HashSet<(&M, &M)> = HashSet::new();
        let mut pairs = Vec::new();
        for (person, friends) in &self.friends {
            for friend in friends {
                if seen.contains(&(friend, person)) {
                    continue;
                }
                seen.insert((person, friend));
                pairs.push((person, friend));
            }
        }
        pairs
    }
}

impl<M> Default for SocialNetwork<M>
where
    M: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Extend<(M, M)> for SocialNetwork<M>
where
    M: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (M, M)>>(&mut self, iter: I) {
        for (first, second) in iter {
            self.add_friendship(first, second);
        }
    }
}

impl<M> FromIterator<(M, M)> for SocialNetwork<M>
where
    M: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (M, M)>>(iter: I) -> Self {
        let mut network = Self::new();
        network.extend(iter);
        network
    }
}

/// Serializes as `{ "members": [...], "friendships": [[a, b], ...] }`.
impl<M> Serialize for SocialNetwork<M>
where
    M: Eq + Hash + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let members: Vec<&M> = self.members().collect();
        let friendships = self.friendship_pairs();

        let mut state = serializer.serialize_struct("SocialNetwork", 2)?;
        state.serialize_field("members", &members)?;
        state.serialize_field("friendships", &friendships)?;
        state.end()
    }
}
