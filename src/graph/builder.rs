//! Fluent API for building SocialNetwork instances.

use std::hash::Hash;

use super::SocialNetwork;

/// Fluent builder for constructing a [`SocialNetwork`].
pub struct NetworkBuilder<M> {
    members: Vec<M>,
    friendships: Vec<(M, M)>,
}

impl<M> NetworkBuilder<M>
where
    M: Eq + Hash + Clone,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            friendships: Vec::new(),
        }
    }

    /// Register a person who may have no friends yet.
    pub fn member(mut self, member: M) -> Self {
        self.members.push(member);
        self
    }

    /// Add a friendship between two people.
    pub fn friendship(mut self, first: M, second: M) -> Self {
        self.friendships.push((first, second));
        self
    }

    /// Add several friendships at once.
    pub fn friendships<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (M, M)>,
    {
        self.friendships.extend(pairs);
        self
    }

    /// Build the final network.
    pub fn build(self) -> SocialNetwork<M> {
        let mut network = SocialNetwork::with_capacity(self.members.len());
        for member in self.members {
            network.add_member(member);
        }
        network.extend(self.friendships);
        network
    }
}

impl<M> Default for NetworkBuilder<M>
where
    M: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
