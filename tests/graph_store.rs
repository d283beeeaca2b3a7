//! Graph store tests: membership, friendships, inspection view.

use std::collections::{HashMap, HashSet};

use social_network::graph::{NetworkBuilder, SocialNetwork};

// ==================== Helper ====================

fn names(list: &[&str]) -> HashSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ==================== Membership Tests ====================

#[test]
fn test_network_is_empty_after_no_insertions() {
    let sn: SocialNetwork<i32> = SocialNetwork::new();

    assert_eq!(sn.member_count(), 0);
    assert_eq!(sn.friends().len(), 0);
    assert!(sn.friends().keys().next().is_none());
    assert_eq!(sn.friendship_count(), 0);
}

#[test]
fn test_network_after_several_insertions() {
    let mut sn = SocialNetwork::new();
    sn.add_friendship("John".to_string(), "Mary".to_string());
    sn.add_friendship("Jane".to_string(), "Bill".to_string());
    sn.add_member("Bob".to_string());

    assert_eq!(sn.member_count(), 5);
    let members: HashSet<String> = sn.members().cloned().collect();
    assert_eq!(members, names(&["John", "Mary", "Jane", "Bill", "Bob"]));
    assert_eq!(sn.friendship_count(), 2);
}

#[test]
fn test_add_member_is_idempotent() {
    let mut sn = SocialNetwork::new();
    sn.add_member(42u64);
    sn.add_member(42u64);

    assert_eq!(sn.member_count(), 1);
    assert_eq!(sn.degree(&42), Some(0));
}

#[test]
fn test_add_member_keeps_existing_friends() {
    let mut sn = SocialNetwork::new();
    sn.add_friendship(1, 2);
    sn.add_member(1);

    assert!(sn.are_friends(&1, &2));
    assert_eq!(sn.degree(&1), Some(1));
}

#[test]
fn test_lone_member_has_empty_friend_set() {
    let mut sn = SocialNetwork::new();
    sn.add_member("Bob");

    assert!(sn.contains(&"Bob"));
    assert_eq!(sn.friends_of(&"Bob"), Some(&HashSet::new()));
    assert!(sn.friends_of(&"Alice").is_none());
    assert_eq!(sn.degree(&"Alice"), None);
}

// ==================== Friendship Tests ====================

#[test]
fn test_friendship_is_symmetric() {
    let mut sn = SocialNetwork::new();
    sn.add_friendship('a', 'b');

    assert!(sn.are_friends(&'a', &'b'));
    assert!(sn.are_friends(&'b', &'a'));
    assert!(!sn.are_friends(&'a', &'a'));
}

#[test]
fn test_reverse_friendship_yields_identical_graph() {
    let mut once = SocialNetwork::new();
    once.add_friendship(1, 2);

    let mut twice = SocialNetwork::new();
    twice.add_friendship(1, 2);
    twice.add_friendship(2, 1);
    twice.add_friendship(1, 2);

    assert_eq!(once.friends(), twice.friends());
    assert_eq!(twice.friendship_count(), 1);
}

#[test]
fn test_friendship_registers_both_members() {
    let mut sn = SocialNetwork::new();
    sn.add_friendship("Jack", "Jill");

    assert!(sn.contains(&"Jack"));
    assert!(sn.contains(&"Jill"));
    assert_eq!(sn.member_count(), 2);
}

#[test]
fn test_no_implicit_self_loops() {
    let sn: SocialNetwork<i32> = [(1, 2), (2, 3), (3, 1)].into_iter().collect();
    for member in sn.members() {
        assert!(!sn.are_friends(member, member));
    }
}

#[test]
fn test_self_friendship_counts_once() {
    let mut sn = SocialNetwork::new();
    sn.add_friendship(7, 7);

    assert_eq!(sn.member_count(), 1);
    assert!(sn.are_friends(&7, &7));
    assert_eq!(sn.friendship_count(), 1);
}

#[test]
fn test_friendship_count_mixes_self_and_regular_friendships() {
    let mut sn = SocialNetwork::new();
    sn.add_friendship(1, 1);
    sn.add_friendship(1, 2);
    sn.add_friendship(2, 3);
    sn.add_friendship(3, 3);
    sn.add_friendship(3, 2);
    sn.add_member(4);

    assert_eq!(sn.friendship_count(), 4);
    assert_eq!(sn.friendship_count(), sn.friendship_pairs().len());
}

#[test]
fn test_adjacency_view_matches_expected() {
    let sn: SocialNetwork<i32> = [(1, 2), (1, 3)].into_iter().collect();

    let mut expected: HashMap<i32, HashSet<i32>> = HashMap::new();
    expected.insert(1, [2, 3].into_iter().collect());
    expected.insert(2, [1].into_iter().collect());
    expected.insert(3, [1].into_iter().collect());
    assert_eq!(sn.friends(), &expected);
}

#[test]
fn test_symmetry_holds_for_every_stored_edge() {
    let sn: SocialNetwork<u32> = (0..50).map(|i| (i, (i * 7 + 3) % 50)).collect();
    for (person, friends) in sn.friends() {
        for friend in friends {
            assert!(
                sn.friends_of(friend).unwrap().contains(person),
                "{} -> {} has no reverse edge",
                person,
                friend
            );
        }
    }
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_matches_manual_construction() {
    let built = NetworkBuilder::new()
        .member("Bob")
        .friendship("John", "Mary")
        .friendships([("Jane", "Bill"), ("Mary", "Jane")])
        .build();

    let mut manual = SocialNetwork::new();
    manual.add_member("Bob");
    manual.add_friendship("John", "Mary");
    manual.add_friendship("Jane", "Bill");
    manual.add_friendship("Mary", "Jane");

    assert_eq!(built.friends(), manual.friends());
    assert_eq!(built.member_count(), 5);
    assert_eq!(built.friendship_count(), 3);
}

#[test]
fn test_extend_adds_friendships() {
    let mut sn = SocialNetwork::new();
    sn.add_member(0);
    sn.extend([(0, 1), (1, 2)]);

    assert_eq!(sn.member_count(), 3);
    assert!(sn.are_friends(&2, &1));
}

// ==================== Serialization Tests ====================

#[test]
fn test_serialize_lists_each_friendship_once() {
    let sn = NetworkBuilder::new()
        .member(9)
        .friendships([(1, 2), (2, 1), (2, 3)])
        .build();

    let value = serde_json::to_value(&sn).unwrap();
    let members = value["members"].as_array().unwrap();
    let friendships = value["friendships"].as_array().unwrap();

    assert_eq!(members.len(), 4);
    assert_eq!(friendships.len(), 2);
    for pair in friendships {
        assert_eq!(pair.as_array().unwrap().len(), 2);
    }
}
