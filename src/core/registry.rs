//! Ordered collection of friends with their running balances.

use super::friend::{Friend, FriendId};

/// Avatar service used by the built-in seed friends.
const SEED_AVATAR_BASE: &str = "https://i.pravatar.cc/48";

/// Friends known at process start: `(id, name, balance)`.
const SEED_FRIENDS: &[(&str, &str, f64)] = &[
    ("118836", "clark", -7.0),
    ("933372", "Sarah", 20.0),
    ("499476", "Anthony", 0.0),
];

/// Append-only, ordered friend list.
///
/// Friends are never removed; the only mutation after insertion is a balance
/// adjustment through [`FriendRegistry::apply_delta`].
#[derive(Debug, Clone, Default)]
pub struct FriendRegistry {
    friends: Vec<Friend>,
}

impl FriendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the three seed friends.
    pub fn seeded() -> Self {
        let friends = SEED_FRIENDS
            .iter()
            .map(|&(id, name, balance)| {
                Friend::new(
                    FriendId::new(id),
                    name,
                    format!("{SEED_AVATAR_BASE}?u={id}"),
                    balance,
                )
            })
            .collect();
        Self { friends }
    }

    /// Add a friend at the end. Id uniqueness is the caller's responsibility.
    pub fn append(&mut self, friend: Friend) {
        self.friends.push(friend);
    }

    /// Add `delta` to the balance of the friend with `id`.
    ///
    /// Returns `false` (and leaves everything untouched) when no friend
    /// matches.
    pub fn apply_delta(&mut self, id: &FriendId, delta: f64) -> bool {
        let mut matched = false;
        for friend in self.friends.iter_mut().filter(|f| &f.id == id) {
            friend.balance += delta;
            matched = true;
        }
        matched
    }

    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    pub fn position(&self, id: &FriendId) -> Option<usize> {
        self.friends.iter().position(|f| &f.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Friend> {
        self.friends.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter()
    }

    pub fn as_slice(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn seeded_registry_matches_initial_friends() {
        let reg = FriendRegistry::seeded();
        let names: Vec<_> = reg.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["clark", "Sarah", "Anthony"]);
        assert_eq!(reg.get_index(0).map(|f| f.balance), Some(-7.0));
        assert_eq!(
            reg.get(&FriendId::new("933372")).map(|f| f.image.as_str()),
            Some("https://i.pravatar.cc/48?u=933372")
        );
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut reg = FriendRegistry::seeded();
        reg.append(Friend::new(FriendId::new("x"), "Bob", "http://x", 0.0));
        assert_eq!(reg.len(), 4);
        assert_eq!(reg.position(&FriendId::new("x")), Some(3));
    }

    #[test]
    fn unknown_id_leaves_registry_unchanged() {
        let mut reg = FriendRegistry::seeded();
        let before = reg.as_slice().to_vec();
        assert!(!reg.apply_delta(&FriendId::new("missing"), 10.0));
        assert_eq!(reg.as_slice(), before.as_slice());
    }

    proptest! {
        #[test]
        fn apply_delta_touches_only_the_target(
            balances in prop::collection::vec(-1000i32..1000, 1..8),
            pick in any::<prop::sample::Index>(),
            delta in -500i32..500,
        ) {
            let mut reg = FriendRegistry::new();
            for (i, b) in balances.iter().enumerate() {
                reg.append(Friend::new(FriendId::new(i.to_string()), format!("f{i}"), "img", *b as f64));
            }
            let target = pick.index(balances.len());
            let target_id = FriendId::new(target.to_string());
            let before = reg.as_slice().to_vec();

            prop_assert!(reg.apply_delta(&target_id, delta as f64));

            prop_assert_eq!(reg.len(), before.len());
            for (i, (old, new)) in before.iter().zip(reg.iter()).enumerate() {
                prop_assert_eq!(&old.id, &new.id);
                if i == target {
                    prop_assert_eq!(new.balance, old.balance + delta as f64);
                } else {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }
}
