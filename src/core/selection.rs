//! At-most-one friend selection with toggle-off on re-select.

use super::friend::FriendId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<FriendId>,
}

impl Selection {
    /// Select `id`, or clear the selection if `id` is already selected.
    pub fn select(&mut self, id: FriendId) {
        if self.current.as_ref() == Some(&id) {
            self.current = None;
        } else {
            self.current = Some(id);
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&FriendId> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_twice_clears() {
        let mut sel = Selection::default();
        sel.select(FriendId::new("a"));
        assert_eq!(sel.current(), Some(&FriendId::new("a")));
        sel.select(FriendId::new("a"));
        assert_eq!(sel.current(), None);
    }

    #[test]
    fn selecting_another_replaces() {
        let mut sel = Selection::default();
        sel.select(FriendId::new("a"));
        sel.select(FriendId::new("b"));
        assert_eq!(sel.current(), Some(&FriendId::new("b")));
    }
}
