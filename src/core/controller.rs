//! Root state machine: the single owner and mutator of application state.
//!
//! Every transition is synchronous and triggered by exactly one
//! [`ControllerEvent`]. Rendering reads the result through [`Controller::view`].

use super::friend::{Friend, FriendId};
use super::registry::FriendRegistry;
use super::selection::Selection;

/// Discrete UI events the controller reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    EnterApp,
    ToggleAddFriend,
    FriendAdded(Friend),
    FriendSelected(FriendId),
    BillSplit(f64),
}

/// What should be on screen right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Landing,
    Main {
        add_friend_open: bool,
        /// The friend the split-bill panel is open for.
        split_for: Option<FriendId>,
    },
}

#[derive(Debug, Clone)]
pub struct Controller {
    registry: FriendRegistry,
    selection: Selection,
    entered: bool,
    show_add_friend: bool,
}

impl Controller {
    pub fn new(registry: FriendRegistry) -> Self {
        Self {
            registry,
            selection: Selection::default(),
            entered: false,
            show_add_friend: false,
        }
    }

    pub fn registry(&self) -> &FriendRegistry {
        &self.registry
    }

    pub fn selected(&self) -> Option<&FriendId> {
        self.selection.current()
    }

    pub fn add_friend_open(&self) -> bool {
        self.show_add_friend
    }

    pub fn view(&self) -> View {
        if !self.entered {
            return View::Landing;
        }
        View::Main {
            add_friend_open: self.show_add_friend,
            split_for: self.selection.current().cloned(),
        }
    }

    /// Apply one event. Only [`ControllerEvent::EnterApp`] is honoured while
    /// the landing screen is up.
    pub fn dispatch(&mut self, event: ControllerEvent) {
        if !self.entered && event != ControllerEvent::EnterApp {
            tracing::debug!(?event, "ignored on landing screen");
            return;
        }
        match event {
            ControllerEvent::EnterApp => self.enter_app(),
            ControllerEvent::ToggleAddFriend => self.toggle_add_friend(),
            ControllerEvent::FriendAdded(friend) => self.friend_added(friend),
            ControllerEvent::FriendSelected(id) => self.friend_selected(id),
            ControllerEvent::BillSplit(delta) => self.bill_split(delta),
        }
    }

    // ── transitions ────────────────────────────────────────────

    fn enter_app(&mut self) {
        if !self.entered {
            tracing::info!(friends = self.registry.len(), "entered app");
        }
        self.entered = true;
    }

    fn toggle_add_friend(&mut self) {
        self.show_add_friend = !self.show_add_friend;
        tracing::debug!(open = self.show_add_friend, "toggled add friend form");
    }

    fn friend_added(&mut self, friend: Friend) {
        tracing::info!(id = %friend.id, name = %friend.name, "friend added");
        self.registry.append(friend);
        self.show_add_friend = false;
    }

    fn friend_selected(&mut self, id: FriendId) {
        self.selection.select(id);
        self.show_add_friend = false;
        tracing::debug!(selected = ?self.selection.current(), "selection changed");
    }

    fn bill_split(&mut self, delta: f64) {
        let Some(id) = self.selection.current().cloned() else {
            tracing::debug!(delta, "bill split with nothing selected");
            return;
        };
        if !self.registry.apply_delta(&id, delta) {
            tracing::warn!(%id, "selected friend missing from registry");
        } else {
            tracing::info!(%id, delta, "bill split applied");
        }
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add_friend::AddFriendDraft;
    use crate::core::ids::SequentialIds;
    use crate::core::split::{Payer, SplitDraft};

    fn entered() -> Controller {
        let mut c = Controller::new(FriendRegistry::seeded());
        c.dispatch(ControllerEvent::EnterApp);
        c
    }

    fn sarah() -> FriendId {
        FriendId::new("933372")
    }

    #[test]
    fn starts_on_landing_and_ignores_other_events() {
        let mut c = Controller::new(FriendRegistry::seeded());
        assert_eq!(c.view(), View::Landing);
        c.dispatch(ControllerEvent::ToggleAddFriend);
        c.dispatch(ControllerEvent::FriendSelected(sarah()));
        assert_eq!(c.view(), View::Landing);
        assert!(!c.add_friend_open());
        assert_eq!(c.selected(), None);
    }

    #[test]
    fn landing_never_comes_back() {
        let mut c = entered();
        let events = [
            ControllerEvent::ToggleAddFriend,
            ControllerEvent::FriendSelected(sarah()),
            ControllerEvent::BillSplit(5.0),
            ControllerEvent::EnterApp,
            ControllerEvent::ToggleAddFriend,
        ];
        for ev in events {
            c.dispatch(ev);
            assert_ne!(c.view(), View::Landing);
        }
    }

    #[test]
    fn selecting_closes_add_form_and_toggles() {
        let mut c = entered();
        c.dispatch(ControllerEvent::ToggleAddFriend);
        assert!(c.add_friend_open());

        c.dispatch(ControllerEvent::FriendSelected(sarah()));
        assert!(!c.add_friend_open());
        assert_eq!(c.selected(), Some(&sarah()));

        c.dispatch(ControllerEvent::FriendSelected(sarah()));
        assert_eq!(c.selected(), None);
    }

    #[test]
    fn opening_add_form_keeps_selection() {
        let mut c = entered();
        c.dispatch(ControllerEvent::FriendSelected(sarah()));
        c.dispatch(ControllerEvent::ToggleAddFriend);
        assert_eq!(
            c.view(),
            View::Main {
                add_friend_open: true,
                split_for: Some(sarah()),
            }
        );
    }

    #[test]
    fn adding_friend_appends_and_closes_form() {
        let mut c = entered();
        let mut ids = SequentialIds::default();
        c.dispatch(ControllerEvent::ToggleAddFriend);

        let mut draft = AddFriendDraft::default();
        assert!(draft.submit(&mut ids).is_none());
        assert_eq!(c.registry().len(), 3);

        draft.name = "Bob".into();
        draft.image = "http://x".into();
        let friend = draft.submit(&mut ids).unwrap();
        c.dispatch(ControllerEvent::FriendAdded(friend));

        assert_eq!(c.registry().len(), 4);
        let bob = c.registry().get_index(3).unwrap();
        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.balance, 0.0);
        assert!(!c.add_friend_open());
    }

    #[test]
    fn split_with_user_paying_raises_balance() {
        let mut c = entered();
        c.dispatch(ControllerEvent::FriendSelected(sarah()));

        let mut draft = SplitDraft::default();
        draft.set_bill("100");
        draft.set_paid_by_user("40").unwrap();
        draft.set_payer(Payer::User);
        c.dispatch(ControllerEvent::BillSplit(draft.submit().unwrap()));

        assert_eq!(c.registry().get(&sarah()).unwrap().balance, 80.0);
        assert_eq!(c.selected(), None);
    }

    #[test]
    fn split_with_friend_paying_lowers_balance() {
        let mut c = entered();
        c.dispatch(ControllerEvent::FriendSelected(sarah()));

        let mut draft = SplitDraft::default();
        draft.set_bill("100");
        draft.set_paid_by_user("40").unwrap();
        draft.set_payer(Payer::Friend);
        c.dispatch(ControllerEvent::BillSplit(draft.submit().unwrap()));

        assert_eq!(c.registry().get(&sarah()).unwrap().balance, -20.0);
    }

    #[test]
    fn split_without_selection_is_noop() {
        let mut c = entered();
        let before = c.registry().as_slice().to_vec();
        c.dispatch(ControllerEvent::BillSplit(10.0));
        assert_eq!(c.registry().as_slice(), before.as_slice());
    }
}
