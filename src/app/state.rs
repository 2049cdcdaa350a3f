//! Central application state.
//!
//! The [`Controller`] owns the domain state. Everything else here is
//! terminal-side bookkeeping: form drafts, keyboard focus, list cursor.
//! Rendering reads `&AppState`; event handling mutates `&mut AppState`.

use crate::config::AppConfig;
use crate::core::{
    add_friend::{AddFriendDraft, AddFriendField},
    controller::{Controller, ControllerEvent},
    ids::IdGenerator,
    registry::FriendRegistry,
    split::{SplitDraft, SplitField},
};

/// Which panel receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    FriendsList,
    AddFriend(AddFriendField),
    SplitBill(SplitField),
}

pub struct AppState {
    pub controller: Controller,
    /// Source of ids for newly added friends.
    pub ids: Box<dyn IdGenerator>,
    pub add_draft: AddFriendDraft,
    pub split_draft: SplitDraft,
    pub focus: Focus,
    /// Highlighted row in the friends list.
    pub cursor: usize,
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(registry: FriendRegistry, ids: Box<dyn IdGenerator>, config: AppConfig) -> Self {
        Self {
            controller: Controller::new(registry),
            ids,
            add_draft: AddFriendDraft::with_default_image(config.default_avatar_url.clone()),
            split_draft: SplitDraft::default(),
            focus: Focus::default(),
            cursor: 0,
            should_quit: false,
            status_message: None,
            config,
        }
    }

    /// Forward an event to the controller, then bring drafts and focus back
    /// in line with what is visible.
    pub fn dispatch(&mut self, event: ControllerEvent) {
        let selected_before = self.controller.selected().cloned();
        let add_open_before = self.controller.add_friend_open();

        self.controller.dispatch(event);

        // The split form stays up while switching friends; only closing it
        // drops the draft.
        if selected_before.is_some() && self.controller.selected().is_none() {
            self.split_draft = SplitDraft::default();
        }
        if add_open_before && !self.controller.add_friend_open() {
            self.add_draft.reset();
        }
        self.normalize_focus();
    }

    /// Send focus back to the list if the focused form has been closed, and
    /// keep the cursor inside the list.
    pub fn normalize_focus(&mut self) {
        let visible = match self.focus {
            Focus::FriendsList => true,
            Focus::AddFriend(_) => self.controller.add_friend_open(),
            Focus::SplitBill(_) => self.controller.selected().is_some(),
        };
        if !visible {
            self.focus = Focus::FriendsList;
        }

        let registry = self.controller.registry();
        if registry.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= registry.len() {
            self.cursor = registry.len() - 1;
        }
    }

    /// Cycle focus through the list and whichever forms are open.
    pub fn next_pane(&mut self) {
        let add_open = self.controller.add_friend_open();
        let split_open = self.controller.selected().is_some();
        self.focus = match self.focus {
            Focus::FriendsList if add_open => Focus::AddFriend(AddFriendField::default()),
            Focus::FriendsList | Focus::AddFriend(_) if split_open => {
                Focus::SplitBill(SplitField::default())
            }
            _ => Focus::FriendsList,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::friend::FriendId;
    use crate::core::ids::SequentialIds;

    fn state() -> AppState {
        let mut s = AppState::new(
            FriendRegistry::seeded(),
            Box::new(SequentialIds::default()),
            AppConfig::default(),
        );
        s.dispatch(ControllerEvent::EnterApp);
        s
    }

    #[test]
    fn switching_friends_keeps_split_draft() {
        let mut s = state();
        s.dispatch(ControllerEvent::FriendSelected(FriendId::new("118836")));
        s.split_draft.set_bill("50");
        s.dispatch(ControllerEvent::FriendSelected(FriendId::new("933372")));
        assert_eq!(s.split_draft.bill().text(), "50");
    }

    #[test]
    fn closing_split_form_resets_draft() {
        let mut s = state();
        s.dispatch(ControllerEvent::FriendSelected(FriendId::new("118836")));
        s.split_draft.set_bill("50");
        s.dispatch(ControllerEvent::FriendSelected(FriendId::new("118836")));
        assert_eq!(s.split_draft, SplitDraft::default());
    }

    #[test]
    fn closing_add_form_resets_draft_and_focus() {
        let mut s = state();
        s.dispatch(ControllerEvent::ToggleAddFriend);
        s.focus = Focus::AddFriend(AddFriendField::Name);
        s.add_draft.name = "half typed".into();

        s.dispatch(ControllerEvent::ToggleAddFriend);
        assert_eq!(s.add_draft.name, "");
        assert_eq!(s.focus, Focus::FriendsList);
    }

    #[test]
    fn next_pane_skips_closed_forms() {
        let mut s = state();
        s.next_pane();
        assert_eq!(s.focus, Focus::FriendsList);

        s.dispatch(ControllerEvent::FriendSelected(FriendId::new("118836")));
        s.next_pane();
        assert_eq!(s.focus, Focus::SplitBill(SplitField::Bill));

        s.dispatch(ControllerEvent::ToggleAddFriend);
        s.focus = Focus::FriendsList;
        s.next_pane();
        assert_eq!(s.focus, Focus::AddFriend(AddFriendField::Name));
        s.next_pane();
        assert_eq!(s.focus, Focus::SplitBill(SplitField::Bill));
        s.next_pane();
        assert_eq!(s.focus, Focus::FriendsList);
    }
}
