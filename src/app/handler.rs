//! Input handling: maps key events to controller events and draft edits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Action;
use crate::core::{
    add_friend::AddFriendField,
    controller::{ControllerEvent, View},
    split::{InputRejected, Payer, SplitField},
};

use super::state::{AppState, Focus};

/// Process a key event, dispatching on the current view and focus.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.controller.view() == View::Landing {
        handle_landing_key(state, key);
        return;
    }

    match state.focus {
        Focus::FriendsList => handle_list_key(state, key),
        Focus::AddFriend(field) => handle_add_friend_key(state, field, key),
        Focus::SplitBill(field) => handle_split_key(state, field, key),
    }
}

// ── Landing ─────────────────────────────────────────────────────

fn handle_landing_key(state: &mut AppState, key: KeyEvent) {
    if state.config.is(Action::EnterApp, key) {
        state.dispatch(ControllerEvent::EnterApp);
    } else if state.config.is(Action::Quit, key) {
        state.should_quit = true;
    }
}

// ── Friends list (configurable bindings) ────────────────────────

fn handle_list_key(state: &mut AppState, key: KeyEvent) {
    let len = state.controller.registry().len();
    let is_list_action = Action::ALL
        .iter()
        .any(|&action| action != Action::EnterApp && state.config.is(action, key));
    if is_list_action {
        state.status_message = None;
    }

    if state.config.is(Action::Quit, key) {
        state.should_quit = true;
    } else if state.config.is(Action::MoveUp, key) {
        state.cursor = state.cursor.saturating_sub(1);
    } else if state.config.is(Action::MoveDown, key) {
        if len > 0 && state.cursor < len - 1 {
            state.cursor += 1;
        }
    } else if state.config.is(Action::Select, key) {
        let Some(friend) = state.controller.registry().get_index(state.cursor) else {
            return;
        };
        let id = friend.id.clone();
        state.dispatch(ControllerEvent::FriendSelected(id));
    } else if state.config.is(Action::ToggleAddFriend, key) {
        state.dispatch(ControllerEvent::ToggleAddFriend);
        if state.controller.add_friend_open() {
            state.focus = Focus::AddFriend(AddFriendField::Name);
        }
    } else if state.config.is(Action::NextPane, key) {
        state.next_pane();
    }
}

// ── Add-friend form ─────────────────────────────────────────────

fn handle_add_friend_key(state: &mut AppState, field: AddFriendField, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.focus = Focus::FriendsList,
        KeyCode::Tab | KeyCode::Down => state.focus = Focus::AddFriend(field.next()),
        KeyCode::BackTab | KeyCode::Up => state.focus = Focus::AddFriend(field.prev()),
        KeyCode::Backspace => state.add_draft.pop_char(field),
        KeyCode::Enter => {
            let Some(friend) = state.add_draft.submit(state.ids.as_mut()) else {
                return;
            };
            let id = friend.id.clone();
            state.status_message = Some(format!("Added {}", friend.name));
            state.dispatch(ControllerEvent::FriendAdded(friend));
            if let Some(index) = state.controller.registry().position(&id) {
                state.cursor = index;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.add_draft.clear_field(field)
        }
        KeyCode::Char(c) if !has_command_modifier(key) => state.add_draft.push_char(field, c),
        _ => {}
    }
}

// ── Split-bill form ─────────────────────────────────────────────

fn handle_split_key(state: &mut AppState, field: SplitField, key: KeyEvent) {
    let edit = match key.code {
        KeyCode::Esc => {
            state.focus = Focus::FriendsList;
            Ok(())
        }
        KeyCode::Tab | KeyCode::Down => {
            state.focus = Focus::SplitBill(field.next());
            Ok(())
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = Focus::SplitBill(field.prev());
            Ok(())
        }
        KeyCode::Enter => {
            submit_split(state);
            Ok(())
        }
        KeyCode::Left if field == SplitField::Payer => {
            state.split_draft.set_payer(Payer::User);
            Ok(())
        }
        KeyCode::Right if field == SplitField::Payer => {
            state.split_draft.set_payer(Payer::Friend);
            Ok(())
        }
        KeyCode::Char(' ') if field == SplitField::Payer => {
            state.split_draft.cycle_payer();
            Ok(())
        }
        KeyCode::Backspace => state.split_draft.pop_char(field),
        KeyCode::Char(c) if is_numeric_char(c) && !has_command_modifier(key) => {
            state.split_draft.push_char(field, c)
        }
        _ => Ok(()),
    };

    if let Err(InputRejected::ExceedsBill { attempted, bill }) = edit {
        tracing::debug!(attempted, bill, "expense edit rejected");
    }
}

fn submit_split(state: &mut AppState) {
    let Some(delta) = state.split_draft.submit() else {
        return;
    };
    let Some(id) = state.controller.selected().cloned() else {
        return;
    };

    state.dispatch(ControllerEvent::BillSplit(delta));

    state.status_message = state
        .controller
        .registry()
        .get(&id)
        .map(|friend| format!("Bill split: {}", friend.status_line()));
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
