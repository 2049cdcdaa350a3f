//! Core state machine – friends, selection, form drafts, and the controller
//! that ties them together.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod add_friend;
pub mod controller;
pub mod friend;
pub mod ids;
pub mod registry;
pub mod selection;
pub mod split;
