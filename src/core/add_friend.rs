//! Draft state behind the "add friend" form.

use super::friend::Friend;
use super::ids::IdGenerator;

/// Placeholder avatar service used when the user doesn't supply an image.
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// Which text field of the add-friend form is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddFriendField {
    #[default]
    Name,
    Image,
}

impl AddFriendField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Image,
            Self::Image => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields, so stepping back is the same as stepping forward.
        self.next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendDraft {
    pub name: String,
    pub image: String,
    default_image: String,
}

impl Default for AddFriendDraft {
    fn default() -> Self {
        Self::with_default_image(DEFAULT_AVATAR_URL)
    }
}

impl AddFriendDraft {
    pub fn with_default_image(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        Self {
            name: String::new(),
            image: default_image.clone(),
            default_image,
        }
    }

    pub fn field(&self, field: AddFriendField) -> &str {
        match field {
            AddFriendField::Name => &self.name,
            AddFriendField::Image => &self.image,
        }
    }

    fn field_mut(&mut self, field: AddFriendField) -> &mut String {
        match field {
            AddFriendField::Name => &mut self.name,
            AddFriendField::Image => &mut self.image,
        }
    }

    pub fn push_char(&mut self, field: AddFriendField, c: char) {
        self.field_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: AddFriendField) {
        self.field_mut(field).pop();
    }

    pub fn clear_field(&mut self, field: AddFriendField) {
        self.field_mut(field).clear();
    }

    /// Restore both fields to their defaults.
    pub fn reset(&mut self) {
        self.name.clear();
        self.image.clone_from(&self.default_image);
    }

    /// Build a new friend from the draft.
    ///
    /// Returns `None` and keeps the fields as they are when either field is
    /// empty. On success the draft is reset.
    pub fn submit(&mut self, ids: &mut dyn IdGenerator) -> Option<Friend> {
        if self.name.is_empty() || self.image.is_empty() {
            tracing::debug!(
                name_empty = self.name.is_empty(),
                image_empty = self.image.is_empty(),
                "add friend dropped: missing field"
            );
            return None;
        }

        let id = ids.generate();
        let image = format!("{}?={}", self.image, id);
        let friend = Friend::new(id, self.name.clone(), image, 0.0);
        self.reset();
        Some(friend)
    }
}
