//! Identifier generation capability.
//!
//! The controller never mints ids itself; it is handed an [`IdGenerator`] so
//! tests can substitute a deterministic sequence.

use uuid::Uuid;

use super::friend::FriendId;

pub trait IdGenerator {
    fn generate(&mut self) -> FriendId;
}

/// Random UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> FriendId {
        FriendId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic `id-1`, `id-2`, … sequence.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> FriendId {
        self.next += 1;
        FriendId::new(format!("id-{}", self.next))
    }
}
