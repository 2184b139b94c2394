//! Entity identity and per-kind identity sequences.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Synthetic integer identity of a stored record.
///
/// Identities are:
/// - Assigned by the owning table's [`IdSequence`]
/// - Immutable once assigned
/// - Never reused
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Creates an identity from its raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identity value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Monotonic identity counter for one entity kind.
///
/// Starts at 1 and only moves forward.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Creates a sequence whose first identity is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the current value and advances the counter.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Returns the identity the next call to [`next_id`](Self::next_id) hands out.
    #[must_use]
    pub const fn peek(&self) -> EntityId {
        EntityId(self.next)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
