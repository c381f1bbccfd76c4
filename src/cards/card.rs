//! Card identity.
//!
//! `Card` is a plain value: an id plus a rank. Where the card sits (hand,
//! pile, draw pile, captured pile) is tracked by the match state, not by
//! the card itself.

use serde::{Deserialize, Serialize};

use super::rank::Rank;

/// Unique identifier for one physical card in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single card. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, rank: Rank) -> Self {
        Self { id, rank }
    }
}
