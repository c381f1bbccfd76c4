//! Move representation: a seat plus the cards it puts down.
//!
//! A move is always a group of same-rank cards from one hand. The rules
//! check that before anything changes; see `rules::apply_move`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::{Card, CardId};

/// A player's intent for one turn.
///
/// ```
/// use kariba::cards::CardId;
/// use kariba::core::{Move, PlayerId};
///
/// let m = Move::new(PlayerId::new(0), [CardId::new(4), CardId::new(9)]);
/// assert_eq!(m.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: PlayerId,
    /// SmallVec keeps the common 1-4 card case off the heap.
    pub cards: SmallVec<[CardId; 8]>,
}

impl Move {
    #[must_use]
    pub fn new(player: PlayerId, cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            player,
            cards: cards.into_iter().collect(),
        }
    }

    /// Build a move from whole cards, keeping only their ids.
    #[must_use]
    pub fn from_cards<'a>(player: PlayerId, cards: impl IntoIterator<Item = &'a Card>) -> Self {
        Self::new(player, cards.into_iter().map(|c| c.id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
