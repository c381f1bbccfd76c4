//! Board of eight rank-ordered piles.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::rank::RANK_COUNT;
use crate::cards::{Card, Rank};

/// Cards at the waterhole for one rank, in play order.
pub type Pile = Vector<Card>;

/// The eight piles, slot `i` holding rank `i + 1`.
///
/// ```
/// use kariba::cards::{Card, CardId, Rank};
/// use kariba::zones::Board;
///
/// let mut board = Board::new();
/// let zebra = Rank::new(3).unwrap();
/// board.add(zebra, [Card::new(CardId::new(0), zebra)]);
/// assert_eq!(board.len(zebra), 1);
/// assert_eq!(board.total_cards(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    piles: [Pile; RANK_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in the pile for `rank`.
    #[must_use]
    pub fn pile(&self, rank: Rank) -> &Pile {
        &self.piles[rank.index()]
    }

    /// Number of cards in the pile for `rank`.
    #[must_use]
    pub fn len(&self, rank: Rank) -> usize {
        self.piles[rank.index()].len()
    }

    #[must_use]
    pub fn is_empty(&self, rank: Rank) -> bool {
        self.piles[rank.index()].is_empty()
    }

    /// Append cards to the pile for `rank`.
    pub fn add(&mut self, rank: Rank, cards: impl IntoIterator<Item = Card>) {
        self.piles[rank.index()].extend(cards);
    }

    /// Empty the pile for `rank`, returning its cards.
    pub fn take(&mut self, rank: Rank) -> Pile {
        std::mem::take(&mut self.piles[rank.index()])
    }

    /// Iterate over (rank, pile) pairs in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, &Pile)> {
        Rank::ALL.into_iter().zip(self.piles.iter())
    }

    /// Cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Vector::len).sum()
    }
}
