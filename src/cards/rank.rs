//! Card ranks ("animals").
//!
//! Ranks run 1..=8. Higher ranks scare away lower ones, except that the
//! Mouse (1) is the only rank that scares away the Elephant (8).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct ranks, and therefore of waterhole piles.
pub const RANK_COUNT: usize = 8;

/// Rank of a card, 1 (lowest) through 8 (highest).
///
/// The inner value is always in range; construct through [`Rank::new`]
/// or `TryFrom<u8>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

/// Rejected rank value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("rank must be between 1 and 8, got {0}")]
pub struct RankError(pub u8);

impl Rank {
    /// Lowest rank (Mouse).
    pub const LOWEST: Rank = Rank(1);

    /// Highest rank (Elephant).
    pub const HIGHEST: Rank = Rank(8);

    /// All ranks in ascending order.
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
    ];

    /// Create a rank, rejecting values outside 1..=8.
    pub const fn new(value: u8) -> Result<Self, RankError> {
        if value >= 1 && value as usize <= RANK_COUNT {
            Ok(Self(value))
        } else {
            Err(RankError(value))
        }
    }

    /// Get the raw rank value (1-based).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Zero-based slot index on the board.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The next lower rank, or `None` for the Mouse.
    #[must_use]
    pub const fn lower(self) -> Option<Rank> {
        if self.0 > 1 {
            Some(Rank(self.0 - 1))
        } else {
            None
        }
    }

    /// Animal name shown in match logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            1 => "Mouse",
            2 => "Meerkat",
            3 => "Zebra",
            4 => "Giraffe",
            5 => "Ostrich",
            6 => "Cheetah",
            7 => "Rhino",
            _ => "Elephant",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert!(Rank::new(0).is_err());
        assert!(Rank::new(9).is_err());
        assert_eq!(Rank::new(1), Ok(Rank::LOWEST));
        assert_eq!(Rank::new(8), Ok(Rank::HIGHEST));
        assert_eq!(Rank::try_from(12u8), Err(RankError(12)));
    }

    #[test]
    fn test_rank_index() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.index(), i);
            assert_eq!(rank.value() as usize, i + 1);
        }
    }

    #[test]
    fn test_rank_lower() {
        assert_eq!(Rank::LOWEST.lower(), None);
        assert_eq!(Rank::HIGHEST.lower(), Rank::new(7).ok());
    }

    #[test]
    fn test_rank_names() {
        assert_eq!(Rank::LOWEST.name(), "Mouse");
        assert_eq!(Rank::HIGHEST.name(), "Elephant");
        assert_eq!(format!("{}", Rank::new(3).unwrap()), "Zebra (3)");
    }

    #[test]
    fn test_rank_serde_rejects_out_of_range() {
        let rank: Rank = serde_json::from_str("4").unwrap();
        assert_eq!(rank.value(), 4);
        assert!(serde_json::from_str::<Rank>("0").is_err());
    }
}
