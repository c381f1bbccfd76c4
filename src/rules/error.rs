//! Rejected moves.
//!
//! A rejected move never changes state: `apply_move` returns the error and
//! the caller keeps its unmodified snapshot.

use thiserror::Error;

use crate::cards::{CardId, Rank};
use crate::core::PlayerId;

/// Reason a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the match is already finished")]
    MatchFinished,

    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),

    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: PlayerId, got: PlayerId },

    #[error("a move must put down at least one card")]
    EmptySelection,

    #[error("all cards in a move must share one rank, found {first} and {other}")]
    MixedRanks { first: Rank, other: Rank },

    #[error("{0} is not in the player's hand")]
    CardNotInHand(CardId),

    #[error("{0} was selected more than once")]
    DuplicateCard(CardId),
}
