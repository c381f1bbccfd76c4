//! Match state: the authoritative snapshot of one Kariba match.
//!
//! ## Seat
//!
//! One player at the table: hand, captured pile, time used.
//!
//! ## MatchState
//!
//! Complete match state:
//! - Seats in turn order
//! - The waterhole board
//! - The draw pile (top = back)
//! - The match log
//! - Turn number, active seat, status, winner
//!
//! Every collection is an `im` persistent structure, so cloning a
//! `MatchState` is O(1) and a retained snapshot never observes later moves.
//! The rules module produces a fresh state per move instead of mutating the
//! caller's copy.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::config::MatchConfig;
use super::log::MatchLog;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Card, CardId};
use crate::zones::Board;

/// Who decides a seat's moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatKind {
    Human,
    Bot,
}

/// A player at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
    pub kind: SeatKind,
    /// Unplayed cards, kept sorted by rank.
    pub hand: Vector<Card>,
    /// Cards this seat has scared away.
    pub captured: Vector<Card>,
    /// Time spent deciding moves.
    pub time_used: Duration,
}

impl Seat {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, kind: SeatKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            hand: Vector::new(),
            captured: Vector::new(),
            time_used: Duration::ZERO,
        }
    }

    /// Score is the size of the captured pile.
    #[must_use]
    pub fn score(&self) -> usize {
        self.captured.len()
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.kind == SeatKind::Human
    }

    /// Check whether a card is in this seat's hand.
    #[must_use]
    pub fn holds(&self, card: CardId) -> bool {
        self.hand.iter().any(|c| c.id == card)
    }

    /// Re-sort the hand by rank. Cosmetic only.
    pub(crate) fn sort_hand(&mut self) {
        self.hand.sort_by(|a, b| (a.rank, a.id).cmp(&(b.rank, b.id)));
    }
}

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Playing,
    Finished,
}

/// Snapshot encoding failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode match snapshot: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode match snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// Full match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Table constants this match was dealt with.
    pub config: MatchConfig,

    /// Seats in turn order.
    pub seats: PlayerMap<Seat>,

    /// The waterhole.
    pub board: Board,

    /// Undealt cards; draws come off the back.
    pub draw_pile: Vector<Card>,

    /// Observational log.
    pub log: MatchLog,

    /// Turn number (starts at 1).
    pub turn: u32,

    /// Seat whose move is expected.
    pub active: PlayerId,

    pub status: MatchStatus,

    /// Set only once `status` is `Finished`.
    pub winner: Option<PlayerId>,

    /// Wall-clock start in milliseconds since the Unix epoch.
    pub started_at_ms: u64,
}

impl MatchState {
    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.player_count()
    }

    /// Get a seat.
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &Seat {
        &self.seats[player]
    }

    /// The seat whose move is expected.
    #[must_use]
    pub fn active_seat(&self) -> &Seat {
        &self.seats[self.active]
    }

    /// The first human seat, if any.
    #[must_use]
    pub fn human(&self) -> Option<&Seat> {
        self.seats.values().find(|s| s.is_human())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// The winning seat once the match is over.
    #[must_use]
    pub fn winner_seat(&self) -> Option<&Seat> {
        self.winner.map(|p| self.seat(p))
    }

    /// Cards in every location. Constant over a match.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let held: usize = self
            .seats
            .values()
            .map(|s| s.hand.len() + s.captured.len())
            .sum();
        held + self.board.total_cards() + self.draw_pile.len()
    }

    /// Add thinking time to a seat, returning the updated state.
    #[must_use]
    pub fn charge_time(&self, player: PlayerId, elapsed: Duration) -> MatchState {
        let mut next = self.clone();
        if player.index() < next.player_count() {
            next.seats[player].time_used += elapsed;
        }
        next
    }

    /// Encode the state as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a snapshot produced by [`MatchState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<MatchState, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
