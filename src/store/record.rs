//! Completed-match records.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::core::MatchState;
use crate::rules::standings;

/// One seat's result in a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub score: usize,
    /// 1-based finishing position.
    pub position: usize,
    pub time_used: Duration,
    pub human: bool,
}

/// Summary of a finished match, as stored in history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Uuid,
    pub completed_at_ms: u64,
    pub duration: Duration,
    pub winner_name: String,
    /// Seats in finishing order.
    pub players: Vec<PlayerRecord>,
}

impl MatchRecord {
    /// Summarize a finished match. Returns `None` while it is still playing.
    #[must_use]
    pub fn from_state(state: &MatchState, id: Uuid, completed_at_ms: u64) -> Option<Self> {
        let winner = state.winner_seat().filter(|_| state.is_finished())?;

        let players = standings(state)
            .into_iter()
            .map(|row| {
                let seat = state.seat(row.player);
                PlayerRecord {
                    name: seat.name.clone(),
                    score: row.score,
                    position: row.position,
                    time_used: seat.time_used,
                    human: seat.is_human(),
                }
            })
            .collect();

        Some(Self {
            id,
            completed_at_ms,
            duration: Duration::from_millis(completed_at_ms.saturating_sub(state.started_at_ms)),
            winner_name: winner.name.clone(),
            players,
        })
    }
}
