//! Final (or running) standings.
//!
//! Seats are ordered by score, highest first. Equal scores keep seat order,
//! so the earliest seat wins a tie. The winner recorded at the end of a
//! match is always `standings(state)[0]`.

use serde::{Deserialize, Serialize};

use crate::core::{MatchState, PlayerId};

/// One row of the standings table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub score: usize,
    /// 1-based finishing position.
    pub position: usize,
}

/// Rank every seat by captured cards.
#[must_use]
pub fn standings(state: &MatchState) -> Vec<Standing> {
    let mut rows: Vec<(PlayerId, usize)> = state
        .seats
        .iter()
        .map(|(id, seat)| (id, seat.score()))
        .collect();

    // Stable sort: ties stay in seat order.
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    rows.into_iter()
        .enumerate()
        .map(|(i, (player, score))| Standing {
            player,
            score,
            position: i + 1,
        })
        .collect()
}
