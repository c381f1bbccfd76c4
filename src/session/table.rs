//! One match at one table.

use log::{debug, warn};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Builder;

use crate::bot::{GreedyCapture, Strategy};
use crate::cards::CardId;
use crate::core::log::unix_millis;
use crate::core::{GameRng, MatchConfig, MatchState, Move, PlayerId, SeatKind};
use crate::deck::initialize_match;
use crate::rules::{apply_move, MoveError};
use crate::store::{HistoryStore, MatchRecord, StoreError};

/// Failure at the table level.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("a bot move is still pending")]
    BotPending,

    #[error("the match has not finished yet")]
    Unfinished,

    #[error("could not save the match: {0}")]
    Store(#[from] StoreError),
}

struct PendingMove {
    turn: u32,
    handle: JoinHandle<Option<Move>>,
}

/// Owns the current state of one match.
///
/// Bot scheduling spawns onto the ambient tokio runtime, so
/// `schedule_bot`, `resolve_bot`, and `run_bots` must run inside one.
pub struct Table {
    state: MatchState,
    strategy: Arc<dyn Strategy>,
    ids: GameRng,
    pending: Option<PendingMove>,
    turn_started: Instant,
    record: Option<MatchRecord>,
}

impl Table {
    /// Deal a new match from `seed`.
    #[must_use]
    pub fn new(config: MatchConfig, human_name: &str, seed: u64) -> Self {
        let rng = GameRng::new(seed);
        let state = initialize_match(&config, human_name, &mut rng.for_context("deal"));
        Self {
            state,
            strategy: Arc::new(GreedyCapture),
            ids: rng.for_context("match-id"),
            pending: None,
            turn_started: Instant::now(),
            record: None,
        }
    }

    /// Replace the bot strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Strategy + 'static) -> Self {
        self.strategy = Arc::new(strategy);
        self
    }

    /// Current state, read-only.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// The human seat.
    #[must_use]
    pub fn human(&self) -> Option<PlayerId> {
        self.state.human().map(|s| s.id)
    }

    #[must_use]
    pub fn has_pending_bot(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a move, charging the time since the last move to its author.
    pub fn play(&mut self, player: PlayerId, cards: &[CardId]) -> Result<&MatchState, TableError> {
        if self.pending.is_some() {
            return Err(TableError::BotPending);
        }
        self.commit(player, cards)?;
        Ok(&self.state)
    }

    fn commit(&mut self, player: PlayerId, cards: &[CardId]) -> Result<(), MoveError> {
        let now = Instant::now();
        let charged = self
            .state
            .charge_time(player, now.saturating_duration_since(self.turn_started));
        self.state = apply_move(&charged, player, cards)?;
        self.turn_started = now;
        Ok(())
    }

    /// Start the delayed bot move for the active seat.
    ///
    /// Returns `false` when there is nothing to schedule: the match is over,
    /// a human is to move, or a bot move is already pending.
    pub fn schedule_bot(&mut self) -> bool {
        if self.pending.is_some()
            || self.state.is_finished()
            || self.state.active_seat().kind != SeatKind::Bot
        {
            return false;
        }

        let snapshot = self.state.clone();
        let strategy = Arc::clone(&self.strategy);
        let delay = snapshot.config.bot_delay();
        let turn = snapshot.turn;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            strategy.choose(&snapshot, snapshot.active)
        });
        debug!("turn {}: bot move scheduled in {:?}", turn, delay);

        self.pending = Some(PendingMove { turn, handle });
        true
    }

    /// Wait for the pending bot move and apply it.
    ///
    /// Returns `Ok(None)` when nothing was applied: no move was pending, the
    /// task was aborted, the bot had no cards, or the match moved on.
    pub async fn resolve_bot(&mut self) -> Result<Option<&MatchState>, TableError> {
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };

        let mv = match pending.handle.await {
            Ok(Some(mv)) => mv,
            Ok(None) => {
                warn!("bot at {} found no move", self.state.active);
                return Ok(None);
            }
            Err(e) => {
                debug!("bot task ended without a move: {}", e);
                return Ok(None);
            }
        };

        if self.state.turn != pending.turn || self.state.is_finished() {
            debug!("discarding stale bot move for turn {}", pending.turn);
            return Ok(None);
        }

        self.commit(mv.player, &mv.cards)?;
        Ok(Some(&self.state))
    }

    /// Drop any pending bot move. State is left as it is.
    pub fn abandon(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
            debug!("abandoned pending bot move for turn {}", pending.turn);
        }
    }

    /// Play bot turns until a human is to move or the match ends.
    pub async fn run_bots(&mut self) -> Result<&MatchState, TableError> {
        while self.schedule_bot() {
            if self.resolve_bot().await?.is_none() {
                break;
            }
        }
        Ok(&self.state)
    }

    /// Save the finished match for `username`.
    ///
    /// A failed save is logged and returned; the match itself is untouched
    /// and the same record (same id) is offered again on retry.
    pub fn record_result<S: HistoryStore + ?Sized>(
        &mut self,
        store: &S,
        username: &str,
    ) -> Result<MatchRecord, TableError> {
        let record = match &self.record {
            Some(record) => record.clone(),
            None => {
                let id = Builder::from_random_bytes(self.ids.gen_bytes()).into_uuid();
                let record = MatchRecord::from_state(&self.state, id, unix_millis())
                    .ok_or(TableError::Unfinished)?;
                self.record = Some(record.clone());
                record
            }
        };

        store.save_record(username, &record).map_err(|e| {
            warn!("saving match {} for {} failed: {}", record.id, username, e);
            TableError::Store(e)
        })?;
        Ok(record)
    }
}

impl Drop for Table {
    fn drop(&mut self) {
        self.abandon();
    }
}
