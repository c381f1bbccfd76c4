//! # kariba
//!
//! Rules engine and bot player for Kariba, the waterhole card game.
//!
//! Players put down groups of same-rank animals on eight piles. A pile that
//! reaches three cards scares away the nearest smaller pile, and the Mouse
//! scares away the Elephant. Most cards scared away wins.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: `MatchState` is a persistent value. Every move
//!    produces a new state; earlier snapshots stay valid for undo, replay,
//!    and tests.
//!
//! 2. **Reproducible**: all randomness comes from a seeded `GameRng`.
//!
//! 3. **Engine, not product**: rendering, transport, and storage are
//!    collaborators. The store is a trait; the presentation layer reads
//!    snapshots and hands back moves.
//!
//! ## Modules
//!
//! - `cards`: ranks and card identity
//! - `core`: seats, configuration, RNG, match state, match log, moves
//! - `zones`: the waterhole board
//! - `deck`: deck building and the opening deal
//! - `rules`: capture rule, turn resolver, standings
//! - `bot`: bot strategies
//! - `store`: accounts and match history
//! - `session`: a table that paces bot moves and records results

pub mod bot;
pub mod cards;
pub mod core;
pub mod deck;
pub mod rules;
pub mod session;
pub mod store;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, Rank};

pub use crate::core::{
    ConfigError, GameRng, LogEntry, LogKind, MatchConfig, MatchLog, MatchState, MatchStatus, Move,
    PlayerId, PlayerMap, Seat, SeatKind, CAPTURE_THRESHOLD,
};

pub use crate::zones::Board;

pub use crate::deck::{build_deck, initialize_match};

pub use crate::rules::{apply, apply_move, capture_target, standings, MoveError, Standing};

pub use crate::bot::{choose_move, suggest_move, GreedyCapture, Strategy};

pub use crate::store::{
    load_history, HistoryStore, HistoryView, MatchRecord, MemoryStore, PlayerRecord, StoreError,
    User,
};

pub use crate::session::{Table, TableError};
