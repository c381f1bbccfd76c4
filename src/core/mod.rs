//! Core engine types: seats, configuration, RNG, match state, match log.
//!
//! Everything the rules and the bot read lives here. The types are plain
//! values; the rules module is the only place that produces new states.

pub mod action;
pub mod config;
pub mod log;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Move;
pub use config::{ConfigError, MatchConfig, CAPTURE_THRESHOLD};
pub use self::log::{LogEntry, LogKind, MatchLog};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{MatchState, MatchStatus, Seat, SeatKind, SnapshotError};
