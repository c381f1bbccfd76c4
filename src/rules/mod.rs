//! Rules of Kariba.
//!
//! - `capture`: which pile a full pile scares away
//! - `resolver`: applies one move, producing the next `MatchState`
//! - `standings`: ranking seats by captured cards
//!
//! The rules never mutate a caller's state; each accepted move produces a
//! new value, and each rejected move produces a `MoveError`.

pub mod capture;
pub mod error;
pub mod resolver;
pub mod standings;

pub use capture::{capture_target, triggers_capture};
pub use error::MoveError;
pub use resolver::{apply, apply_move};
pub use standings::{standings, Standing};
