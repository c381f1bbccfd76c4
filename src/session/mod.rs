//! Match orchestration.
//!
//! A `Table` owns one match and serializes everything that touches it:
//! human intents, paced bot moves, time accounting, and saving the result.
//! Bot moves are computed on a spawned task after the configured delay and
//! only applied if the match is still at the turn they were computed for,
//! so abandoning a match (or dropping the table) can never corrupt state.

mod table;

pub use table::{Table, TableError};
