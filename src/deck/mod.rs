//! Deck building and the initial deal.
//!
//! - `build_deck`: every rank `copies_per_rank` times, uniformly shuffled
//! - `initialize_match`: seats one human and the bots, deals hands, and
//!   returns the opening `MatchState`

mod builder;

pub use builder::{build_deck, initialize_match};
