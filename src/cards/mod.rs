//! Card system: ranks and card instances.
//!
//! ## Key Types
//!
//! - `Rank`: One of the eight animals, 1 (Mouse) through 8 (Elephant)
//! - `CardId`: Unique identity of a single physical card
//! - `Card`: Identity plus rank, immutable once dealt
//!
//! A deck holds `copies_per_rank` cards of every rank. Card identity is what
//! the engine tracks; two cards of the same rank are never interchangeable
//! from the engine's point of view.

pub mod card;
pub mod rank;

pub use card::{Card, CardId};
pub use rank::{Rank, RankError};
