//! The waterhole: one pile per rank.
//!
//! Cards sit in a pile until the pile is scared away by a bigger one.
//! The board is a fixed array indexed by `Rank::index()`; there are only
//! eight piles, so no lookup structure beyond the array is needed.

pub mod board;

pub use board::{Board, Pile};
