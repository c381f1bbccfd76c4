//! Bot move selection.
//!
//! Strategies are trait-based so a table can swap in a different player
//! model. `GreedyCapture` is the standard bot:
//! - play any rank group that would complete a pile and scare something away
//! - otherwise play the largest group, lowest rank first on ties

mod strategy;

pub use strategy::{choose_move, suggest_move, GreedyCapture, Strategy};
