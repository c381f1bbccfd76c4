//! Match configuration.
//!
//! `MatchConfig` carries the table constants a match is dealt with:
//! - table size (one human plus `table_size - 1` bots)
//! - hand size, used for the initial deal and every refill
//! - copies of each rank in the deck
//! - bot names and the presentation delay before a bot move
//!
//! The defaults reproduce the standard four-seat game with a 64-card deck.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::cards::rank::RANK_COUNT;

/// Cards a pile must hold before it scares away another pile.
pub const CAPTURE_THRESHOLD: usize = 3;

/// Configuration values no match can be dealt with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("table size must be 2-8, got {0}")]
    TableSize(usize),

    #[error("hand size must be positive")]
    HandSize,

    #[error("deck must hold at least one card per rank")]
    EmptyDeck,
}

/// Complete match configuration.
///
/// Fields are read through accessors and set through the `with_*` builders,
/// which reject values no match can be dealt with. Deserialization applies
/// the same checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFields")]
pub struct MatchConfig {
    /// Seats at the table, human included (2-8).
    table_size: usize,

    /// Target hand size for the deal and refills.
    hand_size: usize,

    /// Copies of each rank in the deck.
    copies_per_rank: usize,

    /// Names given to bots in seat order. Missing names become "Bot N".
    bot_names: Vec<String>,

    /// Name for the human when the supplied one is blank.
    default_human_name: String,

    /// Real-time pause before a bot move resolves. Presentation only.
    bot_delay: Duration,
}

/// Unchecked wire form of `MatchConfig`.
#[derive(Deserialize)]
struct ConfigFields {
    table_size: usize,
    hand_size: usize,
    copies_per_rank: usize,
    bot_names: Vec<String>,
    default_human_name: String,
    bot_delay: Duration,
}

impl TryFrom<ConfigFields> for MatchConfig {
    type Error = ConfigError;

    fn try_from(f: ConfigFields) -> Result<Self, Self::Error> {
        let config = Self {
            table_size: f.table_size,
            hand_size: f.hand_size,
            copies_per_rank: f.copies_per_rank,
            bot_names: f.bot_names,
            default_human_name: f.default_human_name,
            bot_delay: f.bot_delay,
        };
        config.check()?;
        Ok(config)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            table_size: 4,
            hand_size: 5,
            copies_per_rank: 8,
            bot_names: vec!["Bot 1".into(), "Bot 2".into(), "Bot 3".into()],
            default_human_name: "Player 1".into(),
            bot_delay: Duration::from_millis(1500),
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of seats.
    #[must_use]
    pub fn with_table_size(mut self, seats: usize) -> Self {
        assert!((2..=8).contains(&seats), "Table size must be 2-8");
        self.table_size = seats;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hand size must be positive");
        self.hand_size = size;
        self
    }

    /// Set the number of copies of each rank.
    #[must_use]
    pub fn with_copies_per_rank(mut self, copies: usize) -> Self {
        assert!(copies > 0, "Deck must hold at least one card per rank");
        self.copies_per_rank = copies;
        self
    }

    /// Replace the bot names.
    #[must_use]
    pub fn with_bot_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bot_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the bot pacing delay.
    #[must_use]
    pub fn with_bot_delay(mut self, delay: Duration) -> Self {
        self.bot_delay = delay;
        self
    }

    /// Verify every value is playable.
    pub fn check(&self) -> Result<(), ConfigError> {
        if !(2..=8).contains(&self.table_size) {
            return Err(ConfigError::TableSize(self.table_size));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::HandSize);
        }
        if self.copies_per_rank == 0 {
            return Err(ConfigError::EmptyDeck);
        }
        Ok(())
    }

    /// Seats at the table, human included.
    #[must_use]
    pub fn table_size(&self) -> usize {
        self.table_size
    }

    /// Target hand size for the deal and refills.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    #[must_use]
    pub fn copies_per_rank(&self) -> usize {
        self.copies_per_rank
    }

    /// Name for the human when the supplied one is blank.
    #[must_use]
    pub fn default_human_name(&self) -> &str {
        &self.default_human_name
    }

    /// Real-time pause before a bot move resolves.
    #[must_use]
    pub fn bot_delay(&self) -> Duration {
        self.bot_delay
    }

    /// Number of bot seats.
    #[must_use]
    pub fn bot_count(&self) -> usize {
        self.table_size - 1
    }

    /// Total cards in play for the whole match.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.copies_per_rank * RANK_COUNT
    }

    /// Display name of the `n`th bot (0-based).
    #[must_use]
    pub fn bot_name(&self, n: usize) -> String {
        self.bot_names
            .get(n)
            .cloned()
            .unwrap_or_else(|| format!("Bot {}", n + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.table_size, 4);
        assert_eq!(config.bot_count(), 3);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.total_cards(), 64);
        assert_eq!(config.bot_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_config_builder() {
        let config = MatchConfig::new()
            .with_table_size(6)
            .with_hand_size(4)
            .with_copies_per_rank(3)
            .with_bot_names(["Ada", "Grace"])
            .with_bot_delay(Duration::ZERO);

        assert_eq!(config.bot_count(), 5);
        assert_eq!(config.total_cards(), 24);
        assert_eq!(config.bot_name(1), "Grace");
        assert_eq!(config.bot_name(4), "Bot 5");
    }

    #[test]
    #[should_panic(expected = "Table size must be 2-8")]
    fn test_table_size_too_small() {
        let _ = MatchConfig::new().with_table_size(1);
    }

    #[test]
    #[should_panic(expected = "Hand size must be positive")]
    fn test_zero_hand_size() {
        let _ = MatchConfig::new().with_hand_size(0);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let config = MatchConfig::new().with_table_size(3).with_hand_size(2);
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert!(back.check().is_ok());
    }

    #[test]
    fn test_deserialize_rejects_unplayable_values() {
        let mut value = serde_json::to_value(MatchConfig::default()).unwrap();
        value["hand_size"] = 0.into();
        let err = serde_json::from_value::<MatchConfig>(value).unwrap_err();
        assert!(err.to_string().contains("hand size must be positive"));

        let mut value = serde_json::to_value(MatchConfig::default()).unwrap();
        value["table_size"] = 9.into();
        assert!(serde_json::from_value::<MatchConfig>(value).is_err());

        let mut value = serde_json::to_value(MatchConfig::default()).unwrap();
        value["copies_per_rank"] = 0.into();
        assert!(serde_json::from_value::<MatchConfig>(value).is_err());
    }
}
