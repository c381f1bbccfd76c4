//! Deck construction and opening deal.

use im::Vector;
use log::debug;

use crate::cards::{Card, CardId, Rank};
use crate::core::log::unix_millis;
use crate::core::{
    GameRng, LogKind, MatchConfig, MatchLog, MatchState, MatchStatus, PlayerId, PlayerMap, Seat,
    SeatKind,
};
use crate::zones::Board;

/// Build and shuffle a full deck.
///
/// Produces `copies_per_rank` cards of each rank with ids `0..total_cards`,
/// then applies a uniform shuffle drawn from `rng`.
pub fn build_deck(config: &MatchConfig, rng: &mut GameRng) -> Vec<Card> {
    let mut deck: Vec<Card> = Rank::ALL
        .iter()
        .flat_map(|&rank| std::iter::repeat(rank).take(config.copies_per_rank()))
        .enumerate()
        .map(|(i, rank)| Card::new(CardId::new(i as u32), rank))
        .collect();

    rng.shuffle(&mut deck);
    deck
}

/// Seat the table, deal opening hands, and return the first state.
///
/// Seat 0 is the human; a blank name falls back to the configured default.
/// Hands are dealt seat by seat, `hand_size` cards each, off the top of the
/// shuffled deck.
pub fn initialize_match(config: &MatchConfig, human_name: &str, rng: &mut GameRng) -> MatchState {
    let mut draw_pile: Vector<Card> = build_deck(config, rng).into_iter().collect();

    let human_name = match human_name.trim() {
        "" => config.default_human_name().to_string(),
        name => name.to_string(),
    };

    let mut seats = PlayerMap::new(config.table_size(), |id| match id.index() {
        0 => Seat::new(id, human_name.clone(), SeatKind::Human),
        n => Seat::new(id, config.bot_name(n - 1), SeatKind::Bot),
    });

    for player in PlayerId::all(config.table_size()) {
        let seat = &mut seats[player];
        for _ in 0..config.hand_size() {
            match draw_pile.pop_back() {
                Some(card) => seat.hand.push_back(card),
                None => break,
            }
        }
        seat.sort_hand();
    }

    let mut log = MatchLog::new();
    log.push(
        LogKind::Info,
        1,
        "The match begins. Scare away as many animals as you can!",
    );

    debug!(
        "dealt {} seats, {} cards left in draw pile",
        config.table_size(),
        draw_pile.len()
    );

    MatchState {
        config: config.clone(),
        seats,
        board: Board::new(),
        draw_pile,
        log,
        turn: 1,
        active: PlayerId::new(0),
        status: MatchStatus::Playing,
        winner: None,
        started_at_ms: unix_millis(),
    }
}
