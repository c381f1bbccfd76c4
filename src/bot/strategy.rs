//! Greedy capture-seeking strategy.

use smallvec::SmallVec;

use crate::cards::rank::RANK_COUNT;
use crate::cards::{Card, Rank};
use crate::core::{MatchState, Move, PlayerId, SeatKind};
use crate::rules::{capture_target, triggers_capture};

/// Chooses a move for a seat.
pub trait Strategy: Send + Sync {
    /// Pick the cards `player` should put down.
    ///
    /// Returns `None` only when the seat has nothing to play.
    fn choose(&self, state: &MatchState, player: PlayerId) -> Option<Move>;
}

/// Capture when possible, otherwise unload the biggest group.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyCapture;

impl Strategy for GreedyCapture {
    fn choose(&self, state: &MatchState, player: PlayerId) -> Option<Move> {
        let seat = state.seats.try_get(player)?;
        let groups = group_by_rank(seat.hand.iter());

        let capturing = Rank::ALL.into_iter().find(|&rank| {
            let group = &groups[rank.index()];
            !group.is_empty()
                && triggers_capture(state.board.len(rank) + group.len())
                && capture_target(rank, &state.board).is_some()
        });

        // max_by_key keeps the last maximum; reversing makes the lowest rank win ties.
        let rank = capturing.or_else(|| {
            Rank::ALL
                .into_iter()
                .rev()
                .filter(|r| !groups[r.index()].is_empty())
                .max_by_key(|r| groups[r.index()].len())
        })?;

        Some(Move::from_cards(player, &groups[rank.index()]))
    }
}

fn group_by_rank<'a>(hand: impl Iterator<Item = &'a Card>) -> [SmallVec<[Card; 8]>; RANK_COUNT] {
    let mut groups: [SmallVec<[Card; 8]>; RANK_COUNT] = Default::default();
    for card in hand {
        groups[card.rank.index()].push(*card);
    }
    groups
}

/// The standard bot's move for the active seat.
///
/// `None` when the match is over, the active seat is human, or its hand is
/// empty (the last cannot happen under normal turn order).
#[must_use]
pub fn choose_move(state: &MatchState) -> Option<Move> {
    if state.is_finished() || state.active_seat().kind == SeatKind::Human {
        return None;
    }
    GreedyCapture.choose(state, state.active)
}

/// The standard bot's move for any seat, human or not.
///
/// Used for hints and for driving every seat in headless simulations.
#[must_use]
pub fn suggest_move(state: &MatchState, player: PlayerId) -> Option<Move> {
    GreedyCapture.choose(state, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::{GameRng, MatchConfig};
    use crate::deck::initialize_match;
    use crate::zones::Board;
    use im::Vector;

    fn rank(v: u8) -> Rank {
        Rank::new(v).unwrap()
    }

    /// Four-seat state where seat 1 (a bot) is active with the given hand.
    fn bot_to_move(hand: &[(u32, u8)], board: &[(u32, u8)]) -> MatchState {
        let mut state =
            initialize_match(&MatchConfig::default(), "Human", &mut GameRng::new(11));
        let bot = PlayerId::new(1);
        state.active = bot;
        state.seats[bot].hand = hand
            .iter()
            .map(|&(id, r)| Card::new(CardId::new(id), rank(r)))
            .collect::<Vector<_>>();
        state.board = Board::new();
        for &(id, r) in board {
            state.board.add(rank(r), [Card::new(CardId::new(id), rank(r))]);
        }
        state
    }

    fn ids(mv: &Move) -> Vec<u32> {
        mv.cards.iter().map(|c| c.raw()).collect()
    }

    #[test]
    fn test_prefers_capture_over_bigger_group() {
        // Three Meerkats fill a pile but find nothing below; the two
        // Giraffes complete theirs and scare the Zebra.
        let state = bot_to_move(
            &[(100, 2), (101, 2), (102, 2), (103, 4), (104, 4)],
            &[(1, 4), (2, 3)],
        );
        let mv = choose_move(&state).unwrap();
        assert_eq!(ids(&mv), vec![103, 104]);
    }

    #[test]
    fn test_capture_requires_a_target() {
        // The 5s would reach three cards but nothing sits below them.
        let state = bot_to_move(&[(100, 5), (101, 5), (102, 7)], &[(1, 5)]);
        let mv = choose_move(&state).unwrap();
        assert_eq!(ids(&mv), vec![100, 101]);
        assert!(capture_target(rank(5), &state.board).is_none());
    }

    #[test]
    fn test_mouse_capture_of_elephant() {
        let state = bot_to_move(&[(100, 1), (101, 3), (102, 3)], &[(1, 1), (2, 1), (3, 8)]);
        let mv = choose_move(&state).unwrap();
        assert_eq!(ids(&mv), vec![100]);
    }

    #[test]
    fn test_fallback_largest_group_lowest_rank_on_tie() {
        let state = bot_to_move(&[(100, 2), (101, 2), (102, 6), (103, 6), (104, 8)], &[]);
        let mv = choose_move(&state).unwrap();
        assert_eq!(ids(&mv), vec![100, 101]);
    }

    #[test]
    fn test_human_turn_yields_none() {
        let mut state = bot_to_move(&[(100, 2)], &[]);
        state.active = PlayerId::new(0);
        assert!(choose_move(&state).is_none());
        assert!(suggest_move(&state, PlayerId::new(0)).is_some());
    }

    #[test]
    fn test_empty_hand_yields_none() {
        let state = bot_to_move(&[], &[]);
        assert!(choose_move(&state).is_none());
    }
}
