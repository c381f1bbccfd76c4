//! Turn resolution.
//!
//! `apply_move` takes one immutable state and returns the next one. The
//! steps run in a fixed order:
//!
//! 1. log the play
//! 2. take the cards out of the hand
//! 3. put them on their rank's pile
//! 4. capture, if the pile reached the threshold and a target exists
//! 5. refill the hand from the draw pile
//! 6. finish the match if the draw pile and every hand are empty
//! 7. otherwise pass the turn, skipping seats with empty hands

use log::{debug, info};
use smallvec::SmallVec;

use super::capture::{capture_target, triggers_capture};
use super::error::MoveError;
use super::standings::standings;
use crate::cards::{Card, CardId, Rank};
use crate::core::{LogKind, MatchState, MatchStatus, Move, PlayerId};

/// Apply one move, returning the resulting state.
///
/// The input state is never modified. Invalid input (wrong seat, empty or
/// mixed-rank selection, cards not in hand, finished match) is rejected with
/// a [`MoveError`] before anything changes.
pub fn apply_move(
    state: &MatchState,
    player: PlayerId,
    cards: &[CardId],
) -> Result<MatchState, MoveError> {
    let (rank, played) = validate(state, player, cards)?;

    let mut next = state.clone();
    let turn = next.turn;

    let name = next.seats[player].name.clone();
    next.log.push(
        LogKind::Action,
        turn,
        format!("{} put down {}.", name, cards_of(rank, played.len())),
    );
    debug!("turn {}: {} plays {}x{}", turn, player, played.len(), rank);

    let seat = &mut next.seats[player];
    seat.hand.retain(|c| !cards.contains(&c.id));
    next.board.add(rank, played.iter().copied());

    if triggers_capture(next.board.len(rank)) {
        if let Some(target) = capture_target(rank, &next.board) {
            let taken = next.board.take(target);
            let count = taken.len();
            let seat = &mut next.seats[player];
            seat.captured.append(taken);
            next.log.push(
                LogKind::Capture,
                turn,
                format!("{} scared away {}!", rank.name(), cards_of(target, count)),
            );
            info!(
                "turn {}: {} captured {} cards of {} (score {})",
                turn,
                player,
                count,
                target,
                next.seats[player].score()
            );
        }
    }

    let hand_size = next.config.hand_size();
    let seat = &mut next.seats[player];
    while seat.hand.len() < hand_size {
        match next.draw_pile.pop_back() {
            Some(card) => seat.hand.push_back(card),
            None => break,
        }
    }
    seat.sort_hand();

    if next.draw_pile.is_empty() && next.seats.values().all(|s| s.hand.is_empty()) {
        finish(&mut next);
    } else {
        advance_turn(&mut next);
    }

    Ok(next)
}

/// Apply a [`Move`] value.
pub fn apply(state: &MatchState, mv: &Move) -> Result<MatchState, MoveError> {
    apply_move(state, mv.player, &mv.cards)
}

/// Check preconditions and collect the played cards in selection order.
fn validate(
    state: &MatchState,
    player: PlayerId,
    cards: &[CardId],
) -> Result<(Rank, SmallVec<[Card; 8]>), MoveError> {
    if state.is_finished() {
        return Err(MoveError::MatchFinished);
    }
    let seat = state
        .seats
        .try_get(player)
        .ok_or(MoveError::UnknownPlayer(player))?;
    if state.active != player {
        return Err(MoveError::NotYourTurn {
            expected: state.active,
            got: player,
        });
    }

    let mut played: SmallVec<[Card; 8]> = SmallVec::new();
    for &id in cards {
        if played.iter().any(|c| c.id == id) {
            return Err(MoveError::DuplicateCard(id));
        }
        let card = seat
            .hand
            .iter()
            .find(|c| c.id == id)
            .copied()
            .ok_or(MoveError::CardNotInHand(id))?;
        played.push(card);
    }

    let first = played.first().ok_or(MoveError::EmptySelection)?.rank;
    if let Some(other) = played.iter().map(|c| c.rank).find(|&r| r != first) {
        return Err(MoveError::MixedRanks { first, other });
    }

    Ok((first, played))
}

fn finish(state: &mut MatchState) {
    let table = standings(state);
    state.status = MatchStatus::Finished;

    let Some(top) = table.first() else {
        return;
    };
    state.winner = Some(top.player);

    let winners: Vec<&str> = table
        .iter()
        .filter(|s| s.score == top.score)
        .map(|s| state.seats[s.player].name.as_str())
        .collect();
    let message = format!(
        "Match over! Winner: {} with {} cards.",
        winners.join(", "),
        top.score
    );
    state.log.push(LogKind::Info, state.turn, message);

    info!(
        "match finished after {} turns, winner {} ({} cards)",
        state.turn, top.player, top.score
    );
}

/// Pass the turn to the next seat holding cards, at most one full rotation.
fn advance_turn(state: &mut MatchState) {
    let count = state.player_count();
    let turn = state.turn;
    let mut next = state.active.next(count);

    for _ in 0..count {
        if !state.seats[next].hand.is_empty() {
            break;
        }
        let message = format!("{} has no cards and is skipped.", state.seats[next].name);
        state.log.push(LogKind::Info, turn, message);
        next = next.next(count);
    }

    state.active = next;
    state.turn += 1;
}

fn cards_of(rank: Rank, count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {} card{}", count, rank.name(), plural)
}
