//! The capture ("scare away") rule.
//!
//! When a pile reaches `CAPTURE_THRESHOLD` cards it scares away exactly one
//! other pile:
//! - the Mouse (1) only ever scares the Elephant (8);
//! - every other rank scares the nearest non-empty pile below it.
//!
//! A pile is always taken whole.

use crate::cards::Rank;
use crate::core::CAPTURE_THRESHOLD;
use crate::zones::Board;

/// The pile that `rank` would scare away on the current board.
///
/// Does not look at the acting pile's size; see [`triggers_capture`].
///
/// ```
/// use kariba::cards::{Card, CardId, Rank};
/// use kariba::rules::capture_target;
/// use kariba::zones::Board;
///
/// let mut board = Board::new();
/// let elephant = Rank::HIGHEST;
/// board.add(elephant, [Card::new(CardId::new(0), elephant)]);
///
/// assert_eq!(capture_target(Rank::LOWEST, &board), Some(elephant));
/// assert_eq!(capture_target(Rank::new(7).unwrap(), &board), None);
/// ```
#[must_use]
pub fn capture_target(rank: Rank, board: &Board) -> Option<Rank> {
    if rank == Rank::LOWEST {
        return Some(Rank::HIGHEST).filter(|&r| !board.is_empty(r));
    }

    std::iter::successors(rank.lower(), |r| r.lower()).find(|&r| !board.is_empty(r))
}

/// Whether a pile of `pile_len` cards is big enough to scare another.
#[must_use]
pub fn triggers_capture(pile_len: usize) -> bool {
    pile_len >= CAPTURE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};

    fn rank(v: u8) -> Rank {
        Rank::new(v).unwrap()
    }

    fn board_with(piles: &[(u8, usize)]) -> Board {
        let mut board = Board::new();
        let mut next_id = 0;
        for &(r, n) in piles {
            let cards: Vec<_> = (0..n)
                .map(|_| {
                    next_id += 1;
                    Card::new(CardId::new(next_id), rank(r))
                })
                .collect();
            board.add(rank(r), cards);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_target() {
        let board = Board::new();
        for r in Rank::ALL {
            assert_eq!(capture_target(r, &board), None, "{}", r);
        }
    }

    #[test]
    fn test_nearest_lower_pile_wins() {
        let board = board_with(&[(2, 1), (4, 2)]);
        assert_eq!(capture_target(rank(6), &board), Some(rank(4)));
        assert_eq!(capture_target(rank(4), &board), Some(rank(2)));
        assert_eq!(capture_target(rank(3), &board), Some(rank(2)));
        assert_eq!(capture_target(rank(2), &board), None);
    }

    #[test]
    fn test_mouse_ignores_everything_but_elephant() {
        let board = board_with(&[(2, 3), (5, 1), (7, 2)]);
        assert_eq!(capture_target(Rank::LOWEST, &board), None);

        let board = board_with(&[(2, 3), (8, 1)]);
        assert_eq!(capture_target(Rank::LOWEST, &board), Some(Rank::HIGHEST));
    }

    #[test]
    fn test_elephant_is_not_scared_by_mid_ranks_above_it() {
        let board = board_with(&[(8, 2)]);
        for v in 2..=8 {
            assert_eq!(capture_target(rank(v), &board), None, "rank {}", v);
        }
    }

    #[test]
    fn test_threshold() {
        assert!(!triggers_capture(2));
        assert!(triggers_capture(3));
        assert!(triggers_capture(5));
    }
}
