//! Piece-count evaluation.

use checkers_core::{BitBoard, Side};

/// Score of a node whose side to move has no legal move: the worst outcome
/// for that side. Must stay outside the reachable piece differential.
pub const NO_MOVE_SCORE: i32 = 50;

const _: () = assert!(NO_MOVE_SCORE > 32, "no-move score collides with real scores");

/// Absolute score of the board: white men minus black men.
///
/// White maximises this value, Black minimises it.
pub fn evaluate(board: &BitBoard) -> i32 {
    board.count(Side::White) as i32 - board.count(Side::Black) as i32
}

/// Starting best score for a node where `side` is to move.
pub fn no_move_score(side: Side) -> i32 {
    match side {
        Side::White => -NO_MOVE_SCORE,
        Side::Black => NO_MOVE_SCORE,
    }
}

/// Whether `score` is strictly better than `best` for `side`.
#[inline]
pub fn improves(side: Side, score: i32, best: i32) -> bool {
    match side {
        Side::White => score > best,
        Side::Black => score < best,
    }
}
