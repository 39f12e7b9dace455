use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    bitboard::BitBoard,
    movegen::generate,
    types::{Move, Position, Side},
};

/// A board plus the turn bookkeeping the host hands over on every call.
///
/// After a capture the same side moves again: `is_jump` is set and
/// `last_jump_position` records the landing square. The host only passes
/// the flag, so a state rebuilt from host data has no landing square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub board: BitBoard,
    pub side_to_move: Side,
    pub is_jump: bool,
    pub last_jump_position: Option<Position>,
}

impl GameState {
    pub fn new(board: BitBoard, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            is_jump: false,
            last_jump_position: None,
        }
    }

    /// Opening position, White to move.
    pub fn startpos() -> Self {
        Self::new(BitBoard::startpos(), Side::White)
    }

    /// Rebuilds a state from the host's four values.
    pub fn from_host(white: u32, black: u32, is_white_to_move: bool, is_jump: bool) -> Self {
        Self {
            board: BitBoard::new(white, black),
            side_to_move: Side::from_is_white(is_white_to_move),
            is_jump,
            last_jump_position: None,
        }
    }

    pub fn is_white_to_move(&self) -> bool {
        self.side_to_move.is_white()
    }

    /// Moves available to the side to move. Pending jump chains are not
    /// enforced here.
    pub fn moves(&self) -> Vec<Move> {
        generate(&self.board, self.side_to_move)
    }

    /// Ends an unfinished capture chain and hands the move to the opponent.
    pub fn pass_turn(&self) -> GameState {
        Self {
            board: self.board,
            side_to_move: self.side_to_move.other(),
            is_jump: false,
            last_jump_position: None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "white: {:#010x} black: {:#010x} to move: {} is_jump: {}",
            self.board.white_mask(),
            self.board.black_mask(),
            self.side_to_move,
            self.is_jump
        )?;
        if let Some(pos) = self.last_jump_position {
            write!(f, " last_jump_position: {pos}")?;
        }
        Ok(())
    }
}

/// Applies `mv` for the side to move and returns the successor state.
///
/// A capture keeps the same side on move and records where it landed; a
/// simple step clears the jump flag and passes the turn. `mv` must be legal
/// for `state`.
pub fn apply_move(state: &GameState, mv: Move) -> GameState {
    if state.is_jump && mv.is_jump() {
        trace!(%mv, "continuing capture chain");
    }

    let mut next = *state;
    next.board.apply_move(state.side_to_move, &mv);

    if mv.is_jump() {
        next.is_jump = true;
        next.last_jump_position = Some(mv.end);
    } else {
        next.is_jump = false;
        next.last_jump_position = None;
        next.side_to_move = state.side_to_move.other();
    }
    next
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
