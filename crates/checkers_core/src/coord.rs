//! Mapping between board coordinates and dark-square bit indices.
//!
//! Only the 32 dark squares are playable. They are numbered rank by rank from
//! the bottom left, so squares 0..3 sit on rank 0, 4..7 on rank 1, and so on:
//!
//! ```text
//!  # 28 # 29 # 30 # 31
//!  24 # 25 # 26 # 27 #
//!  # 20 # 21 # 22 # 23
//!  16 # 17 # 18 # 19 #
//!  # 12 # 13 # 14 # 15
//!  08 # 09 # 10 # 11 #
//!  # 04 # 05 # 06 # 07
//!  00 # 01 # 02 # 03 #
//! ```

use crate::types::Position;

pub const BOARD_SIZE: i8 = 8;
pub const NUM_SQUARES: u8 = 32;

#[inline]
pub fn is_on_board(file: i8, rank: i8) -> bool {
    (0..BOARD_SIZE).contains(&file) && (0..BOARD_SIZE).contains(&rank)
}

/// Dark squares are those whose file and rank have the same parity.
#[inline]
pub fn is_dark(file: i8, rank: i8) -> bool {
    (file + rank).rem_euclid(2) == 0
}

#[inline]
pub fn bit_index(file: i8, rank: i8) -> u8 {
    debug_assert!(
        is_on_board(file, rank) && is_dark(file, rank),
        "({file},{rank}) is not a playable square"
    );
    (rank * 4 + file / 2) as u8
}

#[inline]
pub fn position_of(index: u8) -> (i8, i8) {
    debug_assert!(index < NUM_SQUARES, "square index {index} out of range");
    let rank = (index / 4) as i8;
    let file = ((index % 4) * 2) as i8 + rank % 2;
    (file, rank)
}

#[inline]
pub fn mask_of(file: i8, rank: i8) -> u32 {
    1u32 << bit_index(file, rank)
}

/// Steps to the dark square with the next bit index. Past square 31 the
/// result lands on rank 8, which is how scans know to stop.
#[inline]
pub fn next_dark_square(pos: Position) -> Position {
    let mut file = pos.file + 2;
    let mut rank = pos.rank;
    if file >= BOARD_SIZE {
        rank += 1;
        file = rank % 2;
    }
    Position::new(file, rank)
}

/// Iterator over all dark squares in bit-index order.
#[derive(Clone, Debug)]
pub struct DarkSquares {
    next: Position,
}

impl Iterator for DarkSquares {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if !self.next.is_on_board() {
            return None;
        }
        let current = self.next;
        self.next = next_dark_square(current);
        Some(current)
    }
}

pub fn dark_squares() -> DarkSquares {
    DarkSquares {
        next: Position::new(0, 0),
    }
}

#[cfg(test)]
#[path = "coord_tests.rs"]
mod coord_tests;
