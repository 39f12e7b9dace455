//! Two-mask board: one [`SquareSet`] of men per side.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coord::{is_dark, BOARD_SIZE};
use crate::error::{BoardError, BoardResult};
use crate::square_set::SquareSet;
use crate::types::{Move, Position, Side};

/// White men start on ranks 0..=2.
pub const OPENING_WHITE: u32 = SquareSet::rank(0).0 | SquareSet::rank(1).0 | SquareSet::rank(2).0;
/// Black men start on ranks 5..=7.
pub const OPENING_BLACK: u32 = SquareSet::rank(5).0 | SquareSet::rank(6).0 | SquareSet::rank(7).0;

/// Occupancy of the 32 dark squares.
///
/// Invariant: `white & black == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitBoard {
    white: SquareSet,
    black: SquareSet,
}

impl BitBoard {
    pub fn new(white: u32, black: u32) -> Self {
        debug_assert_eq!(white & black, 0, "white and black masks overlap");
        Self {
            white: SquareSet(white),
            black: SquareSet(black),
        }
    }

    /// Checked constructor for masks handed over by a host.
    pub fn try_new(white: u32, black: u32) -> BoardResult<Self> {
        let overlap = white & black;
        if overlap != 0 {
            return Err(BoardError::OverlappingMasks { overlap });
        }
        Ok(Self::new(white, black))
    }

    pub fn startpos() -> Self {
        Self::new(OPENING_WHITE, OPENING_BLACK)
    }

    pub fn white_mask(&self) -> u32 {
        self.white.0
    }

    pub fn black_mask(&self) -> u32 {
        self.black.0
    }

    pub fn set_white_mask(&mut self, mask: u32) {
        self.white = SquareSet(mask);
    }

    pub fn set_black_mask(&mut self, mask: u32) {
        self.black = SquareSet(mask);
    }

    #[inline]
    pub fn pieces(&self, side: Side) -> SquareSet {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    #[inline]
    pub fn occupied(&self) -> SquareSet {
        self.white | self.black
    }

    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        self.pieces(side).popcount()
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        !self.occupied().contains_position(pos)
    }

    /// Bit test of one side's men.
    #[inline]
    pub fn has_piece(pieces: SquareSet, pos: Position) -> bool {
        pieces.contains_position(pos)
    }

    pub fn piece_at(&self, pos: Position) -> Option<Side> {
        if Self::has_piece(self.white, pos) {
            Some(Side::White)
        } else if Self::has_piece(self.black, pos) {
            Some(Side::Black)
        } else {
            None
        }
    }

    /// Moves `side`'s man from `mv.start` to `mv.end`, removing the jumped
    /// opponent man for captures. The move must be legal for this board.
    pub fn apply_move(&mut self, side: Side, mv: &Move) {
        let (own, opponent) = match side {
            Side::White => (&mut self.white, &mut self.black),
            Side::Black => (&mut self.black, &mut self.white),
        };
        debug_assert!(own.contains_position(mv.start), "no {side} man on {}", mv.start);
        own.clear(mv.start.index());
        own.set(mv.end.index());
        if let Some(captured) = mv.captured() {
            debug_assert!(opponent.contains_position(captured), "nothing to capture on {captured}");
            opponent.clear(captured.index());
        }
    }
}

/// Renders rank 7 first: `w`/`b` for men, `.` for empty dark squares and `-`
/// for light squares.
impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            for file in 0..BOARD_SIZE {
                if file > 0 {
                    f.write_str(" ")?;
                }
                let cell = if !is_dark(file, rank) {
                    '-'
                } else {
                    match self.piece_at(Position::new(file, rank)) {
                        Some(Side::White) => 'w',
                        Some(Side::Black) => 'b',
                        None => '.',
                    }
                };
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for BitBoard {
    type Err = BoardError;

    /// Parses the layout produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranks: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(BoardError::DiagramRanks { found: ranks.len() });
        }

        let mut board = BitBoard::default();
        for (row, line) in ranks.iter().enumerate() {
            let rank = BOARD_SIZE - 1 - row as i8;
            let cells: Vec<&str> = line.split_whitespace().collect();
            if cells.len() != BOARD_SIZE as usize {
                return Err(BoardError::DiagramCells {
                    rank,
                    found: cells.len(),
                });
            }
            for (file, cell) in cells.into_iter().enumerate() {
                let file = file as i8;
                let side = match cell {
                    "w" | "W" => Some(Side::White),
                    "b" | "B" => Some(Side::Black),
                    "." | "-" => None,
                    other => {
                        return Err(BoardError::DiagramCell {
                            cell: other.to_string(),
                            file,
                            rank,
                        })
                    }
                };
                let Some(side) = side else { continue };
                let pos = Position::try_new(file, rank)?;
                match side {
                    Side::White => board.white.set(pos.index()),
                    Side::Black => board.black.set(pos.index()),
                }
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
#[path = "bitboard_tests.rs"]
mod bitboard_tests;
