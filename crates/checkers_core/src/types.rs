use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::{bit_index, is_dark, is_on_board, mask_of, position_of};
use crate::error::{BoardError, BoardResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank delta of a forward step for this side's men.
    pub fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    pub fn from_is_white(is_white: bool) -> Side {
        if is_white {
            Side::White
        } else {
            Side::Black
        }
    }

    pub fn is_white(self) -> bool {
        self == Side::White
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("white"),
            Side::Black => f.write_str("black"),
        }
    }
}

/// A square given by file (0..7, left to right) and rank (0..7, bottom to top).
///
/// Positions may temporarily point off the board while the generator probes
/// candidate destinations; only on-board dark squares map to a bit index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Checked constructor for squares coming from outside the engine.
    pub fn try_new(file: i8, rank: i8) -> BoardResult<Self> {
        if !is_on_board(file, rank) {
            return Err(BoardError::OffBoard { file, rank });
        }
        if !is_dark(file, rank) {
            return Err(BoardError::LightSquare { file, rank });
        }
        Ok(Self { file, rank })
    }

    pub fn from_index(index: u8) -> Self {
        let (file, rank) = position_of(index);
        Self { file, rank }
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        is_on_board(self.file, self.rank)
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        is_dark(self.file, self.rank)
    }

    #[inline]
    pub fn index(self) -> u8 {
        bit_index(self.file, self.rank)
    }

    #[inline]
    pub fn mask(self) -> u32 {
        mask_of(self.file, self.rank)
    }

    #[inline]
    pub fn offset(self, dfile: i8, drank: i8) -> Position {
        Position::new(self.file + dfile, self.rank + drank)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.file, self.rank)
    }
}

/// A single-ply move of a man: a diagonal step or a single jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Position,
    pub end: Position,
}

impl Move {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Builds a move between two dark-square indices.
    pub fn from_indices(start: u8, end: u8) -> Self {
        Self::new(Position::from_index(start), Position::from_index(end))
    }

    #[inline]
    pub fn is_jump(&self) -> bool {
        (self.end.file - self.start.file).abs() == 2
    }

    #[inline]
    pub fn is_simple(&self) -> bool {
        (self.end.file - self.start.file).abs() == 1
    }

    /// The square of the man removed by a jump.
    pub fn captured(&self) -> Option<Position> {
        if !self.is_jump() {
            return None;
        }
        Some(Position::new(
            (self.start.file + self.end.file) / 2,
            (self.start.rank + self.end.rank) / 2,
        ))
    }
}

/// Written with square indices: `8-12` for a step, `9x18` for a jump.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.start.index(), sep, self.end.index())
    }
}
