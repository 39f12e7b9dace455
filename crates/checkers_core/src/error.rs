//! Errors for board data arriving from outside the engine.
//!
//! Engine internals work on precondition contracts; these errors only appear
//! where masks, squares or diagrams are supplied by a host or a test fixture.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("white and black masks overlap on squares {overlap:#010x}")]
    OverlappingMasks { overlap: u32 },

    #[error("square ({file},{rank}) is off the board")]
    OffBoard { file: i8, rank: i8 },

    #[error("square ({file},{rank}) is a light square")]
    LightSquare { file: i8, rank: i8 },

    #[error("diagram has {found} ranks, expected 8")]
    DiagramRanks { found: usize },

    #[error("diagram rank {rank} has {found} cells, expected 8")]
    DiagramCells { rank: i8, found: usize },

    #[error("unexpected diagram cell {cell:?} at ({file},{rank})")]
    DiagramCell { cell: String, file: i8, rank: i8 },
}

pub type BoardResult<T> = Result<T, BoardError>;
