use crate::{
    bitboard::BitBoard,
    coord::dark_squares,
    square_set::SquareSet,
    types::{Move, Position, Side},
};

/// Generate all moves for `side`'s men, returning a freshly allocated vector.
pub fn generate(board: &BitBoard, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    generate_into(board, side, &mut out);
    out
}

/// Generate all moves into the provided buffer, reusing it across calls.
pub fn generate_into(board: &BitBoard, side: Side, out: &mut Vec<Move>) {
    out.clear();
    MoveGenerator::new(board, side).add_moves(out);
}

/// Enumerates single-ply moves for the men of one side.
///
/// Squares are scanned in bit-index order; each man yields its
/// forward-right step, forward-left step, right jump and left jump, in that
/// order, whenever they are available. Simple steps are emitted even when a
/// capture exists and men never move or capture backwards.
pub struct MoveGenerator<'a> {
    board: &'a BitBoard,
    own: SquareSet,
    opponent: SquareSet,
    forward: i8,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(board: &'a BitBoard, side: Side) -> Self {
        Self {
            board,
            own: board.pieces(side),
            opponent: board.pieces(side.other()),
            forward: side.forward(),
        }
    }

    pub fn add_moves(&self, out: &mut Vec<Move>) {
        for pos in dark_squares() {
            if !BitBoard::has_piece(self.own, pos) {
                continue;
            }
            self.add_steps(pos, out);
            self.add_jumps(pos, out);
        }
    }

    fn can_move_to(&self, pos: Position) -> bool {
        pos.is_on_board() && self.board.is_empty(pos)
    }

    fn add_steps(&self, start: Position, out: &mut Vec<Move>) {
        for dfile in [1, -1] {
            let end = start.offset(dfile, self.forward);
            if self.can_move_to(end) {
                out.push(Move::new(start, end));
            }
        }
    }

    fn add_jumps(&self, start: Position, out: &mut Vec<Move>) {
        for dfile in [1, -1] {
            let over = start.offset(dfile, self.forward);
            let end = over.offset(dfile, self.forward);
            if !self.can_move_to(end) {
                continue;
            }
            // Landing on the board guarantees the jumped square is on it too.
            if BitBoard::has_piece(self.opponent, over) {
                out.push(Move::new(start, end));
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
