use crate::{
    movegen::generate_into,
    state::{apply_move, GameState},
    types::Move,
};

/// Pure perft node count.
/// Counts every state reachable by exactly `depth` move applications. A
/// capture that leaves the same side on move still counts as one ply.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    fn inner(state: &GameState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        generate_into(&state.board, state.side_to_move, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let next = apply_move(state, mv);
            nodes += inner(&next, depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(16); depth as usize];
    inner(state, depth, &mut layers[..])
}
