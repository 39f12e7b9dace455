use checkers_core::{perft, BitBoard, GameState, Side};

#[test]
fn perft_from_opening() {
    let state = GameState::startpos();
    assert_eq!(perft(&state, 0), 1);
    assert_eq!(perft(&state, 1), 7);
    // Black's replies on rank 4 are never blocked by a single white step.
    assert_eq!(perft(&state, 2), 49);
}

#[test]
fn perft_counts_capture_as_a_ply() {
    // 9-12 and 9x18 for White. After 9-12 Black on (3,3) has 13-10 and
    // 13-9; after 9x18 White is alone and still on move with 18-22, 18-21.
    let state = GameState::from_host(1 << 9, 1 << 13, true, false);
    assert_eq!(perft(&state, 1), 2);
    assert_eq!(perft(&state, 2), 4);
}

#[test]
fn perft_is_symmetric_for_mirrored_opening() {
    let black_first = GameState::new(BitBoard::startpos(), Side::Black);
    for depth in 1..=4 {
        assert_eq!(perft(&black_first, depth), perft(&GameState::startpos(), depth));
    }
}
