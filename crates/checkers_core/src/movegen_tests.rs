use super::*;

fn moves(white: u32, black: u32, side: Side) -> Vec<Move> {
    generate(&BitBoard::new(white, black), side)
}

#[test]
fn test_empty_board_has_no_moves() {
    assert!(moves(0, 0, Side::White).is_empty());
    assert!(moves(0, 0, Side::Black).is_empty());
}

#[test]
fn test_edge_man_has_single_step() {
    // (0,2) can only step right onto (1,3).
    assert_eq!(moves(1 << 8, 0, Side::White), vec![Move::from_indices(8, 12)]);
}

#[test]
fn test_jump_over_opponent() {
    let generated = moves(1 << 9, 1 << 13, Side::White);
    assert_eq!(
        generated,
        vec![Move::from_indices(9, 12), Move::from_indices(9, 18)]
    );
    assert!(generated[1].is_jump());
    assert_eq!(generated[1].captured(), Some(Position::from_index(13)));
}

#[test]
fn test_startpos_moves() {
    let board = BitBoard::startpos();
    let generated = generate(&board, Side::White);
    let expected: Vec<Move> = [(8, 12), (9, 13), (9, 12), (10, 14), (10, 13), (11, 15), (11, 14)]
        .into_iter()
        .map(|(from, to)| Move::from_indices(from, to))
        .collect();
    assert_eq!(generated, expected);
    assert_eq!(generate(&board, Side::Black).len(), 7);
}

#[test]
fn test_black_moves_down_the_board() {
    let generated = moves(1 << 18, 1 << 22, Side::Black);
    assert_eq!(
        generated,
        vec![Move::from_indices(22, 19), Move::from_indices(22, 13)]
    );
}

#[test]
fn test_cannot_jump_own_man() {
    // White men on (2,2) and (3,3); (4,4) is empty but the jump is illegal.
    let generated = moves(1 << 9 | 1 << 13, 0, Side::White);
    assert!(generated.iter().all(|mv| !mv.is_jump()));
}

#[test]
fn test_no_backward_jump() {
    // A black man behind a white man cannot be captured by it.
    let generated = moves(1 << 13, 1 << 9, Side::White);
    assert!(generated.iter().all(|mv| !mv.is_jump()));
    assert_eq!(generated.len(), 2);
}

#[test]
fn test_landing_square_must_be_empty() {
    // (4,4) is blocked, so the man on (2,2) cannot capture (3,3).
    let generated = moves(1 << 9, 1 << 13 | 1 << 18, Side::White);
    assert_eq!(generated, vec![Move::from_indices(9, 12)]);
}

#[test]
fn test_jump_off_board_is_rejected() {
    // (6,6) over (7,7) would land on (8,8).
    let generated = moves(1 << 27, 1 << 31, Side::White);
    assert_eq!(generated, vec![Move::from_indices(27, 30)]);
}

#[test]
fn test_man_on_last_rank_is_stuck() {
    // No promotion: a white man on rank 7 has nowhere to go.
    assert!(moves(1 << 29, 0, Side::White).is_empty());
    assert!(moves(0, 1 << 2, Side::Black).is_empty());
}

#[test]
fn test_steps_listed_even_when_capture_exists() {
    let generated = moves(1 << 9, 1 << 13, Side::White);
    assert!(generated.iter().any(|mv| mv.is_simple()));
    assert!(generated.iter().any(|mv| mv.is_jump()));
}

#[test]
fn test_generate_into_reuses_buffer() {
    let mut buf = vec![Move::from_indices(0, 4); 3];
    generate_into(&BitBoard::new(1 << 8, 0), Side::White, &mut buf);
    assert_eq!(buf, vec![Move::from_indices(8, 12)]);
}
