use super::*;

#[test]
fn test_index_round_trip() {
    for index in 0..NUM_SQUARES {
        let (file, rank) = position_of(index);
        assert!(is_dark(file, rank), "square {index} maps to a light square");
        assert_eq!(bit_index(file, rank), index);
    }
}

#[test]
fn test_known_squares() {
    assert_eq!(position_of(0), (0, 0));
    assert_eq!(position_of(3), (6, 0));
    assert_eq!(position_of(4), (1, 1));
    assert_eq!(position_of(8), (0, 2));
    assert_eq!(position_of(9), (2, 2));
    assert_eq!(position_of(13), (3, 3));
    assert_eq!(position_of(18), (4, 4));
    assert_eq!(position_of(22), (5, 5));
    assert_eq!(position_of(31), (7, 7));
}

#[test]
fn test_mask_has_single_bit() {
    for pos in dark_squares() {
        let mask = mask_of(pos.file, pos.rank);
        assert_eq!(mask.count_ones(), 1);
        assert_eq!(mask.trailing_zeros() as u8, pos.index());
    }
}

#[test]
fn test_dark_squares_in_index_order() {
    let indices: Vec<u8> = dark_squares().map(|p| p.index()).collect();
    assert_eq!(indices, (0..NUM_SQUARES).collect::<Vec<_>>());
}

#[test]
fn test_next_dark_square_wraps_rank() {
    assert_eq!(next_dark_square(Position::new(6, 0)), Position::new(1, 1));
    assert_eq!(next_dark_square(Position::new(7, 1)), Position::new(0, 2));
    // Square 31 steps off the board.
    assert!(!next_dark_square(Position::new(7, 7)).is_on_board());
}

#[test]
fn test_board_bounds() {
    assert!(is_on_board(0, 0));
    assert!(is_on_board(7, 7));
    assert!(!is_on_board(-1, 3));
    assert!(!is_on_board(8, 3));
    assert!(!is_on_board(3, -1));
    assert!(!is_dark(1, 0));
    assert!(!is_dark(-1, 0));
}
