use super::*;

#[test]
fn test_startpos_counts() {
    let board = BitBoard::startpos();
    assert_eq!(board.count(Side::White), 12);
    assert_eq!(board.count(Side::Black), 12);
    assert_eq!(board.white_mask() & board.black_mask(), 0);
}

#[test]
fn test_try_new_rejects_overlap() {
    let err = BitBoard::try_new(0b0110, 0b0011).unwrap_err();
    assert_eq!(err, BoardError::OverlappingMasks { overlap: 0b0010 });
    assert!(BitBoard::try_new(OPENING_WHITE, OPENING_BLACK).is_ok());
}

#[test]
fn test_queries() {
    let board = BitBoard::new(1 << 9, 1 << 13);
    assert!(!board.is_empty(Position::from_index(9)));
    assert!(!board.is_empty(Position::from_index(13)));
    assert!(board.is_empty(Position::from_index(18)));
    assert!(BitBoard::has_piece(board.pieces(Side::White), Position::new(2, 2)));
    assert!(!BitBoard::has_piece(board.pieces(Side::White), Position::new(3, 3)));
    assert_eq!(board.piece_at(Position::new(3, 3)), Some(Side::Black));
    assert_eq!(board.piece_at(Position::new(4, 4)), None);
}

#[test]
fn test_mask_setters() {
    let mut board = BitBoard::default();
    board.set_white_mask(0x10);
    board.set_black_mask(0x8000_0000);
    assert_eq!(board.white_mask(), 0x10);
    assert_eq!(board.black_mask(), 0x8000_0000);
    assert_eq!(board.count(Side::White), 1);
}

#[test]
fn test_apply_simple_move() {
    let mut board = BitBoard::new(1 << 8, 0);
    board.apply_move(Side::White, &Move::from_indices(8, 12));
    assert_eq!(board.white_mask(), 1 << 12);
    assert_eq!(board.count(Side::White), 1);
}

#[test]
fn test_apply_jump_removes_captured() {
    let mut board = BitBoard::new(1 << 9, 1 << 13);
    board.apply_move(Side::White, &Move::from_indices(9, 18));
    assert_eq!(board.white_mask(), 1 << 18);
    assert_eq!(board.black_mask(), 0);
}

#[test]
fn test_apply_black_jump() {
    let mut board = BitBoard::new(1 << 18, 1 << 22);
    board.apply_move(Side::Black, &Move::from_indices(22, 13));
    assert_eq!(board.black_mask(), 1 << 13);
    assert_eq!(board.white_mask(), 0);
}

#[test]
fn test_display_startpos() {
    let expected = "\
- b - b - b - b
b - b - b - b -
- b - b - b - b
. - . - . - . -
- . - . - . - .
w - w - w - w -
- w - w - w - w
w - w - w - w -
";
    assert_eq!(BitBoard::startpos().to_string(), expected);
}

#[test]
fn test_parse_display_output() {
    let board = BitBoard::new(1 << 9 | 1 << 31, 1 << 13 | 1 << 0);
    let parsed: BitBoard = board.to_string().parse().unwrap();
    assert_eq!(parsed, board);
}

#[test]
fn test_parse_rejects_bad_diagrams() {
    assert_eq!(
        "w - w".parse::<BitBoard>().unwrap_err(),
        BoardError::DiagramRanks { found: 1 }
    );

    let light = "\
- - - - - - - -
- - - - - - - -
- - - - - - - -
- - - - - - - -
- - - - - - - -
- - - - - - - -
- - - - - - - -
- w - - - - - -
";
    assert_eq!(
        light.parse::<BitBoard>().unwrap_err(),
        BoardError::LightSquare { file: 1, rank: 0 }
    );

    let short = light.replacen("- w - - - - - -", "- - -", 1);
    assert_eq!(
        short.parse::<BitBoard>().unwrap_err(),
        BoardError::DiagramCells { rank: 0, found: 3 }
    );

    let unknown = light.replacen("- w", "- k", 1);
    assert_eq!(
        unknown.parse::<BitBoard>().unwrap_err(),
        BoardError::DiagramCell {
            cell: "k".to_string(),
            file: 1,
            rank: 0
        }
    );
}

#[test]
fn test_opening_masks_are_three_ranks() {
    assert_eq!(OPENING_WHITE, 0x0000_0FFF);
    assert_eq!(OPENING_BLACK, 0xFFF0_0000);
    assert_eq!(BitBoard::startpos().count(Side::White), 12);
}
