use super::*;

#[test]
fn test_from_square() {
    assert_eq!(SquareSet::from_square(0).0, 1);
    assert_eq!(SquareSet::from_square(3).0, 8);
    assert_eq!(SquareSet::from_square(31).0, 1 << 31);
}

#[test]
fn test_popcount() {
    assert_eq!(SquareSet::EMPTY.popcount(), 0);
    assert_eq!(SquareSet::from_square(7).popcount(), 1);
    assert_eq!(SquareSet::rank(0).popcount(), 4);
    assert_eq!(SquareSet(u32::MAX).popcount(), 32);
}

#[test]
fn test_ranks() {
    assert_eq!(SquareSet::rank(0).0, 0x0000_000F);
    assert_eq!(SquareSet::rank(7).0, 0xF000_0000);
    let opening_white = SquareSet::rank(0) | SquareSet::rank(1) | SquareSet::rank(2);
    assert_eq!(opening_white.0, 0x0000_0FFF);
}

#[test]
fn test_iterator() {
    let set = SquareSet(0b1010);
    let squares: Vec<u8> = set.collect();
    assert_eq!(squares, vec![1, 3]);
}

#[test]
fn test_set_and_clear() {
    let mut set = SquareSet::EMPTY;
    set.set(17);
    assert!(set.contains(17));
    assert!(set.contains_position(Position::new(2, 4)));
    set.clear(17);
    assert!(set.is_empty());
}

#[test]
fn test_and_or() {
    let white = SquareSet(0x0000_0FFF);
    let black = SquareSet(0xFFF0_0000);
    assert_eq!((white | black).popcount(), 24);
    assert!((white & black).is_empty());
}
