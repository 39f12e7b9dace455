//! Set of dark squares packed into a `u32`.
//!
//! Bit `i` stands for dark square `i` under the mapping in [`crate::coord`].
//! This is also the layout the host exchanges, so the raw value is public.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::types::Position;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareSet(pub u32);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    /// The four dark squares of a rank.
    #[inline(always)]
    pub const fn rank(rank: u8) -> Self {
        debug_assert!(rank < 8, "rank out of range");
        SquareSet(0xF << (rank * 4))
    }

    #[inline(always)]
    pub const fn from_square(index: u8) -> Self {
        SquareSet(1u32 << index)
    }

    #[inline(always)]
    pub fn from_position(pos: Position) -> Self {
        SquareSet(pos.mask())
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn contains(self, index: u8) -> bool {
        (self.0 & (1u32 << index)) != 0
    }

    #[inline(always)]
    pub fn contains_position(self, pos: Position) -> bool {
        (self.0 & pos.mask()) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, index: u8) {
        self.0 |= 1u32 << index;
    }

    #[inline(always)]
    pub fn clear(&mut self, index: u8) {
        self.0 &= !(1u32 << index);
    }

    /// Population count.
    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Removes and returns the lowest set square.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(index)
        }
    }
}

impl BitAnd for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Iterator over set square indices.
impl Iterator for SquareSet {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lsb()
    }
}

#[cfg(test)]
#[path = "square_set_tests.rs"]
mod square_set_tests;
