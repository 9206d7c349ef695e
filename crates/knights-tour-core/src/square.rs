use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight knight displacements as `(dx, dy)`.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// A square on the board, `x` is the file and `y` the rank, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check whether the square lies on an `size`×`size` board
    pub fn in_bounds(self, size: usize) -> bool {
        let Ok(size) = i32::try_from(size) else {
            return false;
        };
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }

    /// Apply a displacement. Result may be off the board.
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// All eight knight destinations, including off-board ones
    pub fn knight_targets(self) -> impl Iterator<Item = Square> {
        KNIGHT_OFFSETS.into_iter().map(move |d| self.offset(d))
    }

    /// Whether `other` is exactly one knight move away
    pub fn is_knight_move_from(self, other: Square) -> bool {
        KNIGHT_OFFSETS.contains(&(self.x - other.x, self.y - other.y))
    }

    /// Row-major index on a board of width `size`. Caller guarantees bounds.
    pub(crate) fn index(self, size: usize) -> usize {
        self.y as usize * size + self.x as usize
    }
}

impl From<(i32, i32)> for Square {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
