//! Geometry primitives: [`Position`] and the Chebyshev metric.
//!
//! The arena is a fixed [`ARENA_SIZE`] x [`ARENA_SIZE`] square. X grows
//! right, Y grows down.

use std::fmt;
use std::ops::{Add, Sub};

use crate::direction::Direction;

/// Side length of the square arena, in cells.
pub const ARENA_SIZE: i32 = 100;

/// Number of cells in the arena.
pub const ARENA_CELLS: usize = (ARENA_SIZE * ARENA_SIZE) as usize;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// An arena cell coordinate. No identity beyond its coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the position lies inside the arena.
    #[inline]
    pub const fn in_arena(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < ARENA_SIZE && self.y < ARENA_SIZE
    }

    /// Chebyshev distance to `other`: the number of 8-way steps between them.
    #[inline]
    pub fn range_to(self, other: Position) -> i32 {
        chebyshev(self, other)
    }

    /// The adjacent position one step in `dir`.
    #[inline]
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// All eight neighbours, cardinals first: N, E, S, W, NE, SE, SW, NW.
    ///
    /// Search relies on this order for reproducible tie-breaking; putting
    /// cardinals first keeps equal-cost paths straight.
    #[inline]
    pub fn neighbors_8(self) -> [Position; 8] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y + 1),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x - 1, self.y - 1),
        ]
    }

    /// Row-major index (`y * ARENA_SIZE + x`), or `None` outside the arena.
    #[inline]
    pub fn index(self) -> Option<usize> {
        if !self.in_arena() {
            return None;
        }
        Some((self.y * ARENA_SIZE + self.x) as usize)
    }

    /// Inverse of [`index`](Position::index).
    #[inline]
    pub fn from_index(idx: usize) -> Self {
        let size = ARENA_SIZE as usize;
        Self::new((idx % size) as i32, (idx / size) as i32)
    }
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

// --- trait impls for Position ---

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
