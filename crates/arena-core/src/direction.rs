//! The eight movement headings and the displacement quantizer.

use std::fmt;

/// One of the eight arena headings. Discriminants match the arena's
/// numeric direction constants (`TOP = 1` clockwise to `TOP_LEFT = 8`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    Top = 1,
    TopRight = 2,
    Right = 3,
    BottomRight = 4,
    Bottom = 5,
    BottomLeft = 6,
    Left = 7,
    TopLeft = 8,
}

impl Direction {
    /// All headings in clockwise order starting from [`Direction::Top`].
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// Quantize a displacement into a heading.
    ///
    /// An axis dominates when its magnitude is more than twice the other's;
    /// everything in between maps to the diagonal picked by the signs.
    /// Returns `None` for a zero displacement.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        let adx = dx.unsigned_abs();
        let ady = dy.unsigned_abs();

        if adx > ady.saturating_mul(2) {
            return Some(if dx > 0 { Direction::Right } else { Direction::Left });
        }
        if ady > adx.saturating_mul(2) {
            return Some(if dy > 0 { Direction::Bottom } else { Direction::Top });
        }
        match (dx.signum(), dy.signum()) {
            (1, 1) => Some(Direction::BottomRight),
            (1, -1) => Some(Direction::TopRight),
            (-1, 1) => Some(Direction::BottomLeft),
            (-1, -1) => Some(Direction::TopLeft),
            _ => None,
        }
    }

    /// Unit displacement `(dx, dy)`; y grows downward.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::TopLeft => (-1, -1),
        }
    }

    /// Whether the heading moves along both axes.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::TopRight | Direction::BottomRight | Direction::BottomLeft | Direction::TopLeft
        )
    }
}

impl From<Direction> for u8 {
    fn from(dir: Direction) -> Self {
        dir as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=8 => Ok(Direction::ALL[usize::from(value - 1)]),
            other => Err(other),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::TopRight => "top-right",
            Direction::Right => "right",
            Direction::BottomRight => "bottom-right",
            Direction::Bottom => "bottom",
            Direction::BottomLeft => "bottom-left",
            Direction::Left => "left",
            Direction::TopLeft => "top-left",
        };
        f.write_str(name)
    }
}
