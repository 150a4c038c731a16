use arena_core::Position;

/// A target cell with an acceptance range (Chebyshev distance).
///
/// A bare [`Position`] converts into a range-0 goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Goal {
    pub pos: Position,
    pub range: u32,
}

impl Goal {
    #[inline]
    pub const fn new(pos: Position, range: u32) -> Self {
        Self { pos, range }
    }

    /// A goal satisfied only by its own cell.
    #[inline]
    pub const fn exact(pos: Position) -> Self {
        Self { pos, range: 0 }
    }

    /// Whether `p` is within range.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.remaining(p) == 0
    }

    /// Steps still needed from `p` to come within range.
    #[inline]
    pub fn remaining(&self, p: Position) -> u32 {
        p.range_to(self.pos).unsigned_abs().saturating_sub(self.range)
    }

    /// Signed clearance of `p` outside the range; negative when inside.
    #[inline]
    pub fn clearance(&self, p: Position) -> i64 {
        i64::from(p.range_to(self.pos)) - i64::from(self.range)
    }
}

impl From<Position> for Goal {
    fn from(pos: Position) -> Self {
        Self::exact(pos)
    }
}

impl From<(Position, u32)> for Goal {
    fn from((pos, range): (Position, u32)) -> Self {
        Self::new(pos, range)
    }
}
