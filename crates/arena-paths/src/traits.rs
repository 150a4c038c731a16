use arena_core::Position;

/// Per-cell traversal cost, queried once per neighbour expansion.
pub trait TraversalCost {
    /// Cost of stepping onto `p`, or `None` if `p` is impassable.
    /// Returned costs must be > 0.
    fn cost(&self, p: Position) -> Option<u32>;
}

/// Anything with an arena position. Things that are not currently placed
/// (e.g. despawned) return `None` and are skipped by spatial queries.
pub trait Locatable {
    fn position(&self) -> Option<Position>;
}

impl Locatable for Position {
    #[inline]
    fn position(&self) -> Option<Position> {
        Some(*self)
    }
}

impl Locatable for Option<Position> {
    #[inline]
    fn position(&self) -> Option<Position> {
        *self
    }
}

impl<T: Locatable + ?Sized> Locatable for &T {
    #[inline]
    fn position(&self) -> Option<Position> {
        (**self).position()
    }
}
