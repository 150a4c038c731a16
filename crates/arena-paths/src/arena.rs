use arena_core::{Position, Terrain, TerrainGrid};

use crate::goal::Goal;
use crate::options::SearchOptions;
use crate::pathfinder::{PathFinder, SearchResult};

/// Explicit world context handed to every query.
///
/// Holds the terrain snapshot and the tick it was taken at. Callers build a
/// new `Arena` (or bump the tick) when the world changes; queries never read
/// ambient state.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    terrain: TerrainGrid,
    tick: u64,
}

impl Arena {
    pub fn new(terrain: TerrainGrid) -> Self {
        Self { terrain, tick: 0 }
    }

    /// Builder: stamp the snapshot with `tick`.
    pub fn with_tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Tick the terrain snapshot belongs to.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[inline]
    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    /// Terrain under `p`; outside the arena reads as wall.
    #[inline]
    pub fn terrain_at(&self, p: Position) -> Terrain {
        self.terrain.at(p)
    }

    /// Run a one-shot search on this arena's terrain.
    pub fn search(
        &self,
        origin: Position,
        goals: &[Goal],
        options: &SearchOptions<'_>,
    ) -> SearchResult {
        self.search_in(&mut PathFinder::new(), origin, goals, options)
    }

    /// Search on this arena's terrain reusing `finder`'s node cache.
    pub fn search_in(
        &self,
        finder: &mut PathFinder,
        origin: Position,
        goals: &[Goal],
        options: &SearchOptions<'_>,
    ) -> SearchResult {
        finder.search(&self.terrain, origin, goals, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_exposes_terrain_and_tick() {
        let t = TerrainGrid::new().with(Position::new(3, 3), Terrain::Swamp);
        let arena = Arena::new(t).with_tick(42);
        assert_eq!(arena.tick(), 42);
        assert_eq!(arena.terrain_at(Position::new(3, 3)), Terrain::Swamp);
        assert_eq!(arena.terrain_at(Position::new(200, 3)), Terrain::Wall);
    }

    #[test]
    fn search_uses_own_terrain() {
        let mut t = TerrainGrid::new();
        t.set(Position::new(1, 0), Terrain::Wall);
        t.set(Position::new(1, 1), Terrain::Wall);
        let arena = Arena::new(t);
        let res = arena.search(
            Position::new(0, 0),
            &[Position::new(2, 0).into()],
            &SearchOptions::default(),
        );
        assert!(!res.incomplete);
        assert!(
            res.path
                .iter()
                .all(|&p| arena.terrain_at(p) != Terrain::Wall)
        );
        assert_eq!(res.path.last(), Some(&Position::new(2, 0)));
    }

    #[test]
    fn reused_finder_matches_one_shot() {
        let mut t = TerrainGrid::new();
        for y in 0..8 {
            t.set(Position::new(5, y), Terrain::Wall);
        }
        let arena = Arena::new(t);
        let opts = SearchOptions::default();
        let mut finder = PathFinder::new();
        let goals = [Goal::from(Position::new(9, 2))];

        let first = arena.search_in(&mut finder, Position::new(0, 0), &goals, &opts);
        // An unrelated search in between must not leak into the next one.
        let elsewhere = [Goal::from(Position::new(30, 40))];
        arena.search_in(&mut finder, Position::new(20, 20), &elsewhere, &opts);
        let again = arena.search_in(&mut finder, Position::new(0, 0), &goals, &opts);

        assert_eq!(first, arena.search(Position::new(0, 0), &goals, &opts));
        assert_eq!(first, again);
    }
}
