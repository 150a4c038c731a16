use arena_core::{CostMatrix, IMPASSABLE, Position, Terrain, TerrainGrid};

use crate::options::SearchOptions;
use crate::traits::TraversalCost;

/// Combines terrain, an optional [`CostMatrix`] and the plain/swamp costs
/// into one traversal cost per cell.
///
/// A nonzero matrix byte wins (255 blocks the cell); otherwise walls block
/// and swamps/plains cost what the options say.
#[derive(Debug, Clone, Copy)]
pub struct CostResolver<'a> {
    terrain: &'a TerrainGrid,
    matrix: Option<&'a CostMatrix>,
    plain_cost: u32,
    swamp_cost: u32,
}

impl<'a> CostResolver<'a> {
    pub fn new(terrain: &'a TerrainGrid, options: &SearchOptions<'a>) -> Self {
        let options = options.clamped();
        Self {
            terrain,
            matrix: options.cost_matrix,
            plain_cost: options.plain_cost,
            swamp_cost: options.swamp_cost,
        }
    }
}

impl TraversalCost for CostResolver<'_> {
    fn cost(&self, p: Position) -> Option<u32> {
        match self.matrix.and_then(|m| m.at(p)) {
            Some(IMPASSABLE) => return None,
            Some(0) | None => {}
            Some(c) => return Some(u32::from(c)),
        }
        match self.terrain.at(p) {
            Terrain::Wall => None,
            Terrain::Swamp => Some(self.swamp_cost),
            Terrain::Plain => Some(self.plain_cost),
        }
    }
}
