//! **arena-core** — grid primitives for the arena pathfinding engine.
//!
//! This crate provides the value types shared by every query: positions and
//! the Chebyshev metric, the eight movement headings, read-only terrain and
//! the caller-owned [`CostMatrix`] overlay with its word transfer format.

pub mod cost_matrix;
pub mod direction;
pub mod error;
pub mod geom;
pub mod terrain;

pub use cost_matrix::{CostMatrix, IMPASSABLE, MATRIX_WORDS};
pub use direction::Direction;
pub use error::GridError;
pub use geom::{ARENA_CELLS, ARENA_SIZE, Position, chebyshev};
pub use terrain::{TERRAIN_SWAMP, TERRAIN_WALL, Terrain, TerrainGrid};
