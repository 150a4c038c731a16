//! Read-only terrain classification.
//!
//! The arena supplies terrain as one byte per cell, row-major
//! (`y * ARENA_SIZE + x`), each byte combining [`TERRAIN_WALL`] and
//! [`TERRAIN_SWAMP`] flags.

use crate::error::GridError;
use crate::geom::{ARENA_CELLS, Position};

/// Wall flag in a raw terrain byte.
pub const TERRAIN_WALL: u8 = 1;
/// Swamp flag in a raw terrain byte.
pub const TERRAIN_SWAMP: u8 = 2;

/// Classification of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Plain,
    Swamp,
    Wall,
}

impl Terrain {
    /// Decode a raw terrain byte. The wall flag wins over the swamp flag.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        if bits & TERRAIN_WALL != 0 {
            Terrain::Wall
        } else if bits & TERRAIN_SWAMP != 0 {
            Terrain::Swamp
        } else {
            Terrain::Plain
        }
    }

    /// Encode back to the raw flag representation.
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            Terrain::Plain => 0,
            Terrain::Swamp => TERRAIN_SWAMP,
            Terrain::Wall => TERRAIN_WALL,
        }
    }
}

/// Per-cell terrain for the whole arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    bits: Vec<u8>,
}

impl Default for TerrainGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainGrid {
    /// An all-plain arena.
    pub fn new() -> Self {
        Self {
            bits: vec![0; ARENA_CELLS],
        }
    }

    /// Wrap raw terrain bytes, which must cover exactly one arena.
    pub fn from_bytes(bits: Vec<u8>) -> Result<Self, GridError> {
        if bits.len() != ARENA_CELLS {
            return Err(GridError::InvalidLength {
                what: "terrain",
                expected: ARENA_CELLS,
                actual: bits.len(),
            });
        }
        Ok(Self { bits })
    }

    /// Terrain at `p`. Positions outside the arena read as [`Terrain::Wall`].
    #[inline]
    pub fn at(&self, p: Position) -> Terrain {
        match p.index() {
            Some(i) => Terrain::from_bits(self.bits[i]),
            None => Terrain::Wall,
        }
    }

    /// Set the terrain at `p`. Does nothing outside the arena.
    pub fn set(&mut self, p: Position, terrain: Terrain) {
        if let Some(i) = p.index() {
            self.bits[i] = terrain.bits();
        }
    }

    /// Builder form of [`set`](TerrainGrid::set).
    pub fn with(mut self, p: Position, terrain: Terrain) -> Self {
        self.set(p, terrain);
        self
    }

    /// Raw terrain bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}
