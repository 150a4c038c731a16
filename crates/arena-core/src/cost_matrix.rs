//! Caller-owned traversal-cost overlay.
//!
//! A [`CostMatrix`] holds one byte per arena cell. `0` defers to terrain,
//! `1..=254` overrides the terrain cost and [`IMPASSABLE`] blocks the cell
//! whatever the terrain says.
//!
//! Cells are stored column-major (`x * ARENA_SIZE + y`); the word transfer
//! format of [`serialize`](CostMatrix::serialize) exposes that order as is.

use crate::error::GridError;
use crate::geom::{ARENA_CELLS, ARENA_SIZE, Position};

/// Matrix value marking a cell impassable.
pub const IMPASSABLE: u8 = 255;

/// Number of `u32` words in a serialized matrix.
pub const MATRIX_WORDS: usize = ARENA_CELLS / 4;

/// Per-cell cost overrides for the whole arena.
///
/// Cloning produces an independent deep copy.
#[derive(Clone, PartialEq, Eq)]
pub struct CostMatrix {
    bits: Box<[u8]>,
}

impl Default for CostMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CostMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let overrides = self.bits.iter().filter(|&&b| b != 0).count();
        f.debug_struct("CostMatrix")
            .field("overrides", &overrides)
            .finish()
    }
}

impl CostMatrix {
    /// A matrix with every cell at `0` (terrain cost).
    pub fn new() -> Self {
        Self {
            bits: vec![0; ARENA_CELLS].into_boxed_slice(),
        }
    }

    #[inline]
    fn index(x: i32, y: i32) -> usize {
        debug_assert!(
            Position::new(x, y).in_arena(),
            "cost matrix access outside the arena: ({x}, {y})"
        );
        (x * ARENA_SIZE + y) as usize
    }

    /// Store `value` clamped into `0..=255`.
    ///
    /// # Panics
    ///
    /// May panic if `(x, y)` lies outside the arena.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: i32) {
        self.bits[Self::index(x, y)] = value.clamp(0, 255) as u8;
    }

    /// The stored byte at `(x, y)`.
    ///
    /// # Panics
    ///
    /// May panic if `(x, y)` lies outside the arena.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.bits[Self::index(x, y)]
    }

    /// [`get`](CostMatrix::get) for a position, `None` outside the arena.
    #[inline]
    pub fn at(&self, p: Position) -> Option<u8> {
        p.in_arena().then(|| self.get(p.x, p.y))
    }

    /// Pack the grid into little-endian `u32` words, four cells per word,
    /// in storage order. No header: both sides know the arena size.
    pub fn serialize(&self) -> Vec<u32> {
        self.bits
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    /// Rebuild a matrix from [`serialize`](CostMatrix::serialize) output.
    pub fn deserialize(words: &[u32]) -> Result<Self, GridError> {
        if words.len() != MATRIX_WORDS {
            return Err(GridError::InvalidLength {
                what: "cost matrix",
                expected: MATRIX_WORDS,
                actual: words.len(),
            });
        }
        let bits: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CostMatrix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&CostMatrix::serialize(self), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CostMatrix {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let words = <Vec<u32> as serde::Deserialize>::deserialize(deserializer)?;
        CostMatrix::deserialize(&words).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matrix_is_zeroed() {
        let m = CostMatrix::new();
        assert_eq!(m.get(0, 0), 0);
        assert_eq!(m.get(99, 99), 0);
        assert!(m.serialize().iter().all(|&w| w == 0));
    }

    #[test]
    fn set_clamps_into_byte_range() {
        let mut m = CostMatrix::new();
        for (v, expected) in [(-5, 0), (0, 0), (7, 7), (254, 254), (255, 255), (1000, 255)] {
            m.set(4, 9, v);
            assert_eq!(m.get(4, 9), expected, "value {v}");
        }
    }

    #[test]
    fn clone_is_independent() {
        let mut a = CostMatrix::new();
        a.set(1, 2, 10);
        let mut b = a.clone();
        b.set(1, 2, 20);
        a.set(3, 3, IMPASSABLE as i32);
        assert_eq!(a.get(1, 2), 10);
        assert_eq!(b.get(1, 2), 20);
        assert_eq!(b.get(3, 3), 0);
    }

    #[test]
    fn words_pack_little_endian_column_major() {
        let mut m = CostMatrix::new();
        // (0, 0..4) are the first four stored cells.
        m.set(0, 0, 1);
        m.set(0, 1, 2);
        m.set(0, 2, 3);
        m.set(0, 3, 4);
        // (1, 0) starts the second column.
        m.set(1, 0, 0xAB);
        let words = m.serialize();
        assert_eq!(words.len(), MATRIX_WORDS);
        assert_eq!(words[0], 0x0403_0201);
        assert_eq!(words[ARENA_SIZE as usize / 4], 0x0000_00AB);
    }

    #[test]
    fn round_trip_random_grid() {
        let mut m = CostMatrix::new();
        for x in 0..ARENA_SIZE {
            for y in 0..ARENA_SIZE {
                m.set(x, y, i32::from(rand::random::<u8>()));
            }
        }
        let back = CostMatrix::deserialize(&m.serialize()).unwrap();
        for x in 0..ARENA_SIZE {
            for y in 0..ARENA_SIZE {
                assert_eq!(back.get(x, y), m.get(x, y));
            }
        }
        assert_eq!(back, m);
    }

    #[test]
    fn deserialize_rejects_wrong_length() {
        let err = CostMatrix::deserialize(&[0; 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidLength {
                what: "cost matrix",
                expected: MATRIX_WORDS,
                actual: 3,
            }
        );
    }

    #[test]
    fn at_is_none_outside() {
        let mut m = CostMatrix::new();
        m.set(5, 6, 9);
        assert_eq!(m.at(Position::new(5, 6)), Some(9));
        assert_eq!(m.at(Position::new(-1, 6)), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cost_matrix_round_trip() {
        let mut m = CostMatrix::new();
        m.set(10, 20, 42);
        m.set(99, 0, IMPASSABLE as i32);
        let json = serde_json::to_string(&m).unwrap();
        let back: CostMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn cost_matrix_rejects_short_input() {
        let res: Result<CostMatrix, _> = serde_json::from_str("[1, 2, 3]");
        assert!(res.is_err());
    }
}
