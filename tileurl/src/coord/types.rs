//! Tile coordinate type definitions

use std::fmt;

/// Tile coordinates in a zoom pyramid.
///
/// Identifies one tile by zoom level, column, and row. Rows are stored in a
/// negative-down convention: the topmost row at any zoom level is `y = -1`,
/// and the conventional top-origin row index is `-y - 1`. Columns increase
/// eastward from `x = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Zoom level
    pub z: u8,
    /// Column (east-west), 0 at the west edge
    pub x: i32,
    /// Row (north-south), -1 at the top edge
    pub y: i32,
}

impl TileCoord {
    /// Creates a tile coordinate from zoom, column, and row.
    #[inline]
    pub fn new(z: u8, x: i32, y: i32) -> Self {
        Self { z, x, y }
    }

    /// Returns the conventional top-origin row index (`-y - 1`).
    ///
    /// Most tile servers number rows from 0 at the top edge; this converts
    /// the stored negative-down row into that convention. Widened to `i64`
    /// so every `i32` row has a defined result.
    #[inline]
    pub fn standard_row(&self) -> i64 {
        -i64::from(self.y) - 1
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}
