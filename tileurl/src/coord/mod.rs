//! Tile coordinate module
//!
//! Provides the tile coordinate value type together with the deterministic
//! coordinate hash and floored modulo used to spread requests across
//! equivalent tile endpoints.

mod types;

pub use types::TileCoord;

/// Computes a deterministic hash of a tile coordinate.
///
/// The column is shifted left by the zoom level and the row is added, all in
/// wrapping 64-bit arithmetic. Neighbouring tiles land on different values,
/// and the same coordinate always produces the same hash across calls and
/// across process restarts, so repeated requests for one tile keep hitting
/// the same endpoint.
#[inline]
pub fn hash(tile: TileCoord) -> i64 {
    i64::from(tile.x)
        .wrapping_shl(u32::from(tile.z))
        .wrapping_add(i64::from(tile.y))
}

/// Floored (mathematical) modulo.
///
/// Unlike the `%` operator, the result is always in `[0, divisor)` for a
/// positive divisor, even when `value` is negative. Rows are frequently
/// negative, so endpoint selection relies on this.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[inline]
pub fn modulo(value: i64, divisor: i64) -> i64 {
    value.rem_euclid(divisor)
}
