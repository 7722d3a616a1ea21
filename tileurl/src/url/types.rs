//! Resolver trait and error types

use thiserror::Error;

use crate::coord::TileCoord;
use crate::projection::Projection;

/// Errors that can occur while resolving a tile URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// A `{-y}` placeholder was resolved against a tile grid that has no
    /// bounded extent at the requested zoom level. This is a configuration
    /// error: the placeholder only makes sense for grids with a known full
    /// range.
    #[error("the {{-y}} placeholder requires a tile grid with a bounded extent at zoom {zoom}")]
    UnboundedGrid {
        /// Zoom level the grid had no range for
        zoom: u8,
    },

    /// A resolver was composed over an empty template or resolver list.
    #[error("at least one URL template or resolver is required")]
    NoEndpoints,
}

/// Trait for tile URL resolvers.
///
/// A resolver maps a tile coordinate (plus pixel ratio and projection) to a
/// fetch URL. All composition in this crate goes through this one shape:
/// single-template resolvers, sharded multi-endpoint resolvers, and the
/// null resolver are interchangeable behind it.
///
/// Implementations are immutable after construction. Aside from reading the
/// captured template and tile grid, `tile_url` is a pure function of its
/// arguments and safe to call concurrently from multiple threads.
pub trait TileUrlResolver: Send + Sync {
    /// Resolves the URL for a tile.
    ///
    /// # Arguments
    ///
    /// * `tile` - Tile coordinate, or `None` when no tile is requested
    /// * `pixel_ratio` - Device pixel ratio of the requesting client
    /// * `projection` - Projection the tile will be rendered in
    ///
    /// # Returns
    ///
    /// `Ok(Some(url))` for a resolvable tile, `Ok(None)` when `tile` is
    /// `None`, or an error for invalid configuration.
    fn tile_url(
        &self,
        tile: Option<TileCoord>,
        pixel_ratio: f64,
        projection: &Projection,
    ) -> Result<Option<String>, UrlError>;
}

/// Resolver for sources with no endpoint configured.
///
/// Always resolves to `None`, never errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl TileUrlResolver for NullResolver {
    fn tile_url(
        &self,
        _tile: Option<TileCoord>,
        _pixel_ratio: f64,
        _projection: &Projection,
    ) -> Result<Option<String>, UrlError> {
        Ok(None)
    }
}
