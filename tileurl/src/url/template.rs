//! URL template resolution.
//!
//! Substitutes tile coordinates into a URL template:
//!
//! - `{z}` - zoom level
//! - `{x}` - column
//! - `{y}` - row, numbered from 0 at the top edge (`-y - 1`)
//! - `{-y}` - row, numbered from 0 at the bottom edge (TMS convention);
//!   requires a tile grid with a bounded extent at the tile's zoom level
//!
//! Anything else between braces passes through untouched, so templates may
//! carry markers for other layers (API keys, style parameters) without
//! interference.

use std::sync::Arc;

use crate::coord::TileCoord;
use crate::grid::TileGrid;
use crate::projection::Projection;
use crate::url::types::{TileUrlResolver, UrlError};

const Z_MARKER: &str = "{z}";
const X_MARKER: &str = "{x}";
const Y_MARKER: &str = "{y}";
const DASH_Y_MARKER: &str = "{-y}";

/// Resolver that substitutes tile coordinates into one URL template.
///
/// Captures the template string and a tile grid handle at construction;
/// both are immutable afterwards. The grid is consulted only when the
/// template contains `{-y}`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tileurl::coord::TileCoord;
/// use tileurl::grid::GlobalMercatorGrid;
/// use tileurl::projection::Projection;
/// use tileurl::url::{TemplateResolver, TileUrlResolver};
///
/// let grid = Arc::new(GlobalMercatorGrid::new(19));
/// let resolver = TemplateResolver::new("https://tile.example/{z}/{x}/{y}.png", grid);
///
/// let url = resolver
///     .tile_url(Some(TileCoord::new(3, 2, -3)), 1.0, &Projection::web_mercator())
///     .unwrap();
/// assert_eq!(url.as_deref(), Some("https://tile.example/3/2/2.png"));
/// ```
pub struct TemplateResolver {
    template: String,
    grid: Arc<dyn TileGrid>,
}

impl TemplateResolver {
    /// Creates a resolver for the given template and tile grid.
    pub fn new(template: impl Into<String>, grid: Arc<dyn TileGrid>) -> Self {
        Self {
            template: template.into(),
            grid,
        }
    }

    /// Returns the template string this resolver was built from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Resolves the bottom-origin row for `{-y}`.
    ///
    /// The grid's full range height at the tile's zoom converts the stored
    /// negative-down row into a bottom-up index: `height + y`.
    fn flipped_row(&self, tile: TileCoord) -> Result<i64, UrlError> {
        let range = self
            .grid
            .full_tile_range(tile.z)
            .ok_or(UrlError::UnboundedGrid { zoom: tile.z })?;
        Ok(i64::from(range.height()) + i64::from(tile.y))
    }
}

impl TileUrlResolver for TemplateResolver {
    fn tile_url(
        &self,
        tile: Option<TileCoord>,
        _pixel_ratio: f64,
        _projection: &Projection,
    ) -> Result<Option<String>, UrlError> {
        let tile = match tile {
            Some(tile) => tile,
            None => return Ok(None),
        };

        let mut url = self.template.clone();
        if url.contains(Z_MARKER) {
            url = url.replace(Z_MARKER, &tile.z.to_string());
        }
        if url.contains(X_MARKER) {
            url = url.replace(X_MARKER, &tile.x.to_string());
        }
        if url.contains(Y_MARKER) {
            url = url.replace(Y_MARKER, &tile.standard_row().to_string());
        }
        if url.contains(DASH_Y_MARKER) {
            let row = self.flipped_row(tile)?;
            url = url.replace(DASH_Y_MARKER, &row.to_string());
        }

        Ok(Some(url))
    }
}
