//! Tile URL resolution
//!
//! Turns abstract tile coordinates into concrete fetch URLs. Three pieces
//! compose through one resolver shape:
//!
//! 1. [`TemplateResolver`] substitutes `{z}`, `{x}`, `{y}`, `{-y}` into a
//!    URL template.
//! 2. [`ShardedResolver`] spreads requests across several equivalent
//!    endpoints by a deterministic hash of the tile coordinate.
//! 3. [`expand_url`] expands a bracketed `{a-c}` or `{0-3}` range into the
//!    endpoint templates the sharder is typically built from.
//!
//! ```
//! use std::sync::Arc;
//! use tileurl::coord::TileCoord;
//! use tileurl::grid::GlobalMercatorGrid;
//! use tileurl::projection::Projection;
//! use tileurl::url::{create_from_templates, expand_url};
//!
//! let grid = Arc::new(GlobalMercatorGrid::new(19));
//! let templates = expand_url("https://{a-c}.tile.example/{z}/{x}/{y}.png");
//! let resolver = create_from_templates(&templates, grid).unwrap();
//!
//! let url = resolver
//!     .tile_url(Some(TileCoord::new(3, 2, -3)), 1.0, &Projection::web_mercator())
//!     .unwrap();
//! assert!(url.unwrap().ends_with("/3/2/2.png"));
//! ```

mod expand;
mod factory;
mod shard;
mod template;
mod types;

pub use expand::expand_url;
pub use factory::{
    create_from_resolvers, create_from_template, create_from_templates, SourceConfig,
};
pub use shard::ShardedResolver;
pub use template::TemplateResolver;
pub use types::{NullResolver, TileUrlResolver, UrlError};
