//! TileUrl - tile URL templating and endpoint sharding
//!
//! This library resolves abstract tile coordinates (zoom, column, row)
//! into concrete fetch URLs for tiled-imagery sources, and spreads
//! requests across multiple equivalent endpoints to bypass per-host
//! connection limits.
//!
//! Everything is synchronous, allocation-light, and free of shared mutable
//! state: resolvers are immutable after construction and safe to call from
//! any number of threads. Fetching, caching, and retry belong to the
//! network layer consuming the produced URLs, not to this crate.

pub mod coord;
pub mod grid;
pub mod projection;
pub mod url;
