//! URL resolution CLI command.
//!
//! Builds a (possibly sharded) resolver from one or more templates and
//! resolves a single tile coordinate against it. Row numbers are given the
//! way tile servers display them, from 0 at the top edge.

use std::sync::Arc;

use clap::Args;
use tileurl::coord::TileCoord;
use tileurl::grid::GlobalMercatorGrid;
use tileurl::projection::Projection;
use tileurl::url::{create_from_templates, expand_url, TileUrlResolver};

use crate::error::CliError;

/// Arguments for the `resolve` command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// URL templates; each may carry a bracketed range, which is expanded
    /// into additional endpoints
    #[arg(required = true)]
    pub templates: Vec<String>,

    /// Zoom level
    #[arg(short = 'z', long)]
    pub zoom: u8,

    /// Tile column
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    pub col: i32,

    /// Tile row, numbered from 0 at the top edge
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    pub row: i32,

    /// Device pixel ratio
    #[arg(long, default_value = "1.0")]
    pub pixel_ratio: f64,

    /// Projection code
    #[arg(long, default_value = "EPSG:3857")]
    pub projection: String,

    /// Highest zoom level of the tile grid (drives the {-y} placeholder)
    #[arg(long, default_value = "19")]
    pub max_zoom: u8,
}

/// Run the `resolve` command.
pub fn run(args: ResolveArgs) -> Result<(), CliError> {
    let endpoints: Vec<String> = args
        .templates
        .iter()
        .flat_map(|template| expand_url(template))
        .collect();
    tracing::debug!(endpoints = endpoints.len(), "built endpoint list");

    let grid = Arc::new(GlobalMercatorGrid::new(args.max_zoom));
    let resolver = create_from_templates(&endpoints, grid)?;

    let tile = tile_from_standard_row(args.zoom, args.col, args.row);
    let projection = Projection::new(&args.projection);

    match resolver.tile_url(Some(tile), args.pixel_ratio, &projection)? {
        Some(url) => {
            println!("{}", url);
            Ok(())
        }
        None => Err(CliError::NoUrl),
    }
}

/// Converts a top-origin row index into the stored negative-down row.
fn tile_from_standard_row(zoom: u8, col: i32, row: i32) -> TileCoord {
    TileCoord::new(zoom, col, -row - 1)
}
