//! Integration tests for tile URL resolution.
//!
//! These tests verify the complete resolution flow:
//! - range expansion → per-endpoint templates → sharded resolver
//! - deterministic endpoint affinity across repeated requests
//! - the absent-coordinate contract at every composition depth
//!
//! Run with: `cargo test --test url_resolution_integration`

use std::sync::Arc;

use tileurl::coord::TileCoord;
use tileurl::grid::{ExtentTileGrid, GlobalMercatorGrid, TileGrid, TileRange};
use tileurl::projection::Projection;
use tileurl::url::{
    create_from_resolvers, create_from_template, create_from_templates, expand_url, NullResolver,
    SourceConfig, TileUrlResolver, UrlError,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Standard Web Mercator grid for zoom levels 0-19.
fn mercator() -> Arc<dyn TileGrid> {
    Arc::new(GlobalMercatorGrid::new(19))
}

/// Resolve a tile against a resolver with default pixel ratio / projection.
fn resolve(resolver: &dyn TileUrlResolver, tile: TileCoord) -> Option<String> {
    resolver
        .tile_url(Some(tile), 1.0, &Projection::web_mercator())
        .expect("resolution should not error")
}

/// Tile coordinates around Hamburg at zoom 14, in the negative-down row
/// convention (top-origin rows ~5400 map to y ~-5401).
const HAMBURG_TILES: &[(i32, i32)] = &[
    (8646, -5401),
    (8647, -5401),
    (8646, -5402),
    (8647, -5402),
    (8648, -5401),
    (8648, -5402),
];

// ============================================================================
// Integration Tests
// ============================================================================

#[test]
fn test_expand_then_shard_full_flow() {
    let templates = expand_url("https://{a-c}.tile.example/{z}/{x}/{y}.png");
    assert_eq!(templates.len(), 3);

    let resolver = create_from_templates(&templates, mercator()).unwrap();

    for &(x, y) in HAMBURG_TILES {
        let tile = TileCoord::new(14, x, y);
        let url = resolve(resolver.as_ref(), tile).unwrap();

        // Every URL lands on one of the expanded endpoints with the
        // coordinate substituted
        let expected_suffix = format!("/14/{}/{}.png", x, -(i64::from(y)) - 1);
        assert!(
            url.ends_with(&expected_suffix),
            "unexpected path in {}",
            url
        );
        assert!(
            url.starts_with("https://a.")
                || url.starts_with("https://b.")
                || url.starts_with("https://c."),
            "unexpected endpoint in {}",
            url
        );
    }
}

#[test]
fn test_endpoint_affinity_is_stable() {
    let templates = expand_url("https://tile{0-3}.example/{z}/{x}/{y}.png");
    let resolver = create_from_templates(&templates, mercator()).unwrap();

    for &(x, y) in HAMBURG_TILES {
        let tile = TileCoord::new(14, x, y);
        let first = resolve(resolver.as_ref(), tile);
        for _ in 0..32 {
            assert_eq!(resolve(resolver.as_ref(), tile), first);
        }
    }
}

#[test]
fn test_independently_built_resolvers_agree() {
    // Two resolvers built from the same templates pick the same endpoint
    // for every tile, the property CDN affinity depends on
    let templates = expand_url("https://{a-d}.tile.example/{z}/{x}/{y}.png");
    let one = create_from_templates(&templates, mercator()).unwrap();
    let two = create_from_templates(&templates, mercator()).unwrap();

    for &(x, y) in HAMBURG_TILES {
        let tile = TileCoord::new(14, x, y);
        assert_eq!(resolve(one.as_ref(), tile), resolve(two.as_ref(), tile));
    }
}

#[test]
fn test_absent_coordinate_contract_at_every_depth() {
    let projection = Projection::web_mercator();

    let bare = create_from_template("https://tile.example/{z}/{x}/{y}.png", mercator());
    assert_eq!(bare.tile_url(None, 1.0, &projection), Ok(None));

    let sharded = create_from_templates(
        &expand_url("https://{a-c}.tile.example/{z}/{x}/{y}.png"),
        mercator(),
    )
    .unwrap();
    assert_eq!(sharded.tile_url(None, 1.0, &projection), Ok(None));

    let nested = create_from_resolvers(vec![sharded, bare]).unwrap();
    assert_eq!(nested.tile_url(None, 1.0, &projection), Ok(None));

    assert_eq!(NullResolver.tile_url(None, 1.0, &projection), Ok(None));
}

#[test]
fn test_tms_style_source_against_bounded_grid() {
    let resolver = create_from_template("https://tms.example/{z}/{x}/{-y}.png", mercator());

    // Zoom 14 pyramid height is 16384: stored row -5401 is 10983 rows
    // above the bottom edge
    let url = resolve(resolver.as_ref(), TileCoord::new(14, 8646, -5401)).unwrap();
    assert_eq!(url, "https://tms.example/14/8646/10983.png");
}

#[test]
fn test_tms_style_source_fails_cleanly_beyond_grid() {
    let grid = Arc::new(ExtentTileGrid::new(vec![
        Some(TileRange::new(0, 0, -1, -1)),
    ]));
    let resolver = create_from_template("https://tms.example/{z}/{x}/{-y}.png", grid);

    // Zoom 5 has no range; resolution aborts instead of inventing a row
    let result = resolver.tile_url(
        Some(TileCoord::new(5, 3, -2)),
        1.0,
        &Projection::web_mercator(),
    );
    assert_eq!(result, Err(UrlError::UnboundedGrid { zoom: 5 }));
}

#[test]
fn test_source_config_end_to_end() {
    let json = r#"{ "template": { "url": "https://{a-b}.tile.example/{z}/{x}/{y}.png" } }"#;
    let config: SourceConfig = serde_json::from_str(json).unwrap();
    let resolver = config.build(mercator()).unwrap();

    let url = resolve(resolver.as_ref(), TileCoord::new(3, 2, -3)).unwrap();
    assert!(url.ends_with("/3/2/2.png"));
}

#[test]
fn test_mixed_endpoint_kinds_compose() {
    // A sharded resolver may combine template styles; each endpoint keeps
    // its own convention
    let xyz = create_from_template("https://xyz.example/{z}/{x}/{y}.png", mercator());
    let tms = create_from_template("https://tms.example/{z}/{x}/{-y}.png", mercator());
    let combined = create_from_resolvers(vec![xyz, tms]).unwrap();

    for &(x, y) in HAMBURG_TILES {
        let url = resolve(combined.as_ref(), TileCoord::new(14, x, y)).unwrap();
        assert!(
            url.starts_with("https://xyz.example/") || url.starts_with("https://tms.example/"),
            "unexpected endpoint in {}",
            url
        );
    }
}
