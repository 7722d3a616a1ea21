//! Deterministic endpoint sharding.
//!
//! Tile servers commonly publish the same imagery under several equivalent
//! hostnames so clients can sidestep per-host connection limits. The
//! sharded resolver spreads requests across those endpoints while keeping
//! the mapping stable: one tile always resolves through the same endpoint,
//! which keeps intermediate caches and CDN affinity effective.

use std::sync::Arc;

use crate::coord::{self, TileCoord};
use crate::projection::Projection;
use crate::url::types::{TileUrlResolver, UrlError};

/// Resolver that fans out to exactly one of several equivalent resolvers.
///
/// Selection hashes the tile coordinate and reduces it modulo the endpoint
/// count with a floored modulo, so negative rows select a valid index too.
/// The hash is stable across calls and process restarts.
pub struct ShardedResolver {
    resolvers: Vec<Arc<dyn TileUrlResolver>>,
}

impl ShardedResolver {
    /// Creates a sharded resolver over the given endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NoEndpoints`] when `resolvers` is empty.
    pub fn new(resolvers: Vec<Arc<dyn TileUrlResolver>>) -> Result<Self, UrlError> {
        if resolvers.is_empty() {
            return Err(UrlError::NoEndpoints);
        }
        Ok(Self { resolvers })
    }

    /// Returns the number of endpoints requests are spread across.
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Always false; construction rejects empty endpoint lists.
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Selects the endpoint index for a tile.
    fn shard_index(&self, tile: TileCoord) -> usize {
        let index = coord::modulo(coord::hash(tile), self.resolvers.len() as i64);
        index as usize
    }
}

impl TileUrlResolver for ShardedResolver {
    fn tile_url(
        &self,
        tile: Option<TileCoord>,
        pixel_ratio: f64,
        projection: &Projection,
    ) -> Result<Option<String>, UrlError> {
        let tile = match tile {
            Some(tile) => tile,
            None => return Ok(None),
        };

        let index = self.shard_index(tile);
        tracing::trace!(tile = %tile, index, "selected endpoint shard");
        self.resolvers[index].tile_url(Some(tile), pixel_ratio, projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GlobalMercatorGrid;
    use crate::url::template::TemplateResolver;

    fn endpoint_resolvers(hosts: &[&str]) -> Vec<Arc<dyn TileUrlResolver>> {
        let grid = Arc::new(GlobalMercatorGrid::new(19));
        hosts
            .iter()
            .map(|host| {
                Arc::new(TemplateResolver::new(
                    format!("https://{}.tile.example/{{z}}/{{x}}/{{y}}.png", host),
                    grid.clone(),
                )) as Arc<dyn TileUrlResolver>
            })
            .collect()
    }

    #[test]
    fn test_empty_endpoint_list_rejected() {
        let result = ShardedResolver::new(Vec::new());
        assert!(matches!(result, Err(UrlError::NoEndpoints)));
    }

    #[test]
    fn test_len_reports_endpoint_count() {
        let sharded = ShardedResolver::new(endpoint_resolvers(&["a", "b", "c"])).unwrap();
        assert_eq!(sharded.len(), 3);
        assert!(!sharded.is_empty());
    }

    #[test]
    fn test_absent_coordinate_short_circuits() {
        let sharded = ShardedResolver::new(endpoint_resolvers(&["a", "b"])).unwrap();
        let result = sharded.tile_url(None, 1.0, &Projection::web_mercator());
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_same_tile_same_endpoint() {
        let sharded = ShardedResolver::new(endpoint_resolvers(&["a", "b", "c", "d"])).unwrap();
        let projection = Projection::web_mercator();
        let tile = TileCoord::new(12, 2048, -1311);

        let first = sharded.tile_url(Some(tile), 1.0, &projection).unwrap();
        for _ in 0..16 {
            let again = sharded.tile_url(Some(tile), 1.0, &projection).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_negative_rows_select_valid_index() {
        let sharded = ShardedResolver::new(endpoint_resolvers(&["a", "b", "c"])).unwrap();
        for y in -64..0 {
            let index = sharded.shard_index(TileCoord::new(6, 5, y));
            assert!(index < 3, "index {} out of range for y {}", index, y);
        }
    }

    #[test]
    fn test_requests_spread_across_endpoints() {
        let sharded = ShardedResolver::new(endpoint_resolvers(&["a", "b", "c"])).unwrap();

        let mut seen = std::collections::HashSet::new();
        for x in 0..32 {
            seen.insert(sharded.shard_index(TileCoord::new(8, x, -1)));
        }
        // Consecutive columns walk every shard at least once
        assert_eq!(seen.len(), 3);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_shard_index_in_range(
                z in 0u8..=24,
                x in any::<i32>(),
                y in any::<i32>(),
                endpoints in 1usize..8
            ) {
                let hosts: Vec<String> = (0..endpoints).map(|i| format!("s{}", i)).collect();
                let host_refs: Vec<&str> = hosts.iter().map(String::as_str).collect();
                let sharded = ShardedResolver::new(endpoint_resolvers(&host_refs)).unwrap();

                let index = sharded.shard_index(TileCoord::new(z, x, y));
                prop_assert!(index < endpoints);
            }
        }
    }
}
