//! Construction entry points for tile URL resolvers.
//!
//! Every way of building a resolver lands on the same [`TileUrlResolver`]
//! shape, so single templates, expanded multi-endpoint templates, and
//! pre-built resolver lists compose interchangeably:
//!
//! - [`create_from_template`] - one template, one resolver
//! - [`create_from_templates`] - one resolver per template, sharded
//! - [`create_from_resolvers`] - shard over already-built resolvers
//! - [`SourceConfig`] - declarative configuration, range-expanded on build

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::grid::TileGrid;
use crate::url::expand::expand_url;
use crate::url::shard::ShardedResolver;
use crate::url::template::TemplateResolver;
use crate::url::types::{NullResolver, TileUrlResolver, UrlError};

/// Creates a resolver for a single URL template.
pub fn create_from_template(
    template: impl Into<String>,
    grid: Arc<dyn TileGrid>,
) -> Arc<dyn TileUrlResolver> {
    Arc::new(TemplateResolver::new(template, grid))
}

/// Creates a resolver sharding across one template per endpoint.
///
/// All templates share the given tile grid. A single template is returned
/// as a bare template resolver with no sharding layer.
///
/// # Errors
///
/// Returns [`UrlError::NoEndpoints`] when `templates` is empty.
pub fn create_from_templates<S: AsRef<str>>(
    templates: &[S],
    grid: Arc<dyn TileGrid>,
) -> Result<Arc<dyn TileUrlResolver>, UrlError> {
    let resolvers = templates
        .iter()
        .map(|template| create_from_template(template.as_ref(), grid.clone()))
        .collect();
    create_from_resolvers(resolvers)
}

/// Combines resolvers into a single deterministically sharding resolver.
///
/// A single resolver is returned unchanged: no wrapper, and no hashing on
/// the resolution path.
///
/// # Errors
///
/// Returns [`UrlError::NoEndpoints`] when `resolvers` is empty.
pub fn create_from_resolvers(
    mut resolvers: Vec<Arc<dyn TileUrlResolver>>,
) -> Result<Arc<dyn TileUrlResolver>, UrlError> {
    match resolvers.len() {
        0 => Err(UrlError::NoEndpoints),
        1 => Ok(resolvers.remove(0)),
        count => {
            tracing::debug!(endpoints = count, "sharding across endpoints");
            Ok(Arc::new(ShardedResolver::new(resolvers)?))
        }
    }
}

/// Declarative endpoint configuration for a tiled-imagery source.
///
/// Deserializable from layer definitions; [`SourceConfig::build`] turns the
/// configuration into a ready resolver.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tileurl::grid::GlobalMercatorGrid;
/// use tileurl::url::SourceConfig;
///
/// let config = SourceConfig::Template {
///     url: "https://{a-c}.tile.example/{z}/{x}/{y}.png".to_string(),
/// };
/// let grid = Arc::new(GlobalMercatorGrid::new(19));
/// let resolver = config.build(grid).unwrap();
/// # let _ = resolver;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceConfig {
    /// A single URL template. A bracketed range marker, if present, is
    /// expanded into one endpoint per value.
    Template {
        /// URL template, possibly carrying a `{a-c}` or `{0-3}` range
        url: String,
    },

    /// An explicit list of URL templates, one per endpoint.
    Templates {
        /// URL templates
        urls: Vec<String>,
    },

    /// No endpoint configured; every tile resolves to no URL.
    None,
}

impl SourceConfig {
    /// Builds the configured resolver against the given tile grid.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NoEndpoints`] when the configuration produces no
    /// endpoint templates (an empty list, or a range that expands to
    /// nothing).
    pub fn build(&self, grid: Arc<dyn TileGrid>) -> Result<Arc<dyn TileUrlResolver>, UrlError> {
        match self {
            SourceConfig::Template { url } => {
                let templates = expand_url(url);
                create_from_templates(&templates, grid)
            }
            SourceConfig::Templates { urls } => create_from_templates(urls, grid),
            SourceConfig::None => Ok(Arc::new(NullResolver)),
        }
    }
}
