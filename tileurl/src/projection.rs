//! Projection identifier
//!
//! URL resolution threads a projection handle through every call so that
//! resolver implementations which do care about the coordinate system (WMTS
//! styles, server-side reprojection) can read it. The template resolvers in
//! this crate treat it as opaque.

/// An opaque projection identifier, e.g. `"EPSG:3857"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Projection {
    code: String,
}

impl Projection {
    /// Creates a projection handle from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Returns the projection code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Web Mercator, the projection of virtually all slippy-map tile
    /// servers.
    pub fn web_mercator() -> Self {
        Self::new("EPSG:3857")
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::web_mercator()
    }
}
