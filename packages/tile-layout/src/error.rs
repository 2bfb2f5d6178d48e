//! Error handling for the tile layout engine
//!
//! Configuration problems are reported through [`ConfigurationError`] and are
//! nested into the engine-level [`TileLayoutError`] alongside query failures.

use thiserror::Error;

/// Invalid engine configuration or container geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid track count {track_count}: at least one track is required")]
    InvalidTrackCount { track_count: usize },

    #[error("Invalid cross dimension {cross_dimension}: must be finite and non-negative")]
    InvalidCrossDimension { cross_dimension: f32 },

    #[error("Invalid tile padding {padding}: must be finite")]
    InvalidPadding { padding: f32 },
}

/// Errors surfaced by [`TileLayout`](crate::TileLayout)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TileLayoutError {
    /// The layout pass was rejected before any placement was computed
    #[error("Tile layout configuration rejected: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Item index {index} out of range for {item_count} prepared items")]
    IndexOutOfRange { index: usize, item_count: usize },
}

impl TileLayoutError {
    /// True when the error came from configuration rather than a query
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

pub type TileLayoutResult<T> = Result<T, TileLayoutError>;
