//! Masonry tile layout
//!
//! This crate arranges a sequence of items with varying extents into a fixed
//! number of parallel tracks (columns for vertical flow, rows for horizontal
//! flow). Every item is appended to whichever track is currently shortest,
//! producing the "Pinterest-style" packing common in photo and note grids.
//!
//! The host container supplies the item count, the dimension available across
//! the tracks and a per-item extent; it reads back a rectangle per item and
//! the total content extent for sizing its scroll area.
//!
//! ```
//! use tile_layout::{TileLayout, TileLayoutConfig};
//!
//! let mut layout = TileLayout::new(TileLayoutConfig::columns(2).with_padding(0.0))?;
//! let extents = [100.0, 50.0, 80.0];
//! layout.prepare(extents.len(), 300.0, |index, _| extents.get(index).copied())?;
//!
//! let third = layout.placement_for(2)?;
//! assert_eq!(third.track, 1);
//! assert_eq!(third.frame.origin.y, 50.0);
//! assert_eq!(layout.total_content_extent(), 130.0);
//! # Ok::<(), tile_layout::TileLayoutError>(())
//! ```
//!
//! ## Feature flags
//!  - `tracing`: Enables tracing support (on by default).

mod config;
mod error;
pub mod geometry;
mod layout;
pub mod provider;
mod track_state;

pub use config::{
    DEFAULT_HORIZONTAL_EXTENT, DEFAULT_PADDING, DEFAULT_TRACK_COUNT, DEFAULT_VERTICAL_EXTENT,
    Direction, TileLayoutConfig,
};
pub use error::{ConfigurationError, TileLayoutError, TileLayoutResult};
pub use geometry::{ContentInsets, TilePoint, TileRect, TileSize, TileSpace};
pub use layout::{Placement, TileLayout};
pub use provider::{AspectRatioExtent, ClampedExtent, ExtentProvider, FixedExtents};
pub use track_state::TrackState;
