//! Item extent providers
//!
//! A provider answers, for one item index, how long the item's tile should be
//! along the flow axis. Returning `None` makes the engine use the configured
//! default extent.

use crate::config::Direction;
use crate::geometry::TileSize;

/// Supplies the flow-axis extent of each item
pub trait ExtentProvider {
    fn item_extent(&self, index: usize, direction: Direction) -> Option<f32>;
}

impl<P: ExtentProvider + ?Sized> ExtentProvider for &P {
    fn item_extent(&self, index: usize, direction: Direction) -> Option<f32> {
        (**self).item_extent(index, direction)
    }
}

impl<P: ExtentProvider + ?Sized> ExtentProvider for Box<P> {
    fn item_extent(&self, index: usize, direction: Direction) -> Option<f32> {
        (**self).item_extent(index, direction)
    }
}

/// Precomputed extents, one per item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedExtents {
    extents: Vec<f32>,
}

impl FixedExtents {
    pub fn new(extents: impl Into<Vec<f32>>) -> Self {
        Self {
            extents: extents.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.extents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }
}

impl ExtentProvider for FixedExtents {
    fn item_extent(&self, index: usize, _direction: Direction) -> Option<f32> {
        self.extents.get(index).copied()
    }
}

/// Keeps another provider's extents within `[min, max]`
///
/// Missing values stay missing so the engine default still applies.
#[derive(Debug, Clone)]
pub struct ClampedExtent<P> {
    inner: P,
    min: f32,
    max: f32,
}

impl<P: ExtentProvider> ClampedExtent<P> {
    /// `min` must not exceed `max`; the bounds are swapped otherwise
    pub fn new(inner: P, min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { inner, min, max }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: ExtentProvider> ExtentProvider for ClampedExtent<P> {
    fn item_extent(&self, index: usize, direction: Direction) -> Option<f32> {
        self.inner
            .item_extent(index, direction)
            .map(|extent| extent.max(self.min).min(self.max))
    }
}

/// Sizes tiles from the natural size of their content
///
/// With the cross-axis size of a tile fixed, the flow-axis extent keeps the
/// content's aspect ratio. An image gallery flowing horizontally with a
/// fixed row height gets tiles as wide as each image at that height.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRatioExtent {
    natural_sizes: Vec<TileSize>,
    tile_cross_size: f32,
}

impl AspectRatioExtent {
    /// `tile_cross_size` is usually [`TileLayoutConfig::tile_cross_size`](crate::TileLayoutConfig::tile_cross_size)
    pub fn new(natural_sizes: impl Into<Vec<TileSize>>, tile_cross_size: f32) -> Self {
        Self {
            natural_sizes: natural_sizes.into(),
            tile_cross_size,
        }
    }

    pub fn set_tile_cross_size(&mut self, tile_cross_size: f32) {
        self.tile_cross_size = tile_cross_size;
    }
}

impl ExtentProvider for AspectRatioExtent {
    fn item_extent(&self, index: usize, direction: Direction) -> Option<f32> {
        let size = self.natural_sizes.get(index)?;
        let (cross, flow) = match direction {
            Direction::Vertical => (size.width, size.height),
            Direction::Horizontal => (size.height, size.width),
        };
        if cross <= 0.0 {
            return None;
        }
        Some(self.tile_cross_size * flow / cross)
    }
}
