//! Geometry helpers for tile placement
//!
//! Placements are plain `euclid` rectangles in [`TileSpace`]. Container edge
//! insets reuse taffy's [`Rect`](taffy::Rect) edge type.

use taffy::geometry::AbstractAxis;

use crate::config::Direction;

/// Coordinate space of the container's scrollable content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpace;

pub type TileRect = euclid::Rect<f32, TileSpace>;
pub type TilePoint = euclid::Point2D<f32, TileSpace>;
pub type TileSize = euclid::Size2D<f32, TileSpace>;

/// Edge insets of the container (left, right, top, bottom)
pub type ContentInsets = taffy::Rect<f32>;

/// A tile expressed in flow-relative terms, before it is mapped to x/y
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TileArea {
    /// Offset of the track along the cross axis
    pub grid_axis_position: f32,
    /// Size of the track along the cross axis
    pub grid_axis_size: f32,
    /// Accumulated extent of the track before this tile
    pub masonry_axis_position: f32,
    /// Tile extent including padding on both ends
    pub masonry_axis_size: f32,
}

impl TileArea {
    /// Convert to an absolute rectangle, swapping axes for horizontal flow
    pub fn to_rect(self, masonry_axis: AbstractAxis) -> TileRect {
        match masonry_axis {
            AbstractAxis::Block => euclid::rect(
                self.grid_axis_position,
                self.masonry_axis_position,
                self.grid_axis_size,
                self.masonry_axis_size,
            ),
            AbstractAxis::Inline => euclid::rect(
                self.masonry_axis_position,
                self.grid_axis_position,
                self.masonry_axis_size,
                self.grid_axis_size,
            ),
        }
    }
}

/// Shrink `rect` by `inset` on all four sides
pub fn inset_rect(rect: &TileRect, inset: f32) -> TileRect {
    euclid::rect(
        rect.origin.x + inset,
        rect.origin.y + inset,
        rect.size.width - inset * 2.0,
        rect.size.height - inset * 2.0,
    )
}

/// Trailing edge of `rect` along the flow direction
pub fn trailing_edge(rect: &TileRect, direction: Direction) -> f32 {
    match direction {
        Direction::Vertical => rect.max_y(),
        Direction::Horizontal => rect.max_x(),
    }
}

/// Track-perpendicular dimension available inside a container.
///
/// The container's insets on the cross axis are subtracted from its bounds:
/// left and right for vertical flow, top and bottom for horizontal flow.
pub fn cross_dimension_within(bounds: TileSize, insets: ContentInsets, direction: Direction) -> f32 {
    match direction {
        Direction::Vertical => bounds.width - (insets.left + insets.right),
        Direction::Horizontal => bounds.height - (insets.top + insets.bottom),
    }
}

/// Scrollable content size for a cross dimension and total flow extent
pub fn content_size(cross_dimension: f32, total_extent: f32, direction: Direction) -> TileSize {
    match direction {
        Direction::Vertical => TileSize::new(cross_dimension, total_extent),
        Direction::Horizontal => TileSize::new(total_extent, cross_dimension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> TileArea {
        TileArea {
            grid_axis_position: 150.0,
            grid_axis_size: 150.0,
            masonry_axis_position: 40.0,
            masonry_axis_size: 96.0,
        }
    }

    #[test]
    fn block_axis_maps_track_to_x() {
        let rect = area().to_rect(AbstractAxis::Block);
        assert_eq!(rect, euclid::rect(150.0, 40.0, 150.0, 96.0));
    }

    #[test]
    fn inline_axis_maps_track_to_y() {
        let rect = area().to_rect(AbstractAxis::Inline);
        assert_eq!(rect, euclid::rect(40.0, 150.0, 96.0, 150.0));
    }

    #[test]
    fn inset_shrinks_every_side() {
        let rect: TileRect = euclid::rect(0.0, 0.0, 150.0, 100.0);
        assert_eq!(inset_rect(&rect, 8.0), euclid::rect(8.0, 8.0, 134.0, 84.0));
    }

    #[test]
    fn cross_dimension_subtracts_cross_axis_insets() {
        let bounds = TileSize::new(375.0, 600.0);
        let insets = ContentInsets {
            left: 10.0,
            right: 5.0,
            top: 20.0,
            bottom: 30.0,
        };
        assert_eq!(cross_dimension_within(bounds, insets, Direction::Vertical), 360.0);
        assert_eq!(cross_dimension_within(bounds, insets, Direction::Horizontal), 550.0);
        let none = ContentInsets {
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
        };
        assert_eq!(cross_dimension_within(bounds, none, Direction::Vertical), 375.0);
    }

    #[test]
    fn content_size_swaps_with_direction() {
        assert_eq!(content_size(300.0, 130.0, Direction::Vertical), TileSize::new(300.0, 130.0));
        assert_eq!(content_size(300.0, 130.0, Direction::Horizontal), TileSize::new(130.0, 300.0));
    }
}
