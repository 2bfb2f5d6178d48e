use taffy::geometry::AbstractAxis;

use crate::error::ConfigurationError;

/// Default tile extent used for vertical flow when the provider has no value
pub const DEFAULT_VERTICAL_EXTENT: f32 = 180.0;
/// Default tile extent used for horizontal flow when the provider has no value
pub const DEFAULT_HORIZONTAL_EXTENT: f32 = 120.0;

pub const DEFAULT_TRACK_COUNT: usize = 2;
pub const DEFAULT_PADDING: f32 = 8.0;

/// Flow direction of the tiles
///
/// Vertical flow stacks tiles top-to-bottom inside columns, horizontal flow
/// stacks them left-to-right inside rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
}

impl Direction {
    /// The axis along which tracks grow
    pub fn masonry_axis(self) -> AbstractAxis {
        match self {
            Direction::Vertical => AbstractAxis::Block,
            Direction::Horizontal => AbstractAxis::Inline,
        }
    }

    /// The axis that is split evenly between tracks
    pub fn grid_axis(self) -> AbstractAxis {
        self.masonry_axis().other()
    }

    pub fn default_item_extent(self) -> f32 {
        match self {
            Direction::Vertical => DEFAULT_VERTICAL_EXTENT,
            Direction::Horizontal => DEFAULT_HORIZONTAL_EXTENT,
        }
    }
}

/// Options used when constructing a [`TileLayout`](crate::TileLayout)
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayoutConfig {
    /// Flow direction; decides whether tracks are columns or rows
    pub direction: Direction,
    /// Number of parallel tracks (columns or rows)
    pub track_count: usize,
    /// Inset applied on all four sides of every tile.
    /// Visually adjacent tiles end up `2 * padding` apart.
    pub padding: f32,
    /// Extent used when the provider returns no value.
    /// `None` falls back to the direction's default.
    pub default_item_extent: Option<f32>,
}

impl Default for TileLayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Vertical,
            track_count: DEFAULT_TRACK_COUNT,
            padding: DEFAULT_PADDING,
            default_item_extent: None,
        }
    }
}

impl TileLayoutConfig {
    /// Vertical layout with `track_count` columns
    pub fn columns(track_count: usize) -> Self {
        Self {
            track_count,
            ..Default::default()
        }
    }

    /// Horizontal layout with `track_count` rows
    pub fn rows(track_count: usize) -> Self {
        Self {
            direction: Direction::Horizontal,
            track_count,
            ..Default::default()
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_track_count(mut self, track_count: usize) -> Self {
        self.track_count = track_count;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_default_item_extent(mut self, extent: f32) -> Self {
        self.default_item_extent = Some(extent);
        self
    }

    /// Fallback extent for items the provider has no value for
    pub fn resolved_default_extent(&self) -> f32 {
        self.default_item_extent
            .unwrap_or_else(|| self.direction.default_item_extent())
    }

    /// Cross-axis size of a single track before the padding inset
    pub fn track_cross_size(&self, cross_dimension: f32) -> f32 {
        cross_dimension / self.track_count as f32
    }

    /// Cross-axis size of a rendered tile, padding removed on both sides.
    ///
    /// Hosts use this to measure item content before answering extent queries.
    pub fn tile_cross_size(&self, cross_dimension: f32) -> f32 {
        self.track_cross_size(cross_dimension) - self.padding * 2.0
    }

    /// Check the configuration without touching any layout state
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.track_count == 0 {
            return Err(ConfigurationError::InvalidTrackCount {
                track_count: self.track_count,
            });
        }
        if !self.padding.is_finite() {
            return Err(ConfigurationError::InvalidPadding {
                padding: self.padding,
            });
        }
        Ok(())
    }
}

/// Validate a container's cross dimension for a layout pass
pub(crate) fn validate_cross_dimension(cross_dimension: f32) -> Result<(), ConfigurationError> {
    if !cross_dimension.is_finite() || cross_dimension < 0.0 {
        return Err(ConfigurationError::InvalidCrossDimension { cross_dimension });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_two_column_vertical_layout() {
        let config = TileLayoutConfig::default();
        assert_eq!(config.direction, Direction::Vertical);
        assert_eq!(config.track_count, 2);
        assert_eq!(config.padding, 8.0);
        assert_eq!(config.resolved_default_extent(), 180.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_extent_follows_direction() {
        assert_eq!(TileLayoutConfig::rows(3).resolved_default_extent(), 120.0);
        let custom = TileLayoutConfig::rows(3).with_default_item_extent(42.0);
        assert_eq!(custom.resolved_default_extent(), 42.0);
    }

    #[test]
    fn zero_tracks_rejected() {
        let err = TileLayoutConfig::columns(0).validate().unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidTrackCount { track_count: 0 });
        assert!(err.to_string().contains("Invalid track count 0"));
    }

    #[test]
    fn non_finite_padding_rejected() {
        let config = TileLayoutConfig::default().with_padding(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidPadding { .. })
        ));
    }

    #[test]
    fn cross_dimension_validation() {
        assert!(validate_cross_dimension(0.0).is_ok());
        assert!(validate_cross_dimension(320.0).is_ok());
        assert!(validate_cross_dimension(-1.0).is_err());
        assert!(validate_cross_dimension(f32::INFINITY).is_err());
    }

    #[test]
    fn tile_cross_size_removes_padding() {
        let config = TileLayoutConfig::columns(2).with_padding(5.0);
        assert_eq!(config.track_cross_size(300.0), 150.0);
        assert_eq!(config.tile_cross_size(300.0), 140.0);
    }

    #[test]
    fn axes_follow_direction() {
        assert_eq!(Direction::Vertical.masonry_axis(), AbstractAxis::Block);
        assert_eq!(Direction::Vertical.grid_axis(), AbstractAxis::Inline);
        assert_eq!(Direction::Horizontal.masonry_axis(), AbstractAxis::Inline);
    }
}
