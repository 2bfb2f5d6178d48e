//! Shortest-track tile layout
//!
//! Items are visited in index order. Each one is appended to the track with
//! the smallest accumulated extent, which yields a masonry packing where
//! tracks stay within one tile of each other.

use crate::config::{Direction, TileLayoutConfig, validate_cross_dimension};
use crate::error::{TileLayoutError, TileLayoutResult};
use crate::geometry::{self, TileArea, TileRect, TileSize};
use crate::provider::ExtentProvider;
use crate::track_state::TrackState;

/// Final position of one item
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub index: usize,
    /// Track the item was assigned to
    pub track: usize,
    /// Tile rectangle with the padding inset already applied
    pub frame: TileRect,
}

/// Cached result of the last successful layout pass
#[derive(Debug, Clone, PartialEq)]
struct PreparedLayout {
    direction: Direction,
    cross_dimension: f32,
    placements: Vec<Placement>,
    track_extents: Vec<f32>,
    total_extent: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum LayoutState {
    #[default]
    Unprepared,
    Prepared(PreparedLayout),
}

/// Masonry tile layout engine
///
/// Call [`prepare`](Self::prepare) whenever the item count or the container
/// geometry changes; every pass rebuilds the cache from scratch. Queries
/// answer from the cache of the last successful pass and return empty
/// results before the first one.
#[derive(Debug, Clone, Default)]
pub struct TileLayout {
    config: TileLayoutConfig,
    state: LayoutState,
}

impl TileLayout {
    /// Create an engine, rejecting an invalid configuration up front
    pub fn new(config: TileLayoutConfig) -> TileLayoutResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: LayoutState::Unprepared,
        })
    }

    pub fn config(&self) -> &TileLayoutConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// The cached placements are kept until the next [`prepare`](Self::prepare),
    /// which validates the new configuration.
    pub fn set_config(&mut self, config: TileLayoutConfig) {
        self.config = config;
    }

    /// Drop the cached placements
    pub fn invalidate(&mut self) {
        self.state = LayoutState::Unprepared;
    }

    pub fn is_prepared(&self) -> bool {
        matches!(self.state, LayoutState::Prepared(_))
    }

    /// Run a layout pass for `item_count` items.
    ///
    /// `cross_dimension` is the width split into columns for vertical flow,
    /// or the height split into rows for horizontal flow. `extent_for` is
    /// queried once per item in index order; `None` selects the configured
    /// default extent.
    ///
    /// On error the previous cache is left untouched.
    pub fn prepare<F>(
        &mut self,
        item_count: usize,
        cross_dimension: f32,
        mut extent_for: F,
    ) -> TileLayoutResult<()>
    where
        F: FnMut(usize, Direction) -> Option<f32>,
    {
        if let Err(err) = self
            .config
            .validate()
            .and_then(|()| validate_cross_dimension(cross_dimension))
        {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected tile layout pass: {}", err);
            return Err(err.into());
        }

        let direction = self.config.direction;
        let masonry_axis = direction.masonry_axis();
        let padding = self.config.padding;
        let default_extent = self.config.resolved_default_extent();
        let track_size = self.config.track_cross_size(cross_dimension);

        let mut tracks = TrackState::new(self.config.track_count);
        let mut placements = Vec::with_capacity(item_count);
        let mut track = 0;

        for index in 0..item_count {
            let content_extent = extent_for(index, direction).unwrap_or(default_extent);
            let tile_extent = padding * 2.0 + content_extent;

            let area = TileArea {
                grid_axis_position: track as f32 * track_size,
                grid_axis_size: track_size,
                masonry_axis_position: tracks.track_position(track),
                masonry_axis_size: tile_extent,
            };
            let frame = geometry::inset_rect(&area.to_rect(masonry_axis), padding);

            #[cfg(feature = "tracing")]
            tracing::trace!(
                "Placed tile {} in track {} at offset {}",
                index,
                track,
                area.masonry_axis_position
            );

            placements.push(Placement {
                index,
                track,
                frame,
            });
            tracks.place_item(track, tile_extent);
            track = tracks.shortest_track();
        }

        let total_extent = tracks.max_position();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Prepared {} tiles in {} tracks, total extent {}",
            item_count,
            tracks.track_count(),
            total_extent
        );

        self.state = LayoutState::Prepared(PreparedLayout {
            direction,
            cross_dimension,
            placements,
            track_extents: tracks.into_positions(),
            total_extent,
        });
        Ok(())
    }

    /// Run a layout pass, taking item extents from `provider`
    pub fn prepare_with<P>(
        &mut self,
        item_count: usize,
        cross_dimension: f32,
        provider: &P,
    ) -> TileLayoutResult<()>
    where
        P: ExtentProvider + ?Sized,
    {
        self.prepare(item_count, cross_dimension, |index, direction| {
            provider.item_extent(index, direction)
        })
    }

    fn prepared(&self) -> Option<&PreparedLayout> {
        match &self.state {
            LayoutState::Prepared(prepared) => Some(prepared),
            LayoutState::Unprepared => None,
        }
    }

    /// Number of items covered by the last pass
    pub fn item_count(&self) -> usize {
        self.prepared().map_or(0, |p| p.placements.len())
    }

    /// Placement of the item at `index`
    pub fn placement_for(&self, index: usize) -> TileLayoutResult<&Placement> {
        self.placements()
            .get(index)
            .ok_or_else(|| TileLayoutError::IndexOutOfRange {
                index,
                item_count: self.item_count(),
            })
    }

    /// All placements in index order
    pub fn placements(&self) -> &[Placement] {
        self.prepared()
            .map(|p| p.placements.as_slice())
            .unwrap_or_default()
    }

    /// Placements whose frame intersects `rect`, in index order
    pub fn placements_intersecting(&self, rect: TileRect) -> impl Iterator<Item = &Placement> {
        self.placements()
            .iter()
            .filter(move |placement| placement.frame.intersects(&rect))
    }

    /// Length of the scrollable content along the flow axis
    pub fn total_content_extent(&self) -> f32 {
        self.prepared().map_or(0.0, |p| p.total_extent)
    }

    /// Accumulated extent of every track after the last pass
    pub fn track_extents(&self) -> &[f32] {
        self.prepared()
            .map(|p| p.track_extents.as_slice())
            .unwrap_or_default()
    }

    /// Size of the scrollable content area, zero before the first pass
    pub fn content_size(&self) -> TileSize {
        match self.prepared() {
            Some(p) => geometry::content_size(p.cross_dimension, p.total_extent, p.direction),
            None => TileSize::zero(),
        }
    }
}
