//! Track accumulators for the shortest-track placement algorithm

/// Running extents of every track during one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct TrackState {
    /// Accumulated extent of each track along the flow axis
    track_positions: Vec<f32>,
    /// Number of items placed in each track
    track_item_counts: Vec<usize>,
    /// Largest accumulated extent seen so far
    max_position: f32,
}

impl TrackState {
    /// Fresh state with every track at zero extent
    pub fn new(track_count: usize) -> Self {
        Self {
            track_positions: vec![0.0; track_count],
            track_item_counts: vec![0; track_count],
            max_position: 0.0,
        }
    }

    pub fn track_count(&self) -> usize {
        self.track_positions.len()
    }

    /// Index of the track with the smallest accumulated extent.
    ///
    /// Scans in ascending order and keeps the first minimum, so ties go to
    /// the lowest track index.
    pub fn shortest_track(&self) -> usize {
        let mut shortest = 0;
        for (idx, &pos) in self.track_positions.iter().enumerate().skip(1) {
            if pos < self.track_positions[shortest] {
                shortest = idx;
            }
        }
        shortest
    }

    /// Append an item of `extent` to `track_index`.
    ///
    /// Returns the offset at which the item starts, or `None` when the track
    /// does not exist.
    pub fn place_item(&mut self, track_index: usize, extent: f32) -> Option<f32> {
        let position = self.track_positions.get_mut(track_index)?;
        let start = *position;
        *position = start + extent;
        self.track_item_counts[track_index] += 1;
        self.max_position = self.max_position.max(*position);
        Some(start)
    }

    pub fn track_position(&self, track_index: usize) -> f32 {
        self.track_positions
            .get(track_index)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn track_positions(&self) -> &[f32] {
        &self.track_positions
    }

    pub fn track_item_count(&self, track_index: usize) -> usize {
        self.track_item_counts
            .get(track_index)
            .copied()
            .unwrap_or(0)
    }

    /// Maximum accumulated extent across all tracks
    pub fn max_position(&self) -> f32 {
        self.max_position
    }

    pub(crate) fn into_positions(self) -> Vec<f32> {
        self.track_positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_starts_at_zero() {
        let state = TrackState::new(3);
        assert_eq!(state.track_count(), 3);
        assert_eq!(state.track_positions(), &[0.0, 0.0, 0.0]);
        assert_eq!(state.max_position(), 0.0);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let mut state = TrackState::new(3);
        assert_eq!(state.shortest_track(), 0);

        state.place_item(0, 50.0);
        assert_eq!(state.shortest_track(), 1);

        state.place_item(1, 50.0);
        state.place_item(2, 50.0);
        assert_eq!(state.shortest_track(), 0);
    }

    #[test]
    fn shortest_track_picks_strict_minimum() {
        let mut state = TrackState::new(3);
        state.place_item(0, 30.0);
        state.place_item(1, 10.0);
        state.place_item(2, 20.0);
        assert_eq!(state.shortest_track(), 1);
    }

    #[test]
    fn place_item_returns_start_offset() {
        let mut state = TrackState::new(2);
        assert_eq!(state.place_item(1, 40.0), Some(0.0));
        assert_eq!(state.place_item(1, 25.0), Some(40.0));
        assert_eq!(state.track_position(1), 65.0);
        assert_eq!(state.track_item_count(1), 2);
        assert_eq!(state.track_item_count(0), 0);
        assert_eq!(state.max_position(), 65.0);
    }

    #[test]
    fn place_item_ignores_missing_track() {
        let mut state = TrackState::new(2);
        assert_eq!(state.place_item(5, 40.0), None);
        assert_eq!(state.max_position(), 0.0);
        assert_eq!(state.track_position(5), 0.0);
    }
}
