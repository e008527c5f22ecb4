//! A grid instance: its geometry, its merges and the selection in progress.
//!
//! `MergeGrid` is the coordinate-level controller behind [`crate::MergeView`]
//! and [`crate::scenario::replay`]. It adds bounds checking at the edge, keeps
//! the last finished selection as the commit candidate and hands merges to the
//! registry.

use crate::error::{GridMergeError, Result};
use crate::layout::GridGeometry;
use crate::merge::MergeRegistry;
use crate::render::{selection_rect, SelectionRect};
use crate::session::SelectionSession;
use crate::types::{CellRange, GridConfig, GridCoordinate};

#[derive(Debug, Clone)]
pub struct MergeGrid {
    config: GridConfig,
    geometry: GridGeometry,
    registry: MergeRegistry,
    session: SelectionSession,
    /// Last range returned by `finish`, waiting for an explicit merge
    candidate: Option<CellRange>,
}

impl Default for MergeGrid {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl MergeGrid {
    /// Grid for a trusted config; see [`MergeGrid::try_new`] for configs read
    /// from outside.
    pub fn new(config: GridConfig) -> Self {
        Self {
            geometry: GridGeometry::new(&config),
            config,
            registry: MergeRegistry::new(),
            session: SelectionSession::new(),
            candidate: None,
        }
    }

    /// Grid for `config` after [`GridConfig::validate`].
    pub fn try_new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn registry(&self) -> &MergeRegistry {
        &self.registry
    }

    pub fn session(&self) -> &SelectionSession {
        &self.session
    }

    /// The finished selection a merge action would commit.
    pub fn candidate(&self) -> Option<CellRange> {
        self.candidate
    }

    /// Reject coordinates outside the grid.
    pub fn check_bounds(&self, cell: GridCoordinate) -> Result<GridCoordinate> {
        if self.geometry.contains(cell) {
            Ok(cell)
        } else {
            Err(GridMergeError::OutOfBounds {
                row: cell.row,
                column: cell.column,
                rows: self.geometry.row_count,
                columns: self.geometry.column_count,
            })
        }
    }

    /// Pointer down on `cell`. Clears any previous candidate.
    pub fn start(&mut self, cell: GridCoordinate) -> Result<CellRange> {
        let cell = self.check_bounds(cell)?;
        self.candidate = None;
        Ok(self.session.start(cell, &self.registry))
    }

    /// Drag to `cell`. `Ok(None)` when no interaction is in progress.
    pub fn update(&mut self, cell: GridCoordinate) -> Result<Option<CellRange>> {
        let cell = self.check_bounds(cell)?;
        Ok(self.session.update(cell, &self.registry))
    }

    /// Pointer up. The finished range becomes the merge candidate.
    pub fn finish(&mut self) -> Option<CellRange> {
        let finished = self.session.finish()?;
        self.candidate = Some(finished);
        Some(finished)
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Merge the candidate selection. `None` if nothing has been selected.
    pub fn merge_selection(&mut self) -> Option<CellRange> {
        let Some(candidate) = self.candidate else {
            tracing::debug!("merge requested without a finished selection");
            return None;
        };
        let merged = self.registry.merge(candidate);
        self.candidate = Some(merged);
        Some(merged)
    }

    /// Merge an explicit range, both corners bounds-checked.
    pub fn merge_range(&mut self, range: CellRange) -> Result<CellRange> {
        self.check_bounds(range.from())?;
        self.check_bounds(range.to())?;
        Ok(self.registry.merge(range))
    }

    pub fn range_covering(&self, cell: GridCoordinate) -> Option<CellRange> {
        self.registry.range_covering(cell)
    }

    /// The range to highlight: the live selection, else the candidate.
    pub fn highlighted(&self) -> Option<CellRange> {
        self.session.current().or(self.candidate)
    }

    /// Highlight rectangle for [`MergeGrid::highlighted`].
    pub fn selection_rect(&self) -> Option<SelectionRect> {
        self.highlighted()
            .map(|range| selection_rect(range, &self.geometry, self.config.selection_outset))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn c(row: u32, column: u32) -> GridCoordinate {
        GridCoordinate::new(row, column)
    }

    #[test]
    fn finish_then_merge_commits_candidate() {
        let mut grid = MergeGrid::default();
        grid.start(c(1, 1)).unwrap();
        grid.update(c(2, 2)).unwrap();
        let finished = grid.finish().unwrap();
        assert_eq!(grid.candidate(), Some(finished));
        assert!(grid.registry().is_empty());

        assert_eq!(grid.merge_selection(), Some(finished));
        assert_eq!(grid.range_covering(c(2, 1)), Some(finished));
    }

    #[test]
    fn merging_selection_twice_keeps_merge_order() {
        let mut grid = MergeGrid::default();
        grid.start(c(0, 0)).unwrap();
        grid.update(c(1, 1)).unwrap();
        grid.finish();
        let first = grid.merge_selection().unwrap();
        let other = grid.merge_range(CellRange::normalize(c(4, 4), c(5, 5))).unwrap();

        assert_eq!(grid.merge_selection(), Some(first));
        assert_eq!(grid.registry().merged_ranges(), &[first, other]);
    }

    #[test]
    fn merge_without_selection_is_a_no_op() {
        let mut grid = MergeGrid::default();
        assert_eq!(grid.merge_selection(), None);
        grid.start(c(0, 0)).unwrap();
        // Still dragging: nothing finished yet
        assert_eq!(grid.merge_selection(), None);
        assert!(grid.registry().is_empty());
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut grid = MergeGrid::new(GridConfig::with_size(22, 7));
        let err = grid.start(c(22, 0)).unwrap_err();
        assert!(matches!(
            err,
            GridMergeError::OutOfBounds { row: 22, column: 0, rows: 22, columns: 7 }
        ));
        assert!(grid.merge_range(CellRange::normalize(c(0, 0), c(0, 7))).is_err());
        assert!(grid.registry().is_empty());
    }

    #[test]
    fn oversized_grid_is_rejected_before_allocating() {
        let err = MergeGrid::try_new(GridConfig::with_size(4_000_000_000, 7)).unwrap_err();
        assert!(matches!(err, GridMergeError::GridTooLarge { .. }));
        assert!(MergeGrid::try_new(GridConfig::default()).is_ok());
    }

    #[test]
    fn highlight_tracks_live_selection_then_candidate() {
        let mut grid = MergeGrid::default();
        assert_eq!(grid.selection_rect(), None);
        grid.start(c(0, 0)).unwrap();
        let live = grid.selection_rect().unwrap();
        assert_eq!(live.x, -4.0);
        grid.update(c(1, 1)).unwrap();
        grid.finish();
        let finished = grid.selection_rect().unwrap();
        assert_eq!(finished.w, 128.0);
        assert_eq!(finished.h, 68.0);
    }
}
