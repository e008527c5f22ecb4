//! Pre-computed pixel geometry for a grid.
//!
//! Cell positions are computed once so that hit testing a pointer position is
//! an O(log n) binary search and cell/range rectangles are O(1).

use crate::merge::MergeRegistry;
use crate::types::{CellRange, GridConfig, GridCoordinate};

/// Pre-computed layout data for a grid
#[derive(Debug, Clone)]
pub struct GridGeometry {
    /// Cumulative column positions (`col_positions[i]` = x of column i's left edge)
    pub col_positions: Vec<f32>,
    /// Cumulative row positions (`row_positions[i]` = y of row i's top edge)
    pub row_positions: Vec<f32>,
    /// Number of rows
    pub row_count: u32,
    /// Number of columns
    pub column_count: u32,
}

/// Rectangle representing a cell's (or range's) bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
    /// True if this cell should be skipped (part of merge but not origin)
    pub skip: bool,
}

impl GridGeometry {
    /// Uniform geometry from a grid config.
    pub fn new(config: &GridConfig) -> Self {
        let col_widths = vec![config.column_width; config.column_count as usize];
        let row_heights = vec![config.row_height; config.row_count as usize];
        Self::with_sizes(&col_widths, &row_heights)
    }

    /// Geometry with an explicit width per column and height per row.
    ///
    /// Negative sizes are treated as zero.
    pub fn with_sizes(col_widths: &[f32], row_heights: &[f32]) -> Self {
        let col_positions = cumulative_positions(col_widths);
        let row_positions = cumulative_positions(row_heights);

        GridGeometry {
            column_count: u32::try_from(col_widths.len()).unwrap_or(u32::MAX),
            row_count: u32::try_from(row_heights.len()).unwrap_or(u32::MAX),
            col_positions,
            row_positions,
        }
    }

    /// True if `cell` lies inside the grid.
    pub fn contains(&self, cell: GridCoordinate) -> bool {
        cell.row < self.row_count && cell.column < self.column_count
    }

    /// Cell under the pixel position `(x, y)`, or `None` outside the grid.
    pub fn coordinate_at(&self, x: f32, y: f32) -> Option<GridCoordinate> {
        Some(GridCoordinate::new(self.row_at_y(y)?, self.col_at_x(x)?))
    }

    /// Find row at y position (binary search)
    pub fn row_at_y(&self, y: f32) -> Option<u32> {
        index_at(&self.row_positions, y)
    }

    /// Find column at x position (binary search)
    pub fn col_at_x(&self, x: f32) -> Option<u32> {
        index_at(&self.col_positions, x)
    }

    /// Bounds of a single cell, ignoring merges
    pub fn cell_rect(&self, cell: GridCoordinate) -> CellRect {
        self.range_rect(CellRange::single(cell))
    }

    /// Bounds from the top-left of `range.from()` to the bottom-right of `range.to()`
    pub fn range_rect(&self, range: CellRange) -> CellRect {
        let (start_row, start_col, end_row, end_col) = range.bounds();
        let x = edge(&self.col_positions, start_col);
        let y = edge(&self.row_positions, start_row);
        let x2 = edge(&self.col_positions, end_col.saturating_add(1));
        let y2 = edge(&self.row_positions, end_row.saturating_add(1));

        CellRect {
            x,
            y,
            width: (x2 - x).max(0.0),
            height: (y2 - y).max(0.0),
            skip: false,
        }
    }

    /// Bounds to draw for `cell` when merged cells render as one block.
    ///
    /// A merge origin spans the whole merge; other cells of a merge are skipped.
    pub fn merged_cell_rect(&self, cell: GridCoordinate, registry: &MergeRegistry) -> CellRect {
        match registry.range_covering(cell) {
            Some(merged) if merged.from() == cell => self.range_rect(merged),
            Some(_) => CellRect {
                skip: true,
                ..self.cell_rect(cell)
            },
            None => self.cell_rect(cell),
        }
    }

    /// Get total width of the grid
    pub fn total_width(&self) -> f32 {
        self.col_positions.last().copied().unwrap_or(0.0)
    }

    /// Get total height of the grid
    pub fn total_height(&self) -> f32 {
        self.row_positions.last().copied().unwrap_or(0.0)
    }
}

fn cumulative_positions(sizes: &[f32]) -> Vec<f32> {
    let mut positions = Vec::with_capacity(sizes.len() + 1);
    let mut pos: f32 = 0.0;
    for size in sizes {
        positions.push(pos);
        pos += size.max(0.0);
    }
    positions.push(pos); // Final edge
    positions
}

/// Position of edge `index`, clamped to the last edge.
fn edge(positions: &[f32], index: u32) -> f32 {
    positions
        .get(index as usize)
        .or_else(|| positions.last())
        .copied()
        .unwrap_or(0.0)
}

fn index_at(positions: &[f32], pos: f32) -> Option<u32> {
    let last = positions.last().copied()?;
    if pos.is_nan() || pos < 0.0 || pos >= last {
        return None;
    }
    let i = match positions
        .binary_search_by(|p| p.partial_cmp(&pos).unwrap_or(std::cmp::Ordering::Equal))
    {
        Ok(i) => i,
        Err(i) => i.saturating_sub(1),
    };
    u32::try_from(i).ok()
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
    use crate::types::{DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};

    fn c(row: u32, column: u32) -> GridCoordinate {
        GridCoordinate::new(row, column)
    }

    fn default_geometry() -> GridGeometry {
        GridGeometry::new(&GridConfig::default())
    }

    #[test]
    fn test_basic_layout() {
        let geometry = default_geometry();
        assert_eq!(geometry.row_count, 22);
        assert_eq!(geometry.column_count, 7);
        assert_eq!(geometry.total_width(), DEFAULT_COLUMN_WIDTH * 7.0);
        assert_eq!(geometry.total_height(), DEFAULT_ROW_HEIGHT * 22.0);
    }

    #[test]
    fn test_cell_rect() {
        let geometry = default_geometry();
        let rect = geometry.cell_rect(c(0, 0));
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.width, DEFAULT_COLUMN_WIDTH);
        assert_eq!(rect.height, DEFAULT_ROW_HEIGHT);
        assert!(!rect.skip);

        let rect = geometry.cell_rect(c(1, 2));
        assert_eq!(rect.x, DEFAULT_COLUMN_WIDTH * 2.0);
        assert_eq!(rect.y, DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_range_rect_spans_corners() {
        let geometry = default_geometry();
        let rect = geometry.range_rect(CellRange::normalize(c(3, 3), c(1, 1)));
        assert_eq!(rect.x, 60.0);
        assert_eq!(rect.y, 30.0);
        assert_eq!(rect.width, 180.0);
        assert_eq!(rect.height, 90.0);
    }

    #[test]
    fn test_merged_cells() {
        let geometry = default_geometry();
        let mut registry = MergeRegistry::new();
        registry.merge(CellRange::normalize(c(0, 0), c(1, 1)));

        // Origin cell should have full merged dimensions
        let rect = geometry.merged_cell_rect(c(0, 0), &registry);
        assert!(!rect.skip);
        assert_eq!(rect.width, DEFAULT_COLUMN_WIDTH * 2.0);
        assert_eq!(rect.height, DEFAULT_ROW_HEIGHT * 2.0);

        // Non-origin cells should be skipped
        assert!(geometry.merged_cell_rect(c(0, 1), &registry).skip);
        assert!(geometry.merged_cell_rect(c(1, 0), &registry).skip);
        assert!(geometry.merged_cell_rect(c(1, 1), &registry).skip);
        assert!(!geometry.merged_cell_rect(c(2, 2), &registry).skip);
    }

    #[test]
    fn test_row_at_y() {
        let geometry = default_geometry();
        assert_eq!(geometry.row_at_y(0.0), Some(0));
        assert_eq!(geometry.row_at_y(10.0), Some(0));
        assert_eq!(geometry.row_at_y(DEFAULT_ROW_HEIGHT), Some(1));
        assert_eq!(geometry.row_at_y(DEFAULT_ROW_HEIGHT * 2.5), Some(2));
        assert_eq!(geometry.row_at_y(-1.0), None);
        assert_eq!(geometry.row_at_y(geometry.total_height()), None);
        assert_eq!(geometry.row_at_y(f32::NAN), None);
    }

    #[test]
    fn test_col_at_x() {
        let geometry = default_geometry();
        assert_eq!(geometry.col_at_x(0.0), Some(0));
        assert_eq!(geometry.col_at_x(32.0), Some(0));
        assert_eq!(geometry.col_at_x(DEFAULT_COLUMN_WIDTH), Some(1));
        assert_eq!(geometry.col_at_x(DEFAULT_COLUMN_WIDTH * 6.5), Some(6));
        assert_eq!(geometry.col_at_x(DEFAULT_COLUMN_WIDTH * 7.0), None);
    }

    #[test]
    fn test_custom_sizes() {
        let geometry = GridGeometry::with_sizes(&[10.0, 40.0, 20.0], &[15.0, -5.0, 15.0]);
        assert_eq!(geometry.col_positions, vec![0.0, 10.0, 50.0, 70.0]);
        assert_eq!(geometry.row_positions, vec![0.0, 15.0, 15.0, 30.0]);
        assert_eq!(geometry.coordinate_at(45.0, 20.0), Some(c(2, 1)));
        assert!(geometry.contains(c(2, 2)));
        assert!(!geometry.contains(c(3, 0)));
    }
}
