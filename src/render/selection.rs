//! Selection overlay helpers.

use crate::layout::GridGeometry;
use crate::types::CellRange;

/// Screen rectangle of the selection highlight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Highlight rectangle for `selection`, grown by `outset` pixels on every side.
///
/// The highlight spans from the top-left of the first cell to the bottom-right
/// of the last one, so a selection that snapped to a merge covers the merge.
pub fn selection_rect(selection: CellRange, geometry: &GridGeometry, outset: f32) -> SelectionRect {
    let rect = geometry.range_rect(selection);
    let outset = f64::from(outset);
    SelectionRect {
        x: f64::from(rect.x) - outset,
        y: f64::from(rect.y) - outset,
        w: f64::from(rect.width) + outset * 2.0,
        h: f64::from(rect.height) + outset * 2.0,
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
    use crate::types::{GridConfig, GridCoordinate, DEFAULT_SELECTION_OUTSET};

    #[test]
    fn single_cell_highlight_is_outset() {
        let geometry = GridGeometry::new(&GridConfig::default());
        let rect = selection_rect(
            CellRange::single(GridCoordinate::new(2, 1)),
            &geometry,
            DEFAULT_SELECTION_OUTSET,
        );
        assert_eq!(rect, SelectionRect { x: 56.0, y: 56.0, w: 68.0, h: 38.0 });
    }

    #[test]
    fn range_highlight_spans_both_corners() {
        let geometry = GridGeometry::new(&GridConfig::default());
        let range = CellRange::normalize(GridCoordinate::new(3, 3), GridCoordinate::new(1, 1));
        let rect = selection_rect(range, &geometry, 0.0);
        assert_eq!(rect, SelectionRect { x: 60.0, y: 30.0, w: 180.0, h: 90.0 });
    }
}
