//! Pointer-level tests for the exported `MergeView`.
//!
//! Default metrics: 60px columns, 30px rows, 4px highlight outset.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridmerge::MergeView;

/// Pixel position in the middle of `(row, col)`.
fn center(row: u32, col: u32) -> (f32, f32) {
    (col as f32 * 60.0 + 30.0, row as f32 * 30.0 + 15.0)
}

fn drag(view: &mut MergeView, from: (u32, u32), to: (u32, u32)) -> Option<Vec<u32>> {
    let (x, y) = center(from.0, from.1);
    view.pointer_down(x, y)?;
    let (x, y) = center(to.0, to.1);
    view.pointer_move(x, y);
    view.pointer_up()
}

#[test]
fn test_tap_highlights_single_cell() {
    let mut view = MergeView::new(22, 7);
    let (x, y) = center(2, 1);
    assert_eq!(view.pointer_down(x, y), Some(vec![2, 1, 2, 1]));
    assert_eq!(view.selection_rect(), Some(vec![56.0, 56.0, 68.0, 38.0]));
    assert_eq!(view.pointer_up(), Some(vec![2, 1, 2, 1]));
}

#[test]
fn test_drag_merge_and_snap() {
    let mut view = MergeView::new(22, 7);

    assert_eq!(drag(&mut view, (2, 2), (1, 1)), Some(vec![1, 1, 2, 2]));
    assert_eq!(view.merge_selection(), Some(vec![1, 1, 2, 2]));
    assert_eq!(view.merge_count(), 1);
    assert_eq!(view.range_covering(2, 1), Some(vec![1, 1, 2, 2]));
    assert!(view.is_merge_origin(1, 1));
    assert!(!view.is_merge_origin(2, 2));
    assert_eq!(view.cell_rect(1, 1), Some(vec![60.0, 30.0, 120.0, 60.0]));
    assert_eq!(view.cell_rect(2, 2), None);
    assert_eq!(view.cell_rect(3, 3), Some(vec![180.0, 90.0, 60.0, 30.0]));

    // Touching the merge at its corner pulls it in
    assert_eq!(drag(&mut view, (0, 0), (1, 1)), Some(vec![0, 0, 2, 2]));
}

#[test]
fn test_pointer_outside_grid_is_ignored() {
    let mut view = MergeView::new(22, 7);
    assert_eq!(view.pointer_down(-5.0, 10.0), None);
    assert_eq!(view.pointer_down(7.0 * 60.0 + 1.0, 10.0), None);
    assert_eq!(view.pointer_up(), None);

    let (x, y) = center(0, 0);
    view.pointer_down(x, y);
    // Dragging off the grid keeps the last in-grid selection
    assert_eq!(view.pointer_move(10_000.0, 10_000.0), None);
    assert_eq!(view.pointer_up(), Some(vec![0, 0, 0, 0]));
}

#[test]
fn test_move_without_down_is_ignored() {
    let mut view = MergeView::new(22, 7);
    let (x, y) = center(3, 3);
    assert_eq!(view.pointer_move(x, y), None);
    assert_eq!(view.merge_selection(), None);
}

#[test]
fn test_cancel_clears_highlight() {
    let mut view = MergeView::new(22, 7);
    let (x, y) = center(1, 1);
    view.pointer_down(x, y);
    view.cancel();
    assert_eq!(view.selection_rect(), None);
    assert_eq!(view.pointer_up(), None);
}

#[test]
fn test_config_json_and_merged_ranges_json() {
    let mut view =
        MergeView::with_config_json(r#"{"rowCount":4,"columnCount":4,"columnWidth":10,"rowHeight":10}"#)
            .unwrap();
    view.pointer_down(5.0, 5.0);
    view.pointer_move(15.0, 25.0);
    assert_eq!(view.pointer_up(), Some(vec![0, 0, 2, 1]));
    view.merge_selection();

    let json: serde_json::Value = serde_json::from_str(&view.merged_ranges_json().unwrap()).unwrap();
    assert_eq!(json[0]["from"]["row"], 0);
    assert_eq!(json[0]["to"]["row"], 2);
    assert_eq!(json[0]["to"]["column"], 1);

    // Out of the 4x4 grid
    assert_eq!(view.pointer_down(45.0, 5.0), None);
}

#[test]
fn test_constructor_clamps_oversized_grid() {
    use gridmerge::MAX_ROW_COUNT;

    let view = MergeView::new(u32::MAX, 3);
    let geometry = view.grid().geometry();
    assert_eq!(geometry.row_count, MAX_ROW_COUNT);
    assert_eq!(geometry.column_count, 3);
}
