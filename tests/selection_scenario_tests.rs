//! Drag-to-select scenarios on the default 7 column x 22 row grid.
//!
//! Each test drives a `SelectionSession` the way the gesture layer would:
//! pointer down, zero or more drags, pointer up, and optionally a merge.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::{a1, assert_no_split_merge, cell, range, registry_of};
use gridmerge::{CellRange, MergeGrid, MergeRegistry, SelectionSession};

// ============================================================================
// WITHOUT MERGES
// ============================================================================

#[test]
fn test_tap_selects_single_cell() {
    let registry = MergeRegistry::new();
    let mut session = SelectionSession::new();

    session.start(cell(2, 1), &registry);
    assert_eq!(session.finish(), Some(range((2, 1), (2, 1))));
}

#[test]
fn test_drag_down_right_is_already_canonical() {
    let registry = MergeRegistry::new();
    let mut session = SelectionSession::new();

    session.start(cell(1, 1), &registry);
    session.update(cell(3, 3), &registry);
    assert_eq!(session.finish(), Some(range((1, 1), (3, 3))));
}

#[test]
fn test_drag_up_left_swaps_corners() {
    let registry = MergeRegistry::new();
    let mut session = SelectionSession::new();

    session.start(cell(3, 3), &registry);
    session.update(cell(1, 1), &registry);
    let finished = session.finish().unwrap();
    assert_eq!(finished.from(), cell(1, 1));
    assert_eq!(finished.to(), cell(3, 3));
}

#[test]
fn test_drag_crossing_anchor_on_one_axis() {
    let registry = MergeRegistry::new();
    let mut session = SelectionSession::new();

    session.start(cell(3, 3), &registry);
    // Up-right: only the row goes backward
    assert_eq!(
        session.update(cell(1, 5), &registry),
        Some(range((1, 3), (3, 5)))
    );
    // Down-left: only the column goes backward
    assert_eq!(
        session.update(cell(5, 0), &registry),
        Some(range((3, 0), (5, 3)))
    );
}

// ============================================================================
// WITH MERGES
// ============================================================================

#[test]
fn test_tap_inside_merge_selects_whole_merge() {
    let registry = registry_of(&["B2:C3"]);
    let mut session = SelectionSession::new();

    assert_eq!(session.start(cell(2, 2), &registry), range((1, 1), (2, 2)));
    assert_eq!(session.finish(), Some(range((1, 1), (2, 2))));
}

#[test]
fn test_drag_touching_merge_corner_expands() {
    let registry = registry_of(&["B2:C3"]);
    let mut session = SelectionSession::new();

    session.start(cell(0, 0), &registry);
    session.update(cell(1, 1), &registry);
    assert_eq!(session.finish(), Some(range((0, 0), (2, 2))));
}

#[test]
fn test_selection_shrinks_back_when_drag_retreats() {
    let registry = registry_of(&["D4:E6"]);
    let mut session = SelectionSession::new();

    session.start(cell(0, 0), &registry);
    assert_eq!(session.update(cell(3, 3), &registry), Some(a1("A1:E6")));
    // Pulling back off the merge releases it
    assert_eq!(session.update(cell(2, 2), &registry), Some(a1("A1:C3")));
}

#[test]
fn test_expansion_chains_across_merges() {
    // Two tall merges side by side, offset vertically
    let registry = registry_of(&["B1:B4", "C3:C8"]);
    let mut session = SelectionSession::new();

    session.start(cell(0, 0), &registry);
    let selected = session.update(cell(0, 2), &registry).unwrap();
    // A1:C1 reaches B1:B4, whose rows then reach C3:C8
    assert_eq!(selected, a1("A1:C8"));
    assert_no_split_merge(selected, &registry);
}

// ============================================================================
// SELECT THEN MERGE
// ============================================================================

#[test]
fn test_finished_selection_is_merged_on_request() {
    let mut grid = MergeGrid::default();

    grid.start(cell(0, 0)).unwrap();
    grid.update(cell(1, 2)).unwrap();
    let finished = grid.finish().unwrap();
    assert!(grid.registry().is_empty(), "finish must not merge");

    assert_eq!(grid.merge_selection(), Some(finished));
    for c in finished.coordinates() {
        assert_eq!(grid.range_covering(c), Some(a1("A1:C2")));
    }

    // Later taps anywhere inside snap to the merge
    grid.start(cell(1, 1)).unwrap();
    assert_eq!(grid.finish(), Some(a1("A1:C2")));
}

#[test]
fn test_merging_a_selection_that_contains_a_merge() {
    let mut grid = MergeGrid::default();
    grid.merge_range(a1("B2:C3")).unwrap();

    grid.start(cell(0, 0)).unwrap();
    grid.update(cell(1, 1)).unwrap();
    grid.finish();
    let merged = grid.merge_selection().unwrap();

    assert_eq!(merged, a1("A1:C3"));
    assert_eq!(grid.registry().merged_ranges(), &[a1("A1:C3")]);
    assert_eq!(grid.range_covering(cell(2, 2)), Some(a1("A1:C3")));
}

#[test]
fn test_cancelled_drag_leaves_nothing_to_merge() {
    let mut grid = MergeGrid::default();
    grid.start(cell(4, 4)).unwrap();
    grid.update(cell(5, 5)).unwrap();
    grid.cancel();

    assert_eq!(grid.finish(), None);
    assert_eq!(grid.merge_selection(), None);
    assert_eq!(grid.highlighted(), None);
}

#[test]
fn test_single_cell_merge_is_legal() {
    let mut grid = MergeGrid::default();
    let merged = grid.merge_range(CellRange::single(cell(3, 3))).unwrap();
    assert!(merged.is_single_cell());
    assert_eq!(grid.range_covering(cell(3, 3)), Some(merged));
    assert!(grid.registry().is_merge_origin(cell(3, 3)));
}
