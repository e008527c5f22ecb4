//! Common test utilities and assertion helpers.
//!
//! Builders for registries and sessions in A1 notation, plus invariant checks
//! shared by the integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridmerge::{CellRange, GridCoordinate, MergeRegistry};

/// Coordinate from `(row, column)`.
#[must_use]
pub fn cell(row: u32, column: u32) -> GridCoordinate {
    GridCoordinate::new(row, column)
}

/// Range between two `(row, column)` corners, in any order.
#[must_use]
pub fn range(from: (u32, u32), to: (u32, u32)) -> CellRange {
    CellRange::normalize(from.into(), to.into())
}

/// Range from A1 text. Panics on malformed input.
#[must_use]
pub fn a1(text: &str) -> CellRange {
    text.parse()
        .unwrap_or_else(|e| panic!("bad A1 range {text:?}: {e}"))
}

/// Registry built by merging each A1 range in order.
#[must_use]
pub fn registry_of(ranges: &[&str]) -> MergeRegistry {
    ranges.iter().map(|text| a1(text)).collect()
}

/// Every coordinate of a `rows` x `columns` grid, row-major.
pub fn all_cells(rows: u32, columns: u32) -> impl Iterator<Item = GridCoordinate> {
    (0..rows).flat_map(move |r| (0..columns).map(move |c| cell(r, c)))
}

/// Assert that `selection` does not partially cover any merged range.
pub fn assert_no_split_merge(selection: CellRange, registry: &MergeRegistry) {
    for merged in registry.merged_ranges() {
        assert!(
            selection.contains_range(merged) || !selection.overlaps(merged),
            "selection {selection} splits merged range {merged}"
        );
    }
}

/// Assert that the lookup index agrees with the merged range list.
pub fn assert_index_consistent(registry: &MergeRegistry, rows: u32, columns: u32) {
    for c in all_cells(rows, columns) {
        let covering: Vec<_> = registry
            .merged_ranges()
            .iter()
            .filter(|merged| merged.contains(c))
            .collect();
        match registry.range_covering(c) {
            Some(found) => {
                assert_eq!(covering, vec![&found], "index for {c} disagrees with list");
            }
            None => assert!(covering.is_empty(), "{c} is merged but not indexed"),
        }
    }
}
