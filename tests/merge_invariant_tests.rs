//! Invariants of normalization, expansion and the merge registry.
//!
//! Checked exhaustively over small grids rather than sampled.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::{
    a1, all_cells, assert_index_consistent, assert_no_split_merge, cell, range, registry_of,
};
use gridmerge::{expand_to_merges, normalize_drag, CellRange, MergeRegistry};
use test_case::test_case;

const ROWS: u32 = 6;
const COLUMNS: u32 = 5;

fn layouts() -> Vec<MergeRegistry> {
    vec![
        MergeRegistry::new(),
        registry_of(&["B2:C3"]),
        registry_of(&["A1:A6", "C1:E1", "C3:D4"]),
        registry_of(&["B1:B2", "C2:C3", "D3:D4", "A5:E5"]),
        registry_of(&["A1", "E6", "B3:D3"]),
    ]
}

// ============================================================================
// NORMALIZATION
// ============================================================================

#[test]
fn test_normalize_is_direction_independent_and_canonical() {
    for a in all_cells(ROWS, COLUMNS) {
        for b in all_cells(ROWS, COLUMNS) {
            let forward = normalize_drag(a, b);
            assert_eq!(forward, normalize_drag(b, a));
            assert!(forward.from().row <= forward.to().row);
            assert!(forward.from().column <= forward.to().column);
            assert!(forward.contains(a) && forward.contains(b));
            // Idempotent
            assert_eq!(CellRange::normalize(forward.from(), forward.to()), forward);
        }
    }
}

// ============================================================================
// EXPANSION
// ============================================================================

#[test]
fn test_expansion_properties_hold_for_every_drag() {
    for registry in layouts() {
        for a in all_cells(ROWS, COLUMNS) {
            for b in all_cells(ROWS, COLUMNS) {
                let raw = normalize_drag(a, b);
                let expanded = expand_to_merges(raw, &registry);

                assert!(expanded.contains_range(&raw), "{expanded} shrank {raw}");
                assert_eq!(
                    expand_to_merges(expanded, &registry),
                    expanded,
                    "{expanded} is not a fixed point"
                );
                assert_no_split_merge(expanded, &registry);
            }
        }
    }
}

#[test]
fn test_expansion_is_smallest_valid_rectangle() {
    // Any rectangle containing the drag that splits no merge must contain the expansion
    let registry = registry_of(&["B1:B2", "C2:C3", "D3:D4", "A5:E5"]);
    let raw = a1("B1");
    let expanded = expand_to_merges(raw, &registry);
    assert_eq!(expanded, a1("B1:B2"));

    for a in all_cells(ROWS, COLUMNS) {
        for b in all_cells(ROWS, COLUMNS) {
            let other = normalize_drag(a, b);
            let splits = registry
                .merged_ranges()
                .iter()
                .any(|m| other.overlaps(m) && !other.contains_range(m));
            if other.contains_range(&raw) && !splits {
                assert!(other.contains_range(&expanded), "{other} is smaller than {expanded}");
            }
        }
    }
}

#[test_case("B2:C2", "B1:C3" ; "adjacent steps")]
#[test_case("D4", "D3:D4" ; "single step")]
#[test_case("A4", "A4" ; "untouched cell")]
#[test_case("A4:A5", "A1:E5" ; "bottom bar climbs the staircase")]
fn test_staircase_layout(candidate: &str, expected: &str) {
    let registry = registry_of(&["B1:B2", "C2:C3", "D3:D4", "A5:E5"]);
    assert_eq!(expand_to_merges(a1(candidate), &registry), a1(expected));
}

// ============================================================================
// REGISTRY
// ============================================================================

#[test]
fn test_every_merged_cell_resolves_to_its_range() {
    let registry = registry_of(&["A1:A6", "C1:E1", "C3:D4"]);
    for merged in registry.merged_ranges() {
        for c in merged.coordinates() {
            assert_eq!(registry.range_covering(c), Some(*merged));
        }
    }
    assert_eq!(registry.range_covering(cell(1, 1)), None);
    assert_index_consistent(&registry, ROWS, COLUMNS);
}

#[test]
fn test_overlapping_merges_keep_index_consistent() {
    let mut registry = MergeRegistry::new();
    for (from, to) in [
        ((0, 0), (1, 1)),
        ((1, 1), (2, 3)),
        ((4, 0), (5, 0)),
        ((3, 0), (4, 1)),
        ((5, 3), (0, 4)),
    ] {
        let merged = registry.merge(range(from, to));
        assert!(merged.contains_range(&range(from, to)));
        assert_index_consistent(&registry, ROWS, COLUMNS);
    }
    // The last merge spans every row and reaches both earlier merges
    assert_eq!(registry.merged_ranges(), &[a1("A1:E6")]);
}

#[test]
fn test_remerging_the_same_range_is_idempotent() {
    let mut registry = registry_of(&["B2:C3", "E1:E2"]);
    let again = registry.merge(a1("B2:C3"));
    assert_eq!(again, a1("B2:C3"));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.merged_ranges(), &[a1("B2:C3"), a1("E1:E2")]);
    assert_index_consistent(&registry, ROWS, COLUMNS);
}
