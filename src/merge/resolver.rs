//! Turning a raw drag into a canonical selection that never splits a merge.

use super::MergeRegistry;
use crate::types::{CellRange, GridCoordinate};

/// Canonical range spanned by a drag from `anchor` to `pointer`.
pub fn normalize_drag(anchor: GridCoordinate, pointer: GridCoordinate) -> CellRange {
    CellRange::normalize(anchor, pointer)
}

/// Grow `candidate` until it fully contains every merged range it touches.
///
/// Growing can expose merges that the smaller rectangle did not reach, so the
/// union is repeated until a pass adds nothing. Every growing pass swallows at
/// least one merge that was not yet contained, which caps the loop at
/// `registry.len() + 1` passes.
pub fn expand_to_merges(candidate: CellRange, registry: &MergeRegistry) -> CellRange {
    let max_passes = registry.len() + 1;
    let mut result = candidate;

    for _ in 0..max_passes {
        let grown = registry
            .ranges_overlapping(result)
            .fold(result, |acc, merged| acc.union(&merged));
        if grown == result {
            return result;
        }
        result = grown;
    }

    tracing::warn!(
        candidate = %candidate,
        result = %result,
        max_passes,
        "merge expansion did not settle"
    );
    result
}

/// Normalize a drag and expand it against the registry.
pub fn resolve(
    anchor: GridCoordinate,
    pointer: GridCoordinate,
    registry: &MergeRegistry,
) -> CellRange {
    expand_to_merges(normalize_drag(anchor, pointer), registry)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn range(a1: &str) -> CellRange {
        a1.parse().unwrap()
    }

    fn registry(merges: &[&str]) -> MergeRegistry {
        merges.iter().map(|a1| range(a1)).collect()
    }

    #[test]
    fn no_merges_leaves_candidate_alone() {
        let empty = MergeRegistry::new();
        assert_eq!(expand_to_merges(range("B2:D4"), &empty), range("B2:D4"));
    }

    #[test_case("C3", "B2:C3" ; "single cell inside merge")]
    #[test_case("A1:B2", "A1:C3" ; "corner touch")]
    #[test_case("D4:E5", "D4:E5" ; "disjoint")]
    #[test_case("A1:E5", "A1:E5" ; "already contains merge")]
    fn expands_against_one_merge(candidate: &str, expected: &str) {
        let merges = registry(&["B2:C3"]);
        assert_eq!(expand_to_merges(range(candidate), &merges), range(expected));
    }

    #[test]
    fn expansion_follows_chains() {
        let merges = registry(&["B1:C2", "D2:D6"]);
        assert_eq!(expand_to_merges(range("A1:B1"), &merges), range("A1:C2"));
        assert_eq!(expand_to_merges(range("C2"), &merges), range("B1:C2"));
        assert_eq!(expand_to_merges(range("B2:D2"), &merges), range("B1:D6"));

        let staircase = registry(&["A1:B2", "B3:C4", "C5:D6"]);
        assert_eq!(expand_to_merges(range("B2:B3"), &staircase), range("A1:C4"));
        // B4:B5 only reaches C5:D6 after absorbing B3:C4
        assert_eq!(expand_to_merges(range("B4:B5"), &staircase), range("B3:D6"));
    }

    #[test]
    fn resolved_selection_never_splits_a_merge() {
        let merges = registry(&["B2:C3", "E1:E4", "A6:D7", "F6:G6"]);
        for anchor in range("A1:G8").coordinates() {
            for pointer in [
                GridCoordinate::new(0, 0),
                GridCoordinate::new(4, 2),
                GridCoordinate::new(7, 6),
                GridCoordinate::new(2, 5),
            ] {
                let raw = normalize_drag(anchor, pointer);
                let resolved = resolve(anchor, pointer, &merges);
                assert!(resolved.contains_range(&raw));
                assert_eq!(expand_to_merges(resolved, &merges), resolved);
                for merged in merges.merged_ranges() {
                    assert!(
                        resolved.contains_range(merged) || !resolved.overlaps(merged),
                        "{resolved} splits {merged}"
                    );
                }
            }
        }
    }
}
