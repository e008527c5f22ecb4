//! The set of merged ranges and the per-cell lookup index built from it.

use std::collections::HashMap;

use super::resolver::expand_to_merges;
use crate::types::{CellRange, GridCoordinate};

/// Merged ranges of one grid, in merge order, plus a coordinate index.
///
/// The list and the index are two views of the same fact and are only ever
/// changed together by [`MergeRegistry::merge`]. Merged ranges are pairwise
/// disjoint and every merged cell maps to exactly one range.
#[derive(Debug, Clone, Default)]
pub struct MergeRegistry {
    merged_ranges: Vec<CellRange>,
    cell_to_range: HashMap<GridCoordinate, CellRange>,
}

impl MergeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `range` as a merged cell and index every coordinate it covers.
    ///
    /// A range touching existing merges is first grown until it contains each of
    /// them entirely; the merges it swallows are superseded by the grown range.
    /// For a range disjoint from every existing merge this is a plain append.
    ///
    /// Returns the range actually recorded. Merging a range that is already
    /// recorded leaves the registry untouched.
    pub fn merge(&mut self, range: CellRange) -> CellRange {
        let merged = expand_to_merges(range, self);

        // Merges are disjoint, so an equal merge is the only one `merged` touches.
        if self.merged_ranges.contains(&merged) {
            tracing::debug!(requested = %range, merged = %merged, "range already merged");
            return merged;
        }

        let before = self.merged_ranges.len();
        self.merged_ranges
            .retain(|existing| !merged.contains_range(existing));
        let absorbed = before - self.merged_ranges.len();

        // Absorbed ranges lie inside `merged`, so this overwrites all their entries.
        for cell in merged.coordinates() {
            self.cell_to_range.insert(cell, merged);
        }
        self.merged_ranges.push(merged);

        tracing::debug!(
            requested = %range,
            merged = %merged,
            absorbed,
            total = self.merged_ranges.len(),
            "merged cell range"
        );
        merged
    }

    /// The merged range containing `cell`, if any.
    pub fn range_covering(&self, cell: GridCoordinate) -> Option<CellRange> {
        self.cell_to_range.get(&cell).copied()
    }

    /// True if `cell` is the top-left cell of a merge.
    pub fn is_merge_origin(&self, cell: GridCoordinate) -> bool {
        self.range_covering(cell)
            .is_some_and(|range| range.from() == cell)
    }

    /// Merged ranges in the order they were recorded.
    pub fn merged_ranges(&self) -> &[CellRange] {
        &self.merged_ranges
    }

    /// Merged ranges that intersect `range`.
    pub fn ranges_overlapping(&self, range: CellRange) -> impl Iterator<Item = CellRange> + '_ {
        self.merged_ranges
            .iter()
            .copied()
            .filter(move |merged| merged.overlaps(&range))
    }

    pub fn len(&self) -> usize {
        self.merged_ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merged_ranges.is_empty()
    }
}

impl FromIterator<CellRange> for MergeRegistry {
    fn from_iter<I: IntoIterator<Item = CellRange>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<CellRange> for MergeRegistry {
    fn extend<I: IntoIterator<Item = CellRange>>(&mut self, iter: I) {
        for range in iter {
            self.merge(range);
        }
    }
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

    fn range(a1: &str) -> CellRange {
        a1.parse().unwrap()
    }

    #[test]
    fn merge_indexes_every_covered_cell() {
        let mut registry = MergeRegistry::new();
        let merged = registry.merge(range("B2:C3"));
        assert_eq!(merged, range("B2:C3"));

        for cell in merged.coordinates() {
            assert_eq!(registry.range_covering(cell), Some(merged));
        }
        assert_eq!(registry.range_covering(GridCoordinate::new(0, 0)), None);
        assert_eq!(registry.range_covering(GridCoordinate::new(3, 1)), None);
        assert_eq!(registry.merged_ranges(), &[merged]);
    }

    #[test]
    fn disjoint_merges_append_in_order() {
        let registry: MergeRegistry = [range("A1:B1"), range("D4:D6"), range("F1")]
            .into_iter()
            .collect();
        assert_eq!(
            registry.merged_ranges(),
            &[range("A1:B1"), range("D4:D6"), range("F1")]
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn merge_origin_is_top_left() {
        let mut registry = MergeRegistry::new();
        registry.merge(range("B2:C3"));
        assert!(registry.is_merge_origin(GridCoordinate::new(1, 1)));
        assert!(!registry.is_merge_origin(GridCoordinate::new(2, 2)));
        assert!(!registry.is_merge_origin(GridCoordinate::new(0, 0)));
    }

    #[test]
    fn overlapping_merge_absorbs_existing_ranges() {
        let mut registry = MergeRegistry::new();
        registry.merge(range("B2:C3"));
        registry.merge(range("E2:E5"));

        // Touches B2:C3 only at C3; grows to cover it entirely
        let merged = registry.merge(range("C3:D4"));
        assert_eq!(merged, range("B2:D4"));
        assert_eq!(registry.merged_ranges(), &[range("E2:E5"), range("B2:D4")]);

        for cell in range("B2:C3").coordinates() {
            assert_eq!(registry.range_covering(cell), Some(merged));
        }
        assert_eq!(
            registry.range_covering(GridCoordinate::new(4, 4)),
            Some(range("E2:E5"))
        );
    }

    #[test]
    fn absorbing_chains_through_neighbours() {
        let mut registry = MergeRegistry::new();
        registry.merge(range("A1:B3"));
        registry.merge(range("C3:D4"));

        // B1:C1 pulls in A1:B3, whose union then touches C3:D4
        let merged = registry.merge(range("B1:C1"));
        assert_eq!(merged, range("A1:D4"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remerging_keeps_merge_order() {
        let mut registry: MergeRegistry = [range("A1:B2"), range("E5:F6")].into_iter().collect();
        assert_eq!(registry.merge(range("A1:B2")), range("A1:B2"));
        // A drag inside an existing merge expands to exactly that merge
        assert_eq!(registry.merge(range("B2")), range("A1:B2"));
        assert_eq!(registry.merged_ranges(), &[range("A1:B2"), range("E5:F6")]);
    }

    #[test]
    fn merged_ranges_stay_disjoint() {
        let mut registry = MergeRegistry::new();
        for a1 in ["A1:B2", "B2:C4", "E1:E3", "D3:E3", "A6:C6", "C5:C7"] {
            registry.merge(range(a1));
        }
        let ranges = registry.merged_ranges();
        for (i, a) in ranges.iter().enumerate() {
            for b in ranges.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{a} overlaps {b}");
            }
        }
    }
}
