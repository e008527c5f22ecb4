use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::GridCoordinate;
use crate::cell_ref;
use crate::error::GridMergeError;

/// A rectangular span of grid cells in canonical form.
///
/// `from` is always the top-left corner and `to` the bottom-right one, both
/// inclusive. The only constructors normalize, so a non-canonical range cannot
/// be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellRange {
    from: GridCoordinate,
    to: GridCoordinate,
}

impl CellRange {
    /// Canonical rectangle containing both corners, whatever the drag direction.
    ///
    /// Row and column can go "backward" independently while dragging:
    /// - both behind `from`: the corners swap
    /// - only the column behind: columns swap, rows stay as given
    /// - only the row behind: rows swap, columns stay as given
    pub fn normalize(from: GridCoordinate, to: GridCoordinate) -> Self {
        let backward_col = to.column < from.column;
        let backward_row = to.row < from.row;
        let (from, to) = match (backward_row, backward_col) {
            (true, true) => (to, from),
            (false, true) => (
                GridCoordinate::new(from.row, to.column),
                GridCoordinate::new(to.row, from.column),
            ),
            (true, false) => (
                GridCoordinate::new(to.row, from.column),
                GridCoordinate::new(from.row, to.column),
            ),
            (false, false) => (from, to),
        };
        Self { from, to }
    }

    /// Range covering a single cell.
    pub fn single(cell: GridCoordinate) -> Self {
        Self { from: cell, to: cell }
    }

    pub fn from(&self) -> GridCoordinate {
        self.from
    }

    pub fn to(&self) -> GridCoordinate {
        self.to
    }

    /// `(start_row, start_col, end_row, end_col)`
    pub fn bounds(&self) -> (u32, u32, u32, u32) {
        (self.from.row, self.from.column, self.to.row, self.to.column)
    }

    pub fn contains(&self, cell: GridCoordinate) -> bool {
        (self.from.row..=self.to.row).contains(&cell.row)
            && (self.from.column..=self.to.column).contains(&cell.column)
    }

    /// True if `other` lies entirely inside this range.
    pub fn contains_range(&self, other: &CellRange) -> bool {
        self.contains(other.from) && self.contains(other.to)
    }

    /// Standard rectangle intersection: both axis intervals overlap.
    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.from.row <= other.to.row
            && other.from.row <= self.to.row
            && self.from.column <= other.to.column
            && other.from.column <= self.to.column
    }

    /// Smallest range containing both.
    #[must_use]
    pub fn union(&self, other: &CellRange) -> CellRange {
        Self {
            from: self.from.top_left(other.from),
            to: self.to.bottom_right(other.to),
        }
    }

    pub fn row_span(&self) -> u32 {
        self.to.row - self.from.row + 1
    }

    pub fn column_span(&self) -> u32 {
        self.to.column - self.from.column + 1
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.row_span()) * u64::from(self.column_span())
    }

    pub fn is_single_cell(&self) -> bool {
        self.from == self.to
    }

    /// Every coordinate in the range, row-major.
    pub fn coordinates(&self) -> impl Iterator<Item = GridCoordinate> {
        let (start_row, start_col, end_row, end_col) = self.bounds();
        (start_row..=end_row)
            .flat_map(move |row| (start_col..=end_col).map(move |col| GridCoordinate::new(row, col)))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_cell() {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}:{}", self.from, self.to)
        }
    }
}

impl FromStr for CellRange {
    type Err = GridMergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        cell_ref::parse_cell_range(s).ok_or_else(|| GridMergeError::CellRef(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for CellRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawRange {
            from: GridCoordinate,
            to: GridCoordinate,
        }

        let raw = RawRange::deserialize(deserializer)?;
        Ok(CellRange::normalize(raw.from, raw.to))
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
    use test_case::test_case;

    fn c(row: u32, column: u32) -> GridCoordinate {
        GridCoordinate::new(row, column)
    }

    #[test_case(c(1, 1), c(3, 3) ; "down right")]
    #[test_case(c(3, 3), c(1, 1) ; "up left")]
    #[test_case(c(1, 3), c(3, 1) ; "down left")]
    #[test_case(c(3, 1), c(1, 3) ; "up right")]
    fn normalize_any_direction(from: GridCoordinate, to: GridCoordinate) {
        let range = CellRange::normalize(from, to);
        assert_eq!(range.from(), c(1, 1));
        assert_eq!(range.to(), c(3, 3));
    }

    #[test]
    fn normalize_matches_per_axis_min_max() {
        for a_row in 0..5 {
            for a_col in 0..5 {
                for b_row in 0..5 {
                    for b_col in 0..5 {
                        let (a, b) = (c(a_row, a_col), c(b_row, b_col));
                        let range = CellRange::normalize(a, b);
                        assert_eq!(range, CellRange::normalize(b, a));
                        assert_eq!(range.from(), a.top_left(b));
                        assert_eq!(range.to(), a.bottom_right(b));
                    }
                }
            }
        }
    }

    #[test]
    fn contains_is_inclusive() {
        let range = CellRange::normalize(c(1, 1), c(2, 3));
        assert!(range.contains(c(1, 1)));
        assert!(range.contains(c(2, 3)));
        assert!(range.contains(c(2, 2)));
        assert!(!range.contains(c(0, 1)));
        assert!(!range.contains(c(1, 4)));
    }

    #[test]
    fn overlaps_requires_both_axes() {
        let range = CellRange::normalize(c(1, 1), c(2, 2));
        assert!(range.overlaps(&CellRange::single(c(2, 2))));
        assert!(range.overlaps(&CellRange::normalize(c(0, 0), c(5, 5))));
        assert!(!range.overlaps(&CellRange::normalize(c(3, 0), c(4, 2))));
        // Column intervals overlap, rows do not
        assert!(!range.overlaps(&CellRange::normalize(c(0, 1), c(0, 2))));
    }

    #[test]
    fn union_and_spans() {
        let a = CellRange::normalize(c(0, 0), c(1, 1));
        let b = CellRange::normalize(c(3, 2), c(4, 4));
        let u = a.union(&b);
        assert_eq!(u.bounds(), (0, 0, 4, 4));
        assert!(u.contains_range(&a) && u.contains_range(&b));
        assert_eq!(u.row_span(), 5);
        assert_eq!(u.column_span(), 5);
        assert_eq!(u.cell_count(), 25);
    }

    #[test]
    fn coordinates_are_row_major() {
        let range = CellRange::normalize(c(1, 1), c(2, 2));
        let cells: Vec<_> = range.coordinates().collect();
        assert_eq!(cells, vec![c(1, 1), c(1, 2), c(2, 1), c(2, 2)]);
    }

    #[test]
    fn display_and_parse_a1() {
        let range: CellRange = "C3:B2".parse().unwrap();
        assert_eq!(range.bounds(), (1, 1, 2, 2));
        assert_eq!(range.to_string(), "B2:C3");
        assert_eq!(CellRange::single(c(0, 0)).to_string(), "A1");
        assert!("not a range".parse::<CellRange>().is_err());
    }

    #[test]
    fn deserialize_normalizes() {
        let json = r#"{"from":{"row":3,"column":3},"to":{"row":1,"column":1}}"#;
        let range: CellRange = serde_json::from_str(json).unwrap();
        assert_eq!(range.bounds(), (1, 1, 3, 3));
    }
}
