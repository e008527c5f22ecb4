use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell_ref;
use crate::error::GridMergeError;

/// Address of a single grid cell, 0-indexed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GridCoordinate {
    pub row: u32,
    pub column: u32,
}

impl GridCoordinate {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Component-wise minimum: the top-left corner of the two.
    #[must_use]
    pub fn top_left(self, other: Self) -> Self {
        Self::new(self.row.min(other.row), self.column.min(other.column))
    }

    /// Component-wise maximum: the bottom-right corner of the two.
    #[must_use]
    pub fn bottom_right(self, other: Self) -> Self {
        Self::new(self.row.max(other.row), self.column.max(other.column))
    }
}

impl From<(u32, u32)> for GridCoordinate {
    /// Builds a coordinate from a `(row, column)` pair.
    fn from((row, column): (u32, u32)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cell_ref::format_cell_ref(*self))
    }
}

impl FromStr for GridCoordinate {
    type Err = GridMergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        cell_ref::parse_cell_ref(s).ok_or_else(|| GridMergeError::CellRef(s.to_string()))
    }
}
