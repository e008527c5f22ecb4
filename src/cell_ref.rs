//! Utilities for parsing and formatting A1-style cell references and ranges.

use crate::types::{CellRange, GridCoordinate};

/// Parse a cell reference like "B3" into a 0-indexed coordinate (row 2, column 1).
///
/// `$` anchors are ignored. Letters must precede digits and the row must be at
/// least 1.
pub fn parse_cell_ref(cell_ref: &str) -> Option<GridCoordinate> {
    let mut col: u32 = 0;
    let mut row: u32 = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for b in cell_ref.trim().bytes() {
        if b == b'$' {
            continue;
        }
        if b.is_ascii_alphabetic() {
            if saw_row {
                return None;
            }
            let upper = b.to_ascii_uppercase();
            col = col
                .checked_mul(26)?
                .checked_add(u32::from(upper - b'A') + 1)?;
            saw_col = true;
        } else if b.is_ascii_digit() {
            row = row.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row || row == 0 {
        return None;
    }

    Some(GridCoordinate::new(row - 1, col - 1))
}

/// Parse a range like "A1:B10" or a single cell "A1", normalizing reversed corners.
pub fn parse_cell_range(range: &str) -> Option<CellRange> {
    if let Some((start, end)) = range.split_once(':') {
        let start = parse_cell_ref(start)?;
        let end = parse_cell_ref(end)?;
        Some(CellRange::normalize(start, end))
    } else {
        parse_cell_ref(range).map(CellRange::single)
    }
}

/// Convert a 0-indexed column to its letters (0 -> "A", 26 -> "AA").
pub fn column_letters(col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = u64::from(col) + 1;
    while n > 0 {
        n -= 1;
        // n % 26 < 26, always fits
        letters.push(b'A' + u8::try_from(n % 26).unwrap_or(0));
        n /= 26;
    }
    letters.iter().rev().map(|&b| char::from(b)).collect()
}

/// Format a coordinate as an A1 reference.
pub fn format_cell_ref(cell: GridCoordinate) -> String {
    format!("{}{}", column_letters(cell.column), u64::from(cell.row) + 1)
}
