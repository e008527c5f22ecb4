//! Layout engine mapping between grid coordinates and pixels.
//!
//! This module handles:
//! - Pre-computing cell positions from column widths and row heights
//! - Binary search for the cell under a pointer position
//! - Merge-aware cell rectangles for renderers

mod grid_geometry;

pub use grid_geometry::{CellRect, GridGeometry};
