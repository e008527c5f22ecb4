//! Render-side helpers for the external grid renderer.
//!
//! Nothing here draws; these produce the rectangles a renderer needs so the
//! math stays testable without depending on Canvas APIs.

pub mod selection;

pub use selection::{selection_rect, SelectionRect};
