//! Grid geometry for sheet layout
//!
//! Everything here is pure arithmetic: cell sizing from the page and
//! grid shape, per-index placement, and cell bounds in PDF points.

mod grid;
mod placement;
mod types;

pub use grid::{cell_bounds, create_grid_layout};
pub use placement::{FramePlacement, placement_for_index};
pub use types::{GridLayout, GridPosition, Rect};

/// Convert millimeters to points
pub(crate) fn mm_to_pt(mm: f32) -> f32 {
    mm * 2.83465
}
