//! Per-frame placement within the page sequence

use super::{GridLayout, GridPosition};

/// Where a frame lands: output page plus grid position on that page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePlacement {
    /// Output page index, 0-based
    pub page: usize,
    /// Grid position within the page
    pub pos: GridPosition,
}

/// Compute the placement for the frame at `index` in the ordered
/// sequence. Pages fill row-major from the top-left cell.
pub fn placement_for_index(index: usize, grid: &GridLayout) -> FramePlacement {
    let capacity = grid.capacity();
    let page = index / capacity;
    let within = index % capacity;

    FramePlacement {
        page,
        pos: GridPosition::new(within / grid.cols, within % grid.cols),
    }
}
