//! Grid layout calculation
//!
//! Derives cell dimensions from the page size, margins, and grid shape,
//! and maps grid positions to cell bounds on the page.

use crate::options::SheetOptions;
use crate::types::{Result, SheetError};

use super::mm_to_pt;
use super::{GridLayout, GridPosition, Rect};

/// Create a grid layout for the given options.
///
/// Fails with a configuration error when the requested grid does not
/// leave positive cell dimensions on the page.
pub fn create_grid_layout(options: &SheetOptions) -> Result<GridLayout> {
    let (page_width_mm, page_height_mm) = options
        .paper_size
        .dimensions_with_orientation(options.orientation);

    let page_width_pt = mm_to_pt(page_width_mm);
    let page_height_pt = mm_to_pt(page_height_mm);
    let margin_pt = mm_to_pt(options.margin_mm);
    let gutter_pt = mm_to_pt(options.gutter_mm);

    let cols = options.columns;
    let rows = options.rows;

    let cell_width_pt =
        (page_width_pt - 2.0 * margin_pt - (cols - 1) as f32 * gutter_pt) / cols as f32;
    let cell_height_pt =
        (page_height_pt - 2.0 * margin_pt - (rows - 1) as f32 * gutter_pt) / rows as f32;

    if cell_width_pt <= 0.0 || cell_height_pt <= 0.0 {
        return Err(SheetError::Config(format!(
            "{}x{} grid does not fit on a {:.0}x{:.0} pt page with the given margins",
            cols, rows, page_width_pt, page_height_pt
        )));
    }

    Ok(GridLayout {
        cols,
        rows,
        page_width_pt,
        page_height_pt,
        margin_pt,
        gutter_pt,
        cell_width_pt,
        cell_height_pt,
    })
}

/// Calculate the bounds of the cell at the given grid position.
///
/// Coordinates are in PDF points with a bottom-left page origin; row 0
/// is the top row, so the y calculation counts down from the top edge.
pub fn cell_bounds(grid: &GridLayout, pos: GridPosition) -> Rect {
    let cell_x = grid.margin_pt + pos.col as f32 * (grid.cell_width_pt + grid.gutter_pt);
    let cell_y = grid.page_height_pt
        - grid.margin_pt
        - grid.cell_height_pt
        - pos.row as f32 * (grid.cell_height_pt + grid.gutter_pt);

    Rect::new(cell_x, cell_y, grid.cell_width_pt, grid.cell_height_pt)
}
