//! First-page preview rendering

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::layout::GridLayout;

/// Render a downscaled raster of the first page only.
///
/// Uses the same placement arithmetic as the PDF pass, divided by
/// `scale`, and shows at most one page's worth of frames. Best-effort
/// user feedback; never authoritative for the output geometry.
pub fn render_preview(frames: &[RgbImage], grid: &GridLayout, scale: f32) -> RgbImage {
    let page_w = ((grid.page_width_pt / scale) as u32).max(1);
    let page_h = ((grid.page_height_pt / scale) as u32).max(1);
    let cell_w = ((grid.cell_width_pt / scale) as u32).max(1);
    let cell_h = ((grid.cell_height_pt / scale) as u32).max(1);

    let mut canvas = RgbImage::from_pixel(page_w, page_h, Rgb([255, 255, 255]));

    let count = frames.len().min(grid.capacity());
    for (i, frame) in frames.iter().take(count).enumerate() {
        let row = i / grid.cols;
        let col = i % grid.cols;

        let thumb = imageops::resize(frame, cell_w, cell_h, FilterType::Lanczos3);
        let x =
            ((grid.margin_pt + col as f32 * (grid.cell_width_pt + grid.gutter_pt)) / scale) as i64;
        let y =
            ((grid.margin_pt + row as f32 * (grid.cell_height_pt + grid.gutter_pt)) / scale) as i64;
        imageops::replace(&mut canvas, &thumb, x, y);
    }

    canvas
}
