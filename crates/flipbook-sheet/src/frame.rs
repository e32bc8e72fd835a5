//! Frame preparation: center-crop to the cell aspect ratio, then
//! resample down to the exact cell size.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

/// Convert an arbitrary image into a cell-sized frame.
///
/// The retained region is the largest centered crop matching the cell's
/// aspect ratio, so content is never distorted; alpha and non-RGB color
/// models are flattened to RGB8 first. The result is always exactly
/// `cell_width` x `cell_height` pixels, for any source of at least 1x1.
pub fn prepare_frame(img: &DynamicImage, cell_width: u32, cell_height: u32) -> RgbImage {
    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());

    let target_ratio = cell_width as f32 / cell_height as f32;
    let source_ratio = width as f32 / height as f32;

    let cropped = if source_ratio < target_ratio {
        // Source is taller than the cell: keep full width, trim height
        // evenly top and bottom (integer-truncated)
        let new_height = ((width as f32 / target_ratio) as u32).clamp(1, height);
        let top = (height - new_height) / 2;
        imageops::crop_imm(&rgb, 0, top, width, new_height).to_image()
    } else {
        // Source is wider: keep full height, trim width evenly
        let new_width = ((height as f32 * target_ratio) as u32).clamp(1, width);
        let left = (width - new_width) / 2;
        imageops::crop_imm(&rgb, left, 0, new_width, height).to_image()
    };

    imageops::resize(&cropped, cell_width, cell_height, FilterType::Lanczos3)
}
