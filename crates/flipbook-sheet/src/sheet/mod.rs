//! Sheet generation - arranging images into printable grid pages
//!
//! This module orchestrates one generate pass:
//! 1. Stage inputs, dropping hidden files
//! 2. Order the sequence with the chosen sort strategy
//! 3. Crop and resize every image to the cell size
//! 4. Paint pages into the PDF and render the first-page preview

mod intake;
mod pdf;

pub use intake::{SourceImage, load_source_images};

pub(crate) use intake::is_hidden_name;

use image::RgbImage;
use log::{info, warn};

use crate::frame::prepare_frame;
use crate::layout::create_grid_layout;
use crate::options::SheetOptions;
use crate::preview::render_preview;
use crate::sort::sort_by_strategy;
use crate::types::*;

/// Result of one generate pass
#[derive(Debug, Clone)]
pub struct SheetOutput {
    /// The finished PDF
    pub pdf_bytes: Vec<u8>,
    /// Low-resolution raster of the first page
    pub preview: RgbImage,
    pub stats: SheetStatistics,
}

/// Generate the grid-sheet PDF and first-page preview from a set of
/// named image blobs.
pub async fn generate(images: &[SourceImage], options: &SheetOptions) -> Result<SheetOutput> {
    options.validate()?;

    let images = images.to_vec();
    let options = options.clone();

    tokio::task::spawn_blocking(move || generate_sync(&images, &options)).await?
}

fn generate_sync(images: &[SourceImage], options: &SheetOptions) -> Result<SheetOutput> {
    // The staging directory lives for the scope of this call; dropping
    // it removes the copies on success and error paths alike.
    let staged = intake::stage_inputs(images)?;
    if staged.paths.is_empty() {
        return Err(SheetError::NoInput);
    }

    let grid = create_grid_layout(options)?;
    let (cell_w, cell_h) = grid.cell_pixel_size();

    let mut paths = staged.paths.clone();
    sort_by_strategy(&mut paths, options.sort_strategy);

    let mut frames = Vec::with_capacity(paths.len());
    for path in &paths {
        match image::open(path) {
            Ok(img) => frames.push(prepare_frame(&img, cell_w, cell_h)),
            Err(e) => warn!("Skipping undecodable image {}: {}", path.display(), e),
        }
    }
    if frames.is_empty() {
        return Err(SheetError::NoFrames);
    }

    let preview = render_preview(&frames, &grid, options.preview_scale);
    let pdf_bytes = pdf::render_document(&frames, &grid, options)?;

    let capacity = grid.capacity();
    let pages = (frames.len() + capacity - 1) / capacity;
    info!("Placed {} frames across {} pages", frames.len(), pages);

    Ok(SheetOutput {
        pdf_bytes,
        preview,
        stats: SheetStatistics {
            valid_images: staged.paths.len(),
            skipped_hidden: staged.skipped_hidden,
            frames: frames.len(),
            pages,
        },
    })
}
