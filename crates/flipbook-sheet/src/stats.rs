//! Pre-flight statistics for a pending generate call

use crate::options::SheetOptions;
use crate::sheet::{SourceImage, is_hidden_name};
use crate::types::*;

/// Calculate the numbers a generate call over these inputs would
/// report, assuming every visible file decodes. Used for display
/// before committing to generation.
pub fn calculate_statistics(
    images: &[SourceImage],
    options: &SheetOptions,
) -> Result<SheetStatistics> {
    options.validate()?;

    let valid_images = images
        .iter()
        .filter(|image| !is_hidden_name(&image.name))
        .count();
    let skipped_hidden = images.len() - valid_images;

    if valid_images == 0 {
        return Err(SheetError::NoInput);
    }

    let capacity = options.capacity();
    let pages = (valid_images + capacity - 1) / capacity;

    Ok(SheetStatistics {
        valid_images,
        skipped_hidden,
        frames: valid_images,
        pages,
    })
}
