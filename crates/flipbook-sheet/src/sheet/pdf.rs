//! PDF assembly: painting the processed frames onto grid pages

use ::image::RgbImage;
use printpdf::*;

use crate::layout::{GridLayout, cell_bounds, placement_for_index};
use crate::options::SheetOptions;
use crate::types::{Result, SheetError};

pub(crate) fn render_document(
    frames: &[RgbImage],
    grid: &GridLayout,
    options: &SheetOptions,
) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new("Flipbook Sheets");
    doc.metadata.info.creator = "flipbook-sheet".to_string();

    let capacity = grid.capacity();
    let mut pages = Vec::new();

    for (page_index, chunk) in frames.chunks(capacity).enumerate() {
        let mut ops = Vec::new();

        for (i, frame) in chunk.iter().enumerate() {
            let placement = placement_for_index(page_index * capacity + i, grid);
            let bounds = cell_bounds(grid, placement.pos);

            let jpeg = encode_jpeg(frame, options.jpeg_quality)?;
            let mut warnings = Vec::new();
            let raw = RawImage::decode_from_bytes(&jpeg, &mut warnings)
                .map_err(|e| SheetError::Pdf(format!("Failed to embed frame: {}", e)))?;
            let image_id = doc.add_image(&raw);

            // At 72 dpi one pixel is one point; the residual scale
            // absorbs the truncation from sizing frames in whole pixels.
            ops.push(Op::UseXobject {
                id: image_id,
                transform: XObjectTransform {
                    translate_x: Some(Pt(bounds.x)),
                    translate_y: Some(Pt(bounds.y)),
                    rotate: None,
                    scale_x: Some(bounds.width / frame.width() as f32),
                    scale_y: Some(bounds.height / frame.height() as f32),
                    dpi: Some(72.0),
                },
            });
        }

        pages.push(PdfPage::new(
            Mm::from(Pt(grid.page_width_pt)),
            Mm::from(Pt(grid.page_height_pt)),
            ops,
        ));
    }

    doc.pages = pages;

    let mut warnings = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

fn encode_jpeg(frame: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = ::image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality);
    frame.write_with_encoder(encoder)?;
    Ok(buf)
}
