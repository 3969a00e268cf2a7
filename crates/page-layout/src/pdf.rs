//! PDF rendering of packed label pages.

use std::io::{BufWriter, Cursor};

use image::DynamicImage;
use printpdf::{
    ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Px,
};
use tracing::debug;

use crate::packer::{Page, PageSpec};
use crate::{LayoutError, Result};

const PT_PER_INCH: f32 = 72.0;
const MM_PER_PT: f32 = 25.4 / 72.0;

/// Render packed pages into a single PDF document.
///
/// Each placement is embedded as an RGB image; its DPI is chosen so the
/// raster lands at exactly the placed width in points, which also yields
/// the placed height because packing preserved the aspect ratio. With no
/// pages the result is still a valid document (one blank page).
pub fn render_pdf(pages: &[Page], page_spec: PageSpec, title: &str) -> Result<Vec<u8>> {
    let page_w = Mm(page_spec.width * MM_PER_PT);
    let page_h = Mm(page_spec.height * MM_PER_PT);

    let (doc, first_page, first_layer) = PdfDocument::new(title, page_w, page_h, "labels");

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = doc.add_page(page_w, page_h, "labels");
            doc.get_page(page_idx).get_layer(layer_idx)
        };

        for placement in &page.placements {
            let rgb = DynamicImage::ImageRgba8(placement.image.clone()).to_rgb8();
            let (px_w, px_h) = rgb.dimensions();

            let image = Image::from(ImageXObject {
                width: Px(px_w as usize),
                height: Px(px_h as usize),
                color_space: ColorSpace::Rgb,
                bits_per_component: ColorBits::Bit8,
                interpolate: false,
                image_data: rgb.into_raw(),
                image_filter: None,
                clipping_bbox: None,
                smask: None,
            });

            let dpi = px_w as f32 / (placement.width / PT_PER_INCH);
            image.add_to_layer(
                layer.clone(),
                ImageTransform {
                    translate_x: Some(Mm(placement.x * MM_PER_PT)),
                    translate_y: Some(Mm(placement.y * MM_PER_PT)),
                    dpi: Some(dpi),
                    ..Default::default()
                },
            );
        }
    }

    let mut writer = BufWriter::new(Cursor::new(Vec::new()));
    doc.save(&mut writer)
        .map_err(|e| LayoutError::Pdf(e.to_string()))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| LayoutError::Pdf(e.to_string()))?
        .into_inner();

    debug!(bytes = bytes.len(), pages = pages.len(), "rendered label PDF");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LayoutOptions, packer};
    use image::{Rgba, RgbaImage};

    #[test]
    fn renders_a_pdf_document() {
        let labels = vec![
            RgbaImage::from_pixel(40, 60, Rgba([0, 0, 0, 255])),
            RgbaImage::from_pixel(40, 60, Rgba([0, 0, 0, 255])),
        ];
        let pages = packer::pack(labels, &LayoutOptions::default(), PageSpec::a4());
        let bytes = render_pdf(&pages, PageSpec::a4(), "Stock QR Labels").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn zero_pages_still_yield_a_valid_document() {
        let bytes = render_pdf(&[], PageSpec::a4(), "Stock QR Labels").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
