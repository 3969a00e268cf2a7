//! Label composition: wrapped name, code line, QR symbol, stacked and
//! centered on a white canvas.

use ab_glyph::{Font, PxScale};
use image::{DynamicImage, RgbaImage};

use crate::text;
use crate::{Result, qr};

/// Substituted for empty or whitespace-only product names.
pub const NO_NAME_PLACEHOLDER: &str = "(no name)";

/// Total horizontal canvas margin around the widest element.
const H_MARGIN: u32 = 20;

/// Gap between the code line and the QR symbol.
const TEXT_BLOCK_GAP: u32 = 10;

/// Top and bottom canvas padding.
const V_PAD: u32 = 10;

/// Compose one product label.
///
/// Layout, top to bottom: wrapped name lines, the code string, the QR
/// symbol. Each element is centered independently. The canvas is sized to
/// the widest element plus margin, so nothing clips. Unusual input never
/// fails the row: an empty name becomes [`NO_NAME_PLACEHOLDER`], an empty
/// code encodes an empty payload.
pub fn compose<F: Font>(code: &str, name: &str, font: &F, font_size: f32) -> Result<RgbaImage> {
    let qr_img = qr::encode(code)?;
    let (qr_w, qr_h) = qr_img.dimensions();

    let name = name.trim();
    let display_name = if name.is_empty() { NO_NAME_PLACEHOLDER } else { name };
    let lines = text::wrap_name(display_name);

    let scale = PxScale::from(font_size);
    let lh = text::line_height(font, scale);

    let max_line_width = lines
        .iter()
        .map(|line| text::measure_text_width(font, scale, line))
        .max()
        .unwrap_or(0);
    let code_width = text::measure_text_width(font, scale, code);

    let width = qr_w.max(max_line_width).max(code_width) + H_MARGIN;
    let text_block_height = (lines.len() as u32 + 1) * lh + TEXT_BLOCK_GAP;
    let height = qr_h + text_block_height + V_PAD * 2;

    let mut canvas = text::blank_canvas(width, height);

    let mut y = V_PAD;
    for line in &lines {
        text::draw_centered_text(&mut canvas, font, scale, y as i32, line);
        y += lh;
    }
    text::draw_centered_text(&mut canvas, font, scale, y as i32, code);
    y += lh + TEXT_BLOCK_GAP;

    let qr_rgba = DynamicImage::ImageLuma8(qr_img).to_rgba8();
    image::imageops::overlay(&mut canvas, &qr_rgba, ((width - qr_w) / 2) as i64, y as i64);

    Ok(canvas)
}
