//! QR symbol rendering for product codes.

use image::{GrayImage, Luma};
use qrcode::{EcLevel, QrCode};

use crate::Result;

/// Pixel size of one QR module.
pub const MODULE_SCALE: u32 = 8;

/// Quiet-zone border around the symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 2;

/// Encode a product code into a black-on-white QR symbol.
///
/// Error correction is fixed at level M; module scale and quiet zone are
/// fixed too, so the symbol size depends only on the payload length. An
/// empty payload is allowed and encodes the empty string.
pub fn encode(payload: &str) -> Result<GrayImage> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let img_size = (module_count + QUIET_ZONE_MODULES * 2) * MODULE_SCALE;
    let offset = QUIET_ZONE_MODULES * MODULE_SCALE;

    let mut img = GrayImage::from_pixel(img_size, img_size, Luma([255u8]));

    for (i, color) in modules.iter().enumerate() {
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;

        if *color == qrcode::Color::Dark {
            for dx in 0..MODULE_SCALE {
                for dy in 0..MODULE_SCALE {
                    img.put_pixel(
                        offset + x * MODULE_SCALE + dx,
                        offset + y * MODULE_SCALE + dy,
                        Luma([0u8]),
                    );
                }
            }
        }
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_square_with_quiet_zone() {
        let img = encode("12345").unwrap();
        assert_eq!(img.width(), img.height());
        // version 1 is 21 modules plus 2 quiet-zone modules each side
        assert_eq!(img.width(), (21 + 4) * MODULE_SCALE);
    }

    #[test]
    fn quiet_zone_is_white() {
        let img = encode("12345").unwrap();
        assert_eq!(img.get_pixel(0, 0), &Luma([255u8]));
        let last = img.width() - 1;
        assert_eq!(img.get_pixel(last, last), &Luma([255u8]));
    }

    #[test]
    fn empty_payload_still_encodes() {
        let img = encode("").unwrap();
        assert!(img.width() > 0);
        assert_eq!(img.width(), img.height());
    }

    #[test]
    fn symbol_decodes_back_to_the_code() {
        let img = encode("STK-000123").unwrap();
        let mut search = rqrr::PreparedImage::prepare_from_greyscale(
            img.width() as usize,
            img.height() as usize,
            |x, y| img.get_pixel(x as u32, y as u32)[0],
        );
        let grids = search.detect_grids();
        assert_eq!(grids.len(), 1);
        let (_, content) = grids[0].decode().unwrap();
        assert_eq!(content, "STK-000123");
    }
}
