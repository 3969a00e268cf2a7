//! Label composition for printable QR inventory labels.
//!
//! Turns one (code, name) pair into a self-contained raster label: the
//! wrapped product name on top, the code string below it, and a scannable
//! QR symbol at the bottom, everything horizontally centered on a white
//! canvas sized to fit.

pub mod font;
pub mod label;
pub mod qr;
pub mod text;

// Re-exports for convenience
pub use font::resolve_font;
pub use label::compose;

/// Errors that can occur while composing a label.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("QR encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("no usable label font found (set LABEL_FONT_PATH or install system fonts)")]
    NoUsableFont,

    #[error("invalid font data: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for label operations.
pub type Result<T> = std::result::Result<T, LabelError>;
