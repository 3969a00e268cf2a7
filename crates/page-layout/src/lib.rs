//! Page packing and PDF rendering for label sheets.
//!
//! Takes the raster labels produced by the label engine, tiles them into a
//! fixed-size page grid (column wrap, row drop, pagination), and renders
//! the packed pages into a single PDF document.

pub mod options;
pub mod packer;
pub mod pdf;

// Re-exports for convenience
pub use options::LayoutOptions;
pub use packer::{Page, PageSpec, Placement, pack};
pub use pdf::render_pdf;

/// Errors that can occur during layout or PDF rendering.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("columns per row must be 2, 3 or 4 (got {0})")]
    InvalidColumns(u32),

    #[error("font size must be between 10 and 20 (got {0})")]
    InvalidFontSize(u32),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
