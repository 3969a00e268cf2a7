//! Per-request layout options.

use crate::{LayoutError, Result};

/// Columns-per-row values the layout accepts.
pub const ALLOWED_COLUMNS: [u32; 3] = [2, 3, 4];

/// Default columns per row.
pub const DEFAULT_COLUMNS: u32 = 3;

/// Inclusive font size bounds, in pixels.
pub const MIN_FONT_SIZE: u32 = 10;
pub const MAX_FONT_SIZE: u32 = 20;

/// Default label font size.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Layout options supplied once per generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Labels per grid row.
    pub columns_per_row: u32,

    /// Font size for the name and code text on each label.
    pub font_size: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            columns_per_row: DEFAULT_COLUMNS,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl LayoutOptions {
    /// Validate and build options from user-supplied values.
    pub fn new(columns_per_row: u32, font_size: u32) -> Result<Self> {
        if !ALLOWED_COLUMNS.contains(&columns_per_row) {
            return Err(LayoutError::InvalidColumns(columns_per_row));
        }
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&font_size) {
            return Err(LayoutError::InvalidFontSize(font_size));
        }
        Ok(Self {
            columns_per_row,
            font_size,
        })
    }
}
