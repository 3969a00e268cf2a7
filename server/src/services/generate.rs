//! The sheet-to-PDF pipeline: parse rows, compose one label per row, pack
//! the labels into pages, render the document.

use tracing::info;

use label_engine::LabelError;
use page_layout::{LayoutError, LayoutOptions, PageSpec};
use sheet_loader::SheetError;

use crate::app::SharedState;

/// PDF document title.
const DOC_TITLE: &str = "Stock QR Labels";

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error(transparent)]
    Label(#[from] LabelError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Run one generation request to completion.
///
/// Fatal input problems (unreadable sheet, missing columns) abort before
/// any label work; per-row anomalies (empty name, empty code) degrade
/// inside the composer and never interrupt the batch.
pub fn generate_pdf(
    state: &SharedState,
    sheet: &[u8],
    opts: &LayoutOptions,
) -> Result<Vec<u8>, GenerateError> {
    let rows = sheet_loader::parse_products(sheet)?;
    info!(rows = rows.len(), "generating labels from product sheet");

    let font = state.font();
    let mut labels = Vec::with_capacity(rows.len());
    for row in &rows {
        labels.push(label_engine::compose(
            &row.code,
            &row.name,
            font,
            opts.font_size as f32,
        )?);
    }

    let pages = page_layout::pack(labels, opts, PageSpec::a4());
    info!(labels = rows.len(), pages = pages.len(), "packed label pages");

    Ok(page_layout::render_pdf(&pages, PageSpec::a4(), DOC_TITLE)?)
}
