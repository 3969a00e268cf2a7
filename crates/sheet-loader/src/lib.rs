//! Product sheet loading.
//!
//! Parses uploaded CSV sheets into product rows and provides the empty
//! template users can download to get started. Header matching is
//! case-insensitive and tolerant of surrounding whitespace; extra columns
//! are ignored.

use std::io;

use tracing::debug;

/// Recognized header for the product code column.
pub const CODE_HEADER: &str = "code";

/// Recognized header for the product name column.
pub const PRODUCT_HEADER: &str = "product";

/// One data row of an uploaded product sheet.
///
/// `code` keeps the cell's string form verbatim; numeric-looking codes are
/// not reparsed. Missing cells become empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub code: String,
    pub name: String,
}

/// Errors that can occur while loading a product sheet.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("failed to read sheet: {0}")]
    Read(#[from] csv::Error),

    #[error("sheet is missing required column(s): {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },
}

/// Parse a UTF-8 delimited sheet into product rows, in file order.
///
/// The sheet must carry a `code` and a `product` column (any case, any
/// surrounding whitespace). Short records yield empty strings for the
/// absent cells rather than failing.
pub fn parse_products<R: io::Read>(reader: R) -> Result<Vec<ProductRow>, SheetError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut code_idx = None;
    let mut name_idx = None;
    for (i, header) in headers.iter().enumerate() {
        match header.trim().to_lowercase().as_str() {
            h if h == CODE_HEADER && code_idx.is_none() => code_idx = Some(i),
            h if h == PRODUCT_HEADER && name_idx.is_none() => name_idx = Some(i),
            _ => {}
        }
    }

    let (code_idx, name_idx) = match (code_idx, name_idx) {
        (Some(c), Some(n)) => (c, n),
        _ => {
            let mut missing = Vec::new();
            if code_idx.is_none() {
                missing.push(CODE_HEADER.to_string());
            }
            if name_idx.is_none() {
                missing.push(PRODUCT_HEADER.to_string());
            }
            return Err(SheetError::MissingColumns { missing });
        }
    };

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(ProductRow {
            code: record.get(code_idx).unwrap_or("").to_string(),
            name: record.get(name_idx).unwrap_or("").to_string(),
        });
    }

    debug!(rows = rows.len(), "parsed product sheet");
    Ok(rows)
}

/// The downloadable empty template: the two recognized headers, no data.
pub fn template_csv() -> String {
    format!("{CODE_HEADER},{PRODUCT_HEADER}\n")
}
