//! Label generation and template API.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use serde_json::Value;

use page_layout::LayoutOptions;
use page_layout::options::{DEFAULT_COLUMNS, DEFAULT_FONT_SIZE};

use super::err_json;
use crate::app::SharedState;
use crate::services::generate::{self, GenerateError};

type ApiError = (StatusCode, Json<Value>);

/// POST /api/labels/generate – upload a product sheet, download the PDF.
///
/// Multipart fields: `sheet` (the CSV file), optional `columns` and
/// `font_size`. Input-level problems (unreadable sheet, missing columns,
/// out-of-range options) are 400s; nothing is generated for them.
pub async fn generate(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut sheet: Option<Vec<u8>> = None;
    let mut columns = DEFAULT_COLUMNS;
    let mut font_size = DEFAULT_FONT_SIZE;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "sheet" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| err_json(400, &e.to_string()))?;
                sheet = Some(data.to_vec());
            }
            "columns" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| err_json(400, &e.to_string()))?;
                columns = text
                    .trim()
                    .parse()
                    .map_err(|_| err_json(400, "columns must be an integer"))?;
            }
            "font_size" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| err_json(400, &e.to_string()))?;
                font_size = text
                    .trim()
                    .parse()
                    .map_err(|_| err_json(400, "font_size must be an integer"))?;
            }
            _ => {}
        }
    }

    let sheet = sheet.ok_or_else(|| err_json(400, "no sheet file provided (field 'sheet')"))?;
    let opts =
        LayoutOptions::new(columns, font_size).map_err(|e| err_json(400, &e.to_string()))?;

    let pdf = tokio::task::spawn_blocking(move || generate::generate_pdf(&state, &sheet, &opts))
        .await
        .map_err(|e| err_json(500, &e.to_string()))?
        .map_err(|e| match &e {
            GenerateError::Sheet(_) => err_json(400, &e.to_string()),
            _ => err_json(500, &e.to_string()),
        })?;

    let filename = format!(
        "stock_labels_{}.pdf",
        chrono::Local::now().format("%Y-%m-%d")
    );
    Response::builder()
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(pdf))
        .map_err(|e| err_json(500, &e.to_string()))
}

/// GET /api/labels/template – empty sheet with the recognized headers.
pub async fn download_template() -> Result<Response, ApiError> {
    Response::builder()
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"product_codes_template.csv\"",
        )
        .body(Body::from(sheet_loader::template_csv()))
        .map_err(|e| err_json(500, &e.to_string()))
}
