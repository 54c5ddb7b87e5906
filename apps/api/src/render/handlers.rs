//! Axum route handlers for pagination preview and the export formats.
//!
//! Every handler runs the same pipeline: derive the paging policy from the
//! request's settings (or the server defaults), paginate once, then hand the
//! identical page list to the requested renderer.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::layout::{paginate, Page};
use crate::models::{Document, Settings};
use crate::render::{csv, html, word};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub document: Document,
    /// Per-request settings override; falls back to the server defaults.
    #[serde(default)]
    pub settings: Option<Settings>,
}

#[derive(Debug, Serialize)]
pub struct PaginateResponse {
    pub pages: Vec<Page>,
    pub total_pages: usize,
}

impl ExportRequest {
    fn settings_or<'a>(&'a self, fallback: &'a Settings) -> &'a Settings {
        self.settings.as_ref().unwrap_or(fallback)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/paginate
///
/// Returns the page partition as JSON — the structure the on-screen preview
/// consumes. Pagination is total; this handler cannot fail on any document.
pub async fn handle_paginate(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Json<PaginateResponse>, AppError> {
    let settings = request.settings_or(&state.default_settings);
    let pages = paginate(&request.document.items, &settings.paging_policy());
    let total_pages = pages.len();

    Ok(Json(PaginateResponse { pages, total_pages }))
}

/// POST /api/v1/export/html
///
/// Returns the standalone print-ready HTML. The PDF pipeline posts this
/// same payload and hands the response to the external rasterizer.
pub async fn handle_export_html(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let settings = request.settings_or(&state.default_settings);
    let pages = paginate(&request.document.items, &settings.paging_policy());
    let body = html::render_html(&request.document, settings, &pages);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        body,
    )
        .into_response())
}

/// POST /api/v1/export/word
///
/// Returns `.doc` bytes (BOM + MSO HTML) as an attachment.
pub async fn handle_export_word(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let settings = request.settings_or(&state.default_settings);
    let pages = paginate(&request.document.items, &settings.paging_policy());
    let bytes = word::render_word(&request.document, settings, &pages);
    let disposition = attachment_disposition(&request.document.doc_id, "doc");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/msword".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// POST /api/v1/export/csv
///
/// Returns the item table as a UTF-8-BOM CSV attachment for Excel.
/// CSV carries only the raw item rows, so settings play no part here.
pub async fn handle_export_csv(
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let bytes = csv::render_csv(&request.document.items);
    let disposition = attachment_disposition(&request.document.doc_id, "csv");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// Builds a Content-Disposition value with a header-safe filename.
/// Non-ASCII document ids fall back to a generic name.
fn attachment_disposition(doc_id: &str, extension: &str) -> String {
    let safe: String = doc_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    let stem = if safe.is_empty() { "document" } else { &safe };
    format!("attachment; filename=\"{stem}.{extension}\"")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_disposition_keeps_ascii_id() {
        assert_eq!(
            attachment_disposition("Q-2024-001", "doc"),
            "attachment; filename=\"Q-2024-001.doc\""
        );
    }

    #[test]
    fn test_attachment_disposition_strips_non_ascii() {
        assert_eq!(
            attachment_disposition("عرض سعر", "csv"),
            "attachment; filename=\"document.csv\""
        );
    }

    #[test]
    fn test_export_request_defaults_settings_to_none() {
        let json = r#"{
            "document": {
                "doc_id": "Q-1",
                "doc_type": "quote",
                "client_name": "عميل",
                "subject": "موضوع",
                "items": [],
                "sub_total": 0,
                "tax_amount": 0,
                "total": 0
            }
        }"#;
        let request: ExportRequest = serde_json::from_str(json).unwrap();
        assert!(request.settings.is_none());
    }
}
