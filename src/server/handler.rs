use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::{export::EXPORT_FILE_NAME, server::error::Result, types::Doc};

/// Renders the posted document and returns it as a `project.pdf` attachment
pub async fn create_pdf(Json(doc): Json<Doc>) -> Result<impl IntoResponse> {
    tracing::info!(
        bytes = doc.content.len(),
        font = doc.settings.font_family.wire_name(),
        size = doc.settings.font_size,
        "pdf request"
    );

    let pdf_bytes = tokio::task::spawn_blocking(move || doc.render()).await?;

    tracing::info!(bytes = pdf_bytes.len(), "pdf rendered");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={EXPORT_FILE_NAME}"),
            ),
        ],
        pdf_bytes,
    ))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
