use axum::{extract::Multipart, Json};

use crate::errors::AppError;
use crate::ingest::file_loader::{extract_text, Extraction};

/// POST /api/v1/ingest
/// Multipart upload with a `file` field. Unreadable files come back as empty
/// text plus a warning, never as an error status.
pub async fn handle_ingest(mut multipart: Multipart) -> Result<Json<Extraction>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        tracing::info!(
            file_name = file_name.as_deref().unwrap_or("-"),
            size = bytes.len(),
            "ingesting upload"
        );

        // PDF parsing is CPU-bound and can panic on hostile input; both are
        // kept off the executor and a panic degrades to a warning.
        let extraction = tokio::task::spawn_blocking(move || {
            extract_text(&bytes, content_type.as_deref(), file_name.as_deref())
        })
        .await
        .unwrap_or_else(|e| Extraction {
            text: String::new(),
            warning: Some(format!("Error reading file: {e}")),
        });

        return Ok(Json(extraction));
    }

    Err(AppError::Validation(
        "Multipart field 'file' is required".to_string(),
    ))
}
