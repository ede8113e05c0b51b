use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::bundle::{parse_uploaded_session, ExportBundle};
use crate::session::share::{decode_share_state, share_url};
use crate::session::storage::{load_session, save_session, StorageError};
use crate::session::store::SessionSummary;
use crate::state::AppState;

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

/// Bundle plus an optional warning when a restore fell back to current state.
#[derive(Debug, Serialize)]
pub struct BundleResponse {
    pub bundle: ExportBundle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl BundleResponse {
    fn restored(bundle: ExportBundle) -> Self {
        let share_url = share_url(&bundle).ok();
        Self {
            bundle,
            share_url,
            warning: None,
        }
    }

    fn fallback(current: Option<ExportBundle>, warning: String) -> Self {
        tracing::warn!("{warning}");
        Self {
            bundle: current.unwrap_or_default(),
            share_url: None,
            warning: Some(warning),
        }
    }
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionSummary>) {
    let summary = state.sessions.create(&state.dictionary).await;
    (StatusCode::CREATED, Json(summary))
}

#[derive(Debug, Serialize)]
pub struct SessionDetail {
    #[serde(flatten)]
    pub summary: SessionSummary,
    pub last_bundle: Option<ExportBundle>,
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionDetail>, AppError> {
    let session = state.sessions.get(id).await.ok_or_else(|| session_not_found(id))?;
    Ok(Json(SessionDetail {
        summary: session.summary(),
        last_bundle: session.last_bundle,
    }))
}

async fn current_bundle(state: &AppState, id: Uuid) -> Result<Option<ExportBundle>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .map(|s| s.last_bundle)
        .ok_or_else(|| session_not_found(id))
}

async fn store_bundle(state: &AppState, id: Uuid, bundle: &ExportBundle) -> Result<(), AppError> {
    let stored = bundle.clone();
    state
        .sessions
        .update(id, move |session| session.last_bundle = Some(stored))
        .await
        .ok_or_else(|| session_not_found(id))
}

/// GET /api/v1/sessions/:id/export
/// The last decode result as a downloadable JSON file.
pub async fn handle_export_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let bundle = current_bundle(&state, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Nothing to export yet: decode some text first".to_string()))?;

    let json = bundle.to_json().map_err(|e| AppError::Internal(e.into()))?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"decoded_session.json\"",
            ),
        ],
        json,
    )
        .into_response())
}

/// POST /api/v1/sessions/:id/import
/// Body is the raw session file. A malformed file leaves the session untouched.
pub async fn handle_import_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<BundleResponse>, AppError> {
    let current = current_bundle(&state, id).await?;

    let raw = match String::from_utf8(body.to_vec()) {
        Ok(raw) => raw,
        Err(e) => {
            return Ok(Json(BundleResponse::fallback(
                current,
                format!("Could not load session file: {e}"),
            )))
        }
    };

    match parse_uploaded_session(&raw) {
        Ok(bundle) => {
            store_bundle(&state, id, &bundle).await?;
            tracing::info!(session_id = %id, "session imported");
            Ok(Json(BundleResponse::restored(bundle)))
        }
        Err(e) => Ok(Json(BundleResponse::fallback(
            current,
            format!("Could not load session file: {e}"),
        ))),
    }
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub session_id: Uuid,
    pub path: String,
}

/// POST /api/v1/sessions/:id/save
pub async fn handle_save_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SaveResponse>, AppError> {
    let bundle = current_bundle(&state, id)
        .await?
        .ok_or_else(|| AppError::Validation("Nothing to save yet: decode some text first".to_string()))?;

    let dir = state.config.session_dir.clone();
    let path = tokio::task::spawn_blocking(move || save_session(&dir, id, &bundle))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed saving session: {e}")))?
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(SaveResponse {
        session_id: id,
        path: path.display().to_string(),
    }))
}

/// POST /api/v1/sessions/:id/load
pub async fn handle_load_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BundleResponse>, AppError> {
    let current = current_bundle(&state, id).await?;

    let dir = state.config.session_dir.clone();
    let loaded = tokio::task::spawn_blocking(move || load_session(&dir, id))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed loading session: {e}")))?;

    match loaded {
        Ok(bundle) => {
            store_bundle(&state, id, &bundle).await?;
            Ok(Json(BundleResponse::restored(bundle)))
        }
        Err(StorageError::NotFound(_)) => {
            Err(AppError::NotFound(format!("No saved session for {id}")))
        }
        Err(StorageError::Bundle(e)) => Ok(Json(BundleResponse::fallback(
            current,
            format!("Saved session is unreadable: {e}"),
        ))),
        Err(e) => Err(AppError::Internal(e.into())),
    }
}

#[derive(Debug, Deserialize)]
pub struct ShareQuery {
    pub state: String,
    pub session_id: Option<Uuid>,
}

/// GET /api/v1/share?state=…&session_id=…
/// Restores a shared result, into the given session when one is named.
pub async fn handle_open_share_link(
    State(state): State<AppState>,
    Query(query): Query<ShareQuery>,
) -> Result<Json<BundleResponse>, AppError> {
    let current = match query.session_id {
        Some(id) => current_bundle(&state, id).await?,
        None => None,
    };

    match decode_share_state(&query.state) {
        Ok(bundle) => {
            if let Some(id) = query.session_id {
                store_bundle(&state, id, &bundle).await?;
            }
            Ok(Json(BundleResponse::restored(bundle)))
        }
        Err(e) => Ok(Json(BundleResponse::fallback(
            current,
            format!("Failed to load shared session: {e}"),
        ))),
    }
}
