use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::ats::{check_ats_friendly, AtsReport};
use crate::analysis::quality::{calculate_resume_quality, quality_label, QualityLabel};
use crate::analysis::tone::{analyze_tone, dominant_tone, ToneResult};
use crate::decoder::dictionary::DictionaryError;
use crate::decoder::engine::{decode, DecodeResult};
use crate::decoder::samples::{find_sample, SAMPLES};
use crate::decoder::score_meter::{score_meter, ScoreMeter};
use crate::decoder::style::DecodeStyle;
use crate::decoder::titles::generate_title;
use crate::errors::AppError;
use crate::session::bundle::{create_export_bundle, ExportBundle};
use crate::session::share::share_url;
use crate::state::AppState;

#[derive(Serialize)]
pub struct StyleInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub note: &'static str,
}

/// GET /api/v1/styles
pub async fn handle_list_styles() -> Json<Vec<StyleInfo>> {
    Json(
        DecodeStyle::ALL
            .into_iter()
            .map(|style| StyleInfo {
                name: style.name(),
                description: style.description(),
                note: style.note(),
            })
            .collect(),
    )
}

#[derive(Serialize)]
pub struct SampleInfo {
    pub name: &'static str,
    pub text: &'static str,
}

/// GET /api/v1/samples
pub async fn handle_list_samples() -> Json<Vec<SampleInfo>> {
    Json(
        SAMPLES
            .iter()
            .map(|&(name, text)| SampleInfo { name, text })
            .collect(),
    )
}

#[derive(Deserialize)]
pub struct TitleQuery {
    pub vibe: Option<String>,
    pub tier: Option<usize>,
}

#[derive(Serialize)]
pub struct TitleResponse {
    pub title: &'static str,
}

/// GET /api/v1/titles
pub async fn handle_generate_title(Query(query): Query<TitleQuery>) -> Json<TitleResponse> {
    Json(TitleResponse {
        title: generate_title(query.vibe.as_deref(), query.tier),
    })
}

#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    pub text: Option<String>,
    /// Name of a built-in sample, used when `text` is absent.
    pub sample: Option<String>,
    #[serde(default)]
    pub style: DecodeStyle,
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    pub style: DecodeStyle,
    pub style_note: &'static str,
    #[serde(flatten)]
    pub result: DecodeResult,
    pub meter: ScoreMeter,
    pub tone: ToneResult,
    pub dominant_tone: &'static str,
    pub ats: AtsReport,
    pub quality_score: u32,
    pub quality_label: QualityLabel,
    pub share_url: String,
    pub bundle: ExportBundle,
}

/// Pasted text wins; a blank or missing text falls back to the named sample.
fn resolve_input(req: &DecodeRequest) -> Result<String, AppError> {
    if let Some(text) = req.text.as_deref().filter(|t| !t.trim().is_empty()) {
        return Ok(text.to_string());
    }

    match req.sample.as_deref() {
        Some(name) => find_sample(name)
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation(format!("Unknown sample '{name}'"))),
        None => Err(AppError::Validation(
            "Please enter some text to decode".to_string(),
        )),
    }
}

/// POST /api/v1/decode
pub async fn handle_decode(
    State(state): State<AppState>,
    Json(req): Json<DecodeRequest>,
) -> Result<Json<DecodeResponse>, AppError> {
    let text = resolve_input(&req)?;

    let session_dictionary = match req.session_id {
        Some(id) => Some(
            state
                .sessions
                .get(id)
                .await
                .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?
                .dictionary,
        ),
        None => None,
    };
    let dictionary = session_dictionary
        .as_ref()
        .unwrap_or_else(|| state.dictionary.as_ref());

    let result = decode(&text, dictionary, req.style);
    let tone = analyze_tone(&text);
    let ats = check_ats_friendly(&text);
    let quality_score = calculate_resume_quality(result.score, f64::from(ats.pass_score), &tone);

    let bundle = create_export_bundle(
        &text,
        &result.decoded_text,
        req.style,
        result.score,
        &tone,
        &ats,
        quality_score,
    );
    let share_url = share_url(&bundle).map_err(|e| AppError::Internal(e.into()))?;

    if let Some(id) = req.session_id {
        let stored = bundle.clone();
        state
            .sessions
            .update(id, move |session| session.last_bundle = Some(stored))
            .await;
    }

    tracing::info!(
        style = %req.style,
        score = result.score,
        quality_score,
        "decode complete"
    );

    Ok(Json(DecodeResponse {
        session_id: req.session_id,
        style: req.style,
        style_note: req.style.note(),
        meter: score_meter(result.score),
        dominant_tone: dominant_tone(&tone),
        quality_label: quality_label(quality_score),
        result,
        tone,
        ats,
        quality_score,
        share_url,
        bundle,
    }))
}

#[derive(Debug, Serialize)]
pub struct BuzzwordEntry {
    pub phrase: String,
    pub explanation: String,
}

/// GET /api/v1/sessions/:id/buzzwords
pub async fn handle_list_buzzwords(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<BuzzwordEntry>>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    Ok(Json(
        session
            .dictionary
            .sorted_entries()
            .into_iter()
            .map(|(phrase, explanation)| BuzzwordEntry {
                phrase: phrase.to_string(),
                explanation: explanation.to_string(),
            })
            .collect(),
    ))
}

#[derive(Debug, Deserialize)]
pub struct AddBuzzwordRequest {
    pub phrase: String,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct AddBuzzwordResponse {
    pub phrase: String,
    pub explanation: String,
    pub buzzword_count: usize,
}

/// POST /api/v1/sessions/:id/buzzwords
/// Adds (or overwrites) a buzzword in this session's dictionary only.
pub async fn handle_add_buzzword(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddBuzzwordRequest>,
) -> Result<Json<AddBuzzwordResponse>, AppError> {
    let added = state
        .sessions
        .update(id, |session| {
            session
                .dictionary
                .add(&req.phrase, &req.explanation)
                .map(|phrase| (phrase, session.dictionary.len()))
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    let (phrase, buzzword_count) = added.map_err(|e| match e {
        DictionaryError::EmptyPhrase | DictionaryError::EmptyExplanation(_) => {
            AppError::Validation(e.to_string())
        }
        other => AppError::Internal(other.into()),
    })?;

    tracing::info!(session_id = %id, phrase = %phrase, "buzzword added");

    Ok(Json(AddBuzzwordResponse {
        phrase,
        explanation: req.explanation.trim().to_string(),
        buzzword_count,
    }))
}
