use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::builder::docx::{export_to_docx, SectionContent, DOCX_CONTENT_TYPE};
use crate::builder::keywords::{extract_keywords, match_keywords, suggest_rewrites};
use crate::builder::sections::{
    render_final_resume, suggest_resume_sections, SuggestedSection, UserProfile,
};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job_text: String,
    pub resume_text: String,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub job_keywords: Vec<String>,
    pub resume_keywords: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub match_percent: f64,
    pub suggestions: Vec<String>,
    pub sections: Vec<SuggestedSection>,
}

/// POST /api/v1/builder/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if req.job_text.trim().is_empty() || req.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Both job_text and resume_text are required".to_string(),
        ));
    }

    let top_n = req.top_n.unwrap_or(state.config.keyword_top_n);
    let job_keywords = extract_keywords(&req.job_text, top_n, &state.stopwords);
    let resume_keywords = extract_keywords(&req.resume_text, top_n, &state.stopwords);
    let result = match_keywords(&job_keywords, &resume_keywords);
    let suggestions = suggest_rewrites(&result.missing);
    let sections = suggest_resume_sections(&req.job_text, &req.resume_text);

    tracing::info!(
        match_percent = result.match_percent,
        missing = result.missing.len(),
        "keyword match complete"
    );

    Ok(Json(MatchResponse {
        job_keywords,
        resume_keywords,
        matched: result.matched,
        missing: result.missing,
        match_percent: result.match_percent,
        suggestions,
        sections,
    }))
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub sections: Vec<SuggestedSection>,
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub markdown: String,
}

/// POST /api/v1/builder/render
pub async fn handle_render(Json(req): Json<RenderRequest>) -> Json<RenderResponse> {
    Json(RenderResponse {
        markdown: render_final_resume(&req.sections, req.profile.as_ref()),
    })
}

#[derive(Debug, Deserialize)]
pub struct ExportSection {
    pub title: String,
    pub content: SectionContent,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default = "default_export_title")]
    pub title: String,
    pub sections: Vec<ExportSection>,
}

fn default_export_title() -> String {
    "Resume".to_string()
}

/// POST /api/v1/builder/export
/// Returns the .docx as an attachment.
pub async fn handle_export(Json(req): Json<ExportRequest>) -> Result<Response, AppError> {
    let sections: Vec<(String, SectionContent)> = req
        .sections
        .into_iter()
        .map(|s| (s.title, s.content))
        .collect();

    let docx = export_to_docx(&req.title, &sections).map_err(|e| AppError::Internal(e.into()))?;

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume.docx\"",
            ),
        ],
        Bytes::from(docx),
    )
        .into_response())
}
