//! Axum route handlers for the drafting form.
//!
//! Each interaction is one request that redraws the whole page:
//! `GET /` draws the idle form, `POST /generate` validates, awaits at most one
//! generation call and draws the outcome, `POST /download` returns the text file.

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
    Form,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};

use crate::drafting::download::{content_disposition, download_filename};
use crate::errors::AppError;
use crate::form::view::{render_page, FormState, PageView, EMPTY_TOPIC_WARNING};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub additional_info: String,
}

#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    #[serde(default)]
    pub topic: String,
    pub text: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&PageView {
        generation_enabled: state.generator.is_enabled(),
        topic: "",
        additional_info: "",
        state: FormState::Idle,
    }))
}

/// POST /generate
///
/// An empty topic short-circuits to the inline warning without touching the generator.
/// Any other topic, whitespace included, is sent as typed: exactly one generation call
/// is awaited and its text is drawn, whether it succeeded or not.
pub async fn handle_generate(
    State(state): State<AppState>,
    form: Result<Form<GenerateForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(form) = form?;

    let form_state = if form.topic.is_empty() {
        warn!("Generate submitted without a topic");
        FormState::Warning(EMPTY_TOPIC_WARNING)
    } else {
        let result = state
            .generator
            .generate(&form.topic, &form.additional_info)
            .await;
        info!(success = result.is_success(), "Document body generated");
        FormState::Displayed(result)
    };

    Ok(Html(render_page(&PageView {
        generation_enabled: state.generator.is_enabled(),
        topic: &form.topic,
        additional_info: &form.additional_info,
        state: form_state,
    })))
}

/// POST /download
///
/// Serializes the displayed text as UTF-8 bytes under a filename derived from the topic.
pub async fn handle_download(
    form: Result<Form<DownloadForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;

    let text = form
        .text
        .ok_or_else(|| AppError::Validation("text is required".to_string()))?;

    let disposition = HeaderValue::from_str(&content_disposition(&download_filename(
        &form.topic,
    )))
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid Content-Disposition: {e}")))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(text),
    )
        .into_response())
}
