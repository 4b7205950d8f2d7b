//! # Chat Relay Handler
//!
//! The main endpoint: validates the upstream credential, lets the core build
//! the analysis prompt for the submitted profile, and relays the provider's
//! token stream to the caller as a chunked plain-text body.

use crate::{errors::AppError, state::AppState};
use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use billrag::{AnalysisOptions, PromptError};
use futures::TryStreamExt;
use tracing::{error, info};

/// The handler for the `/api/chat` endpoint.
///
/// Fails fast with a service-unavailable response when the upstream
/// credential is missing, before any provider call is made. Otherwise the
/// upstream token stream is relayed verbatim; a failure after streaming has
/// begun is logged and terminates the body. No retry in either case.
pub async fn chat_handler(
    State(app_state): State<AppState>,
    Json(options): Json<AnalysisOptions>,
) -> Result<Response, AppError> {
    if app_state.config.openai_api_key.is_none() {
        error!("OPENAI_API_KEY is not configured; rejecting chat request");
        return Err(AppError::Prompt(PromptError::MissingApiKey));
    }

    info!(
        turns = options.messages.len(),
        mode = ?options.analysis_mode,
        has_profile = options.business_overview.is_some(),
        "Received chat request"
    );

    let tokens = app_state.chat_client.stream_analysis(options).await?;

    let body = Body::from_stream(
        tokens
            .map_ok(String::into_bytes)
            .inspect_err(|e| error!("AI provider stream failed mid-response: {e}")),
    );

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response())
}
