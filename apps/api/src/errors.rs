use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::clues::ClueSourceError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The clue source call failed (network, API status, malformed payload).
    /// Surfaced once per generate call — the pipeline never retries it.
    #[error("Clue source error: {0}")]
    ClueSource(#[from] ClueSourceError),

    /// The clue source returned zero usable words, so no grid can be seeded.
    #[error("No words available to build a puzzle")]
    NoWordsAvailable,

    /// A placed word has no entry in the clue mapping. This is a pipeline
    /// bug, not an input problem — a word can only be placed if it came from
    /// the mapping in the first place.
    #[error("Placed word '{0}' has no matching clue")]
    MissingClue(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ClueSource(e) => {
                tracing::error!("Clue source error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "CLUE_SOURCE_ERROR",
                    "The clue source failed to produce words".to_string(),
                )
            }
            AppError::NoWordsAvailable => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NO_WORDS_AVAILABLE",
                "The clue source returned no usable words".to_string(),
            ),
            AppError::MissingClue(word) => {
                tracing::error!("Placed word '{word}' missing from clue mapping");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MISSING_CLUE",
                    "An internal consistency error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
