//! Unified error types for the deck API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core deck and store errors
//! - `AppError`: Application layer errors (domain errors tagged with the
//!   failing operation, mapped to HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::DeckId;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Deck not found: {0}")]
    DeckNotFound(DeckId),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Deck {0} was modified concurrently")]
    VersionConflict(DeckId),

    #[error("Malformed card code: {0}")]
    MalformedCode(String),
}

/// The use case an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckOperation {
    Create,
    Open,
    Draw,
}

impl std::fmt::Display for DeckOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckOperation::Create => write!(f, "creating the deck"),
            DeckOperation::Open => write!(f, "opening the deck"),
            DeckOperation::Draw => write!(f, "drawing cards"),
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{operation} failed: {source}")]
    Deck {
        operation: DeckOperation,
        #[source]
        source: DomainError,
    },

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn deck(operation: DeckOperation, source: DomainError) -> Self {
        AppError::Deck { operation, source }
    }

    /// The domain error underneath, if any
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Deck { source, .. } => Some(source),
            AppError::BadRequest(_) => None,
        }
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self.domain() {
            Some(DomainError::DeckNotFound(_)) => (
                StatusCode::NOT_FOUND,
                "The deck given wasn't found",
                Some(self.to_string()),
            ),
            Some(DomainError::MalformedCode(_)) => (
                StatusCode::BAD_REQUEST,
                "Malformed card code",
                Some(self.to_string()),
            ),
            Some(DomainError::VersionConflict(_)) => {
                tracing::warn!("{}", self);
                (StatusCode::CONFLICT, "Conflict", Some(self.to_string()))
            }
            Some(DomainError::Persistence(_)) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            None => (StatusCode::BAD_REQUEST, "Bad request", Some(self.to_string())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
