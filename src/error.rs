//! Error taxonomy for issuance, resolution, and the HTTP boundary.
//!
//! Domain errors ([`IssueError`], [`ResolveError`], [`StoreError`]) are plain
//! `thiserror` enums; [`AppError`] is the single type that crosses the HTTP
//! boundary. No raw database error ever reaches a response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::url_sanitizer::UrlSanitizeError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Errors surfaced by the mapping store collaborator.
///
/// Everything the store can fail with is wrapped here at the repository
/// boundary, so callers only ever reason about "duplicate" vs "transient".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The unique constraint on `code` was violated at insert time.
    #[error("short code already exists: {code}")]
    DuplicateCode { code: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors produced by the code issuance flow.
#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    #[error("invalid destination URL: {0}")]
    InvalidUrl(#[from] UrlSanitizeError),

    /// The alias fell outside the 2-20 character bound after normalization.
    #[error("alias must be 2-20 characters after normalization, got {len}", len = .normalized.len())]
    InvalidAlias { normalized: String },

    #[error("alias is already taken: {alias}")]
    AliasTaken { alias: String },

    /// Random code generation kept colliding until the attempt budget ran out.
    #[error("could not find an unused short code")]
    CodeSpaceExhausted,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors produced by the code resolution flow.
///
/// A record whose stored URL fails sanitization resolves to [`NotFound`],
/// deliberately indistinguishable from a missing code so that probes cannot
/// learn which codes exist with malformed data.
///
/// [`NotFound`]: ResolveError::NotFound
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("short code not found")]
    NotFound,

    #[error("store failure during lookup: {0}")]
    Transient(#[from] StoreError),
}

/// Application error type returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Transient { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn transient(message: impl Into<String>, details: Value) -> Self {
        Self::Transient {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Transient { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "transient_error",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<IssueError> for AppError {
    fn from(err: IssueError) -> Self {
        match err {
            IssueError::InvalidUrl(e) => {
                AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
            }
            IssueError::InvalidAlias { normalized } => AppError::bad_request(
                "Alias must be 2-20 characters (letters, numbers, hyphens)",
                json!({ "normalized": normalized }),
            ),
            IssueError::AliasTaken { alias } => {
                AppError::conflict("This alias is already taken", json!({ "alias": alias }))
            }
            IssueError::CodeSpaceExhausted => AppError::transient(
                "Could not create a short link, please retry",
                json!({ "reason": "code generation exhausted" }),
            ),
            IssueError::Store(StoreError::DuplicateCode { code }) => {
                AppError::conflict("This alias is already taken", json!({ "alias": code }))
            }
            IssueError::Store(StoreError::Database(_)) => AppError::transient(
                "Could not create a short link, please retry",
                json!({}),
            ),
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound => {
                AppError::not_found("Short link not found", json!({}))
            }
            ResolveError::Transient(_) => AppError::transient(
                "Could not resolve the short link, please retry",
                json!({}),
            ),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&errors).unwrap_or_else(|_| json!({})),
        )
    }
}
