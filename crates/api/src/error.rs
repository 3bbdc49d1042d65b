use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use school_core::error::CoreError;
use school_core::messages;
use school_core::validation::ValidationError;
use school_db::RepoError;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain outcomes and [`RepoError`] for store
/// failures. Implements [`IntoResponse`] so every failure leaves the server
/// in the same `{error, message, details?}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `school_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository failure the handler did not map to a domain outcome.
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// The request body could not be read as a JSON object.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matched the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// An internal error with a human-readable message. Never shown to clients.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// The JSON error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: u16,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'a BTreeMap<String, String>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(err) => (
                    StatusCode::BAD_REQUEST,
                    messages::VALIDATION_ERROR,
                    Some(err.details()),
                ),
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, messages::not_found(*entity), None)
                }
                CoreError::Referenced { entity, id } => {
                    tracing::debug!(%entity, id, "Delete rejected, row still referenced");
                    (
                        StatusCode::CONFLICT,
                        messages::still_referenced(*entity),
                        None,
                    )
                }
                CoreError::InvalidReference => (
                    StatusCode::BAD_REQUEST,
                    messages::INVALID_REFERENCE,
                    None,
                ),
            },

            AppError::Repo(err) => {
                tracing::error!(error = %err, "Unhandled repository error");
                internal()
            }

            AppError::BadRequest(reason) => {
                tracing::debug!(%reason, "Rejected request body");
                (StatusCode::BAD_REQUEST, messages::BAD_REQUEST, None)
            }

            AppError::RouteNotFound => (StatusCode::NOT_FOUND, messages::NOT_FOUND, None),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = ErrorBody {
            error: status.as_u16(),
            message,
            details,
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (
    StatusCode,
    &'static str,
    Option<&'static BTreeMap<String, String>>,
) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        messages::INTERNAL_SERVER_ERROR,
        None,
    )
}

/// Turn a foreign-key rejection into `outcome`, leaving other failures as
/// store errors.
pub fn on_integrity_violation(err: RepoError, outcome: CoreError) -> AppError {
    match err {
        RepoError::IntegrityViolation { constraint } => {
            tracing::debug!(?constraint, "Foreign key constraint rejected statement");
            AppError::Core(outcome)
        }
        other => AppError::Repo(other),
    }
}
