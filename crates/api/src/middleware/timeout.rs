use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Bound the time spent in the inner service.
///
/// A request that outlives `timeout` is dropped and answered like any other
/// unhandled failure, so clients always see the JSON envelope.
pub async fn enforce_request_timeout(
    State(timeout): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    match tokio::time::timeout(timeout, next.run(request)).await {
        Ok(response) => response,
        Err(_) => AppError::InternalError(format!(
            "{method} {uri} exceeded the {timeout:?} request timeout"
        ))
        .into_response(),
    }
}
