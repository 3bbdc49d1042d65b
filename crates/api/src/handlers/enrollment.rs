//! Handlers for the `/enrollments` resource. Enrollments are created, read
//! and deleted, never updated.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use school_core::enrollment::NewEnrollment;
use school_core::error::CoreError;
use school_core::types::{DbId, Entity};
use school_db::models::enrollment::Enrollment;

use crate::error::{on_integrity_violation, AppError, AppResult};
use crate::extract::{parse_id, JsonPayload};
use crate::response::Created;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: Entity::Enrollment,
        id,
    })
}

/// GET /enrollments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Enrollment>>> {
    let enrollments = state.enrollments.list().await?;
    Ok(Json(enrollments))
}

/// GET /enrollments/student/{student_id}
///
/// An unknown or malformed student id yields an empty list, not a 404.
pub async fn list_by_student(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<Enrollment>>> {
    let Some(student_id) = parse_id(&raw_id) else {
        return Ok(Json(Vec::new()));
    };
    let enrollments = state.enrollments.list_by_student(student_id).await?;
    Ok(Json(enrollments))
}

/// GET /enrollments/course/{course_id}
pub async fn list_by_course(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<Enrollment>>> {
    let Some(course_id) = parse_id(&raw_id) else {
        return Ok(Json(Vec::new()));
    };
    let enrollments = state.enrollments.list_by_course(course_id).await?;
    Ok(Json(enrollments))
}

/// POST /enrollments
///
/// A student or course id that does not exist is a client error (400).
pub async fn create(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> AppResult<(StatusCode, Json<Created<NewEnrollment>>)> {
    let input = NewEnrollment::validate(&payload)?;
    let id = state
        .enrollments
        .create(&input)
        .await
        .map_err(|err| on_integrity_violation(err, CoreError::InvalidReference))?;
    tracing::info!(
        id,
        student_id = input.student_id,
        course_id = input.course_id,
        "Enrollment created"
    );
    Ok((StatusCode::CREATED, Json(Created { id, fields: input })))
}

/// GET /enrollments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Enrollment>> {
    let id = parse_id(&raw_id).ok_or_else(|| not_found(0))?;
    let enrollment = state
        .enrollments
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(enrollment))
}

/// DELETE /enrollments/{id}
///
/// Answers 204 whether or not a row matched.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(StatusCode::NO_CONTENT);
    };
    if state.enrollments.delete(id).await? {
        tracing::info!(id, "Enrollment deleted");
    } else {
        tracing::debug!(id, "Enrollment delete matched no row");
    }
    Ok(StatusCode::NO_CONTENT)
}
