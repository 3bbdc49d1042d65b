//! Handlers for the `/students` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use school_core::error::CoreError;
use school_core::student::{NewStudent, StudentChanges};
use school_core::types::{DbId, Entity, Parent};
use school_core::validation::{ValidationError, MSG_NOT_A_DATE};
use school_db::models::student::Student;
use school_db::RepoError;

use crate::error::{on_integrity_violation, AppError, AppResult};
use crate::extract::{parse_id, JsonPayload};
use crate::response::Created;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: Entity::Student,
        id,
    })
}

/// Resolve a path segment, answering 404 for ids that cannot exist.
fn student_id(raw: &str) -> AppResult<DbId> {
    parse_id(raw).ok_or_else(|| not_found(0))
}

/// The store rejects shape-valid birthdates that name no real day.
fn on_write_error(err: RepoError) -> AppError {
    match err {
        RepoError::InvalidDate => {
            let mut details = ValidationError::new();
            details.add("birthdate", MSG_NOT_A_DATE);
            details.into()
        }
        other => other.into(),
    }
}

/// GET /students
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = state.students.list().await?;
    Ok(Json(students))
}

/// POST /students
pub async fn create(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> AppResult<(StatusCode, Json<Created<NewStudent>>)> {
    let input = NewStudent::validate(&payload)?;
    let id = state
        .students
        .create(&input)
        .await
        .map_err(on_write_error)?;
    tracing::info!(id, "Student created");
    Ok((StatusCode::CREATED, Json(Created { id, fields: input })))
}

/// GET /students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Student>> {
    let id = student_id(&raw_id)?;
    let student = state
        .students
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(student))
}

/// PUT /students/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> AppResult<StatusCode> {
    let id = student_id(&raw_id)?;
    let changes = StudentChanges::validate(&payload)?;
    let updated = state
        .students
        .update(id, &changes)
        .await
        .map_err(on_write_error)?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// DELETE /students/{id}
///
/// Answers 204 whether or not a row matched, and 409 while any enrollment
/// references the student.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(StatusCode::NO_CONTENT);
    };
    let deleted = state.students.delete(id).await.map_err(|err| {
        on_integrity_violation(
            err,
            CoreError::Referenced {
                entity: Parent::Student,
                id,
            },
        )
    })?;
    if deleted {
        tracing::info!(id, "Student deleted");
    } else {
        tracing::debug!(id, "Student delete matched no row");
    }
    Ok(StatusCode::NO_CONTENT)
}
