//! Handlers for the `/courses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use school_core::course::{CourseChanges, NewCourse};
use school_core::error::CoreError;
use school_core::types::{DbId, Entity, Parent};
use school_db::models::course::Course;

use crate::error::{on_integrity_violation, AppError, AppResult};
use crate::extract::{parse_id, JsonPayload};
use crate::response::Created;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: Entity::Course,
        id,
    })
}

fn course_id(raw: &str) -> AppResult<DbId> {
    parse_id(raw).ok_or_else(|| not_found(0))
}

/// GET /courses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = state.courses.list().await?;
    Ok(Json(courses))
}

/// POST /courses
///
/// The echoed body carries the defaulted `description`.
pub async fn create(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> AppResult<(StatusCode, Json<Created<NewCourse>>)> {
    let input = NewCourse::validate(&payload)?;
    let id = state.courses.create(&input).await?;
    tracing::info!(id, "Course created");
    Ok((StatusCode::CREATED, Json(Created { id, fields: input })))
}

/// GET /courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Course>> {
    let id = course_id(&raw_id)?;
    let course = state
        .courses
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(course))
}

/// PUT /courses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> AppResult<StatusCode> {
    let id = course_id(&raw_id)?;
    let changes = CourseChanges::validate(&payload)?;
    if state.courses.update(id, &changes).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// DELETE /courses/{id}
///
/// Answers 204 whether or not a row matched, and 409 while any enrollment
/// references the course.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(StatusCode::NO_CONTENT);
    };
    let deleted = state.courses.delete(id).await.map_err(|err| {
        on_integrity_violation(
            err,
            CoreError::Referenced {
                entity: Parent::Course,
                id,
            },
        )
    })?;
    if deleted {
        tracing::info!(id, "Course deleted");
    } else {
        tracing::debug!(id, "Course delete matched no row");
    }
    Ok(StatusCode::NO_CONTENT)
}
