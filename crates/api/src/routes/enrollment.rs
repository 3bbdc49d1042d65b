//! Route definitions for the `/enrollments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::enrollment;
use crate::state::AppState;

/// Routes mounted at `/enrollments`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /student/{student_id}    -> list_by_student
/// GET    /course/{course_id}      -> list_by_course
/// GET    /{id}                    -> get_by_id
/// DELETE /{id}                    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(enrollment::list).post(enrollment::create))
        .route("/student/{student_id}", get(enrollment::list_by_student))
        .route("/course/{course_id}", get(enrollment::list_by_course))
        .route(
            "/{id}",
            get(enrollment::get_by_id).delete(enrollment::delete),
        )
}
