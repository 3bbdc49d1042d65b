pub mod course;
pub mod enrollment;
pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /students                          list, create
/// /students/{id}                     get, update, delete
///
/// /courses                           list, create
/// /courses/{id}                      get, update, delete
///
/// /enrollments                       list, create
/// /enrollments/student/{student_id}  list by student
/// /enrollments/course/{course_id}    list by course
/// /enrollments/{id}                  get, delete
/// ```
pub fn resource_routes() -> Router<AppState> {
    tracing::info!("Mounting the `students` router");
    let students = student::router();
    tracing::info!("Mounting the `courses` router");
    let courses = course::router();
    tracing::info!("Mounting the `enrollments` router");
    let enrollments = enrollment::router();

    Router::new()
        .nest("/students", students)
        .nest("/courses", courses)
        .nest("/enrollments", enrollments)
}
