pub mod course;
pub mod enrollment;
pub mod health;
pub mod student;

use crate::error::AppError;

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
