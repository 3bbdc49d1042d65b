use std::sync::Arc;

use school_db::repositories::{CourseRepo, EnrollmentRepo, StudentRepo};
use school_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the repositories hold pool handles, which are reference
/// counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
    pub students: StudentRepo,
    pub courses: CourseRepo,
    pub enrollments: EnrollmentRepo,
}

impl AppState {
    /// Wire every repository to the same pool.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            students: StudentRepo::new(pool.clone()),
            courses: CourseRepo::new(pool.clone()),
            enrollments: EnrollmentRepo::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
