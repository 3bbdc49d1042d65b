//! Repository for the `enrollments` table.

use school_core::enrollment::NewEnrollment;
use school_core::types::DbId;

use crate::error::RepoError;
use crate::models::enrollment::Enrollment;
use crate::DbPool;

const COLUMNS: &str = "id, student_id, course_id, enrolled_at";

/// Provides create/read/delete operations for enrollments.
#[derive(Clone)]
pub struct EnrollmentRepo {
    pool: DbPool,
}

impl EnrollmentRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new enrollment, returning the store-assigned id.
    ///
    /// Fails with [`RepoError::IntegrityViolation`] if either the student or
    /// the course does not exist.
    pub async fn create(&self, input: &NewEnrollment) -> Result<DbId, RepoError> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO enrollments (student_id, course_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(input.student_id)
        .bind(input.course_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Enrollment>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1");
        let enrollment = sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(enrollment)
    }

    pub async fn list(&self) -> Result<Vec<Enrollment>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM enrollments ORDER BY id");
        let enrollments = sqlx::query_as::<_, Enrollment>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(enrollments)
    }

    /// All enrollments of one student. Empty when there are none, whether or
    /// not the student exists.
    pub async fn list_by_student(&self, student_id: DbId) -> Result<Vec<Enrollment>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE student_id = $1 ORDER BY id");
        let enrollments = sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(enrollments)
    }

    pub async fn list_by_course(&self, course_id: DbId) -> Result<Vec<Enrollment>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE course_id = $1 ORDER BY id");
        let enrollments = sqlx::query_as::<_, Enrollment>(&query)
            .bind(course_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(enrollments)
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
