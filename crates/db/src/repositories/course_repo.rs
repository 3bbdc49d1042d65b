//! Repository for the `courses` table.

use school_core::course::{CourseChanges, NewCourse};
use school_core::types::DbId;
use sqlx::{Postgres, QueryBuilder};

use crate::error::RepoError;
use crate::models::course::Course;
use crate::DbPool;

const COLUMNS: &str = "id, title, description";

/// Provides CRUD operations for courses.
#[derive(Clone)]
pub struct CourseRepo {
    pool: DbPool,
}

impl CourseRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &NewCourse) -> Result<DbId, RepoError> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO courses (title, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Course>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(course)
    }

    pub async fn list(&self) -> Result<Vec<Course>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY id");
        let courses = sqlx::query_as::<_, Course>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(courses)
    }

    /// Apply the present fields of `changes`. Returns `false` if no course
    /// with `id` exists.
    pub async fn update(&self, id: DbId, changes: &CourseChanges) -> Result<bool, RepoError> {
        let Some(mut query) = build_update(id, changes) else {
            return self.exists(id).await;
        };
        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a course. Fails with [`RepoError::IntegrityViolation`] while
    /// enrollments still reference it.
    pub async fn delete(&self, id: DbId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(&self, id: DbId) -> Result<bool, RepoError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}

fn build_update(id: DbId, changes: &CourseChanges) -> Option<QueryBuilder<'_, Postgres>> {
    if changes.is_empty() {
        return None;
    }

    let mut query = QueryBuilder::new("UPDATE courses SET ");
    let mut set = query.separated(", ");
    if let Some(title) = &changes.title {
        set.push("title = ").push_bind_unseparated(title);
    }
    if let Some(description) = &changes.description {
        set.push("description = ").push_bind_unseparated(description);
    }
    query.push(" WHERE id = ").push_bind(id);
    Some(query)
}
