//! Repository for the `students` table.

use school_core::student::{NewStudent, StudentChanges};
use school_core::types::DbId;
use sqlx::{Postgres, QueryBuilder};

use crate::error::RepoError;
use crate::models::student::Student;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, birthdate";

/// Provides CRUD operations for students.
#[derive(Clone)]
pub struct StudentRepo {
    pool: DbPool,
}

impl StudentRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new student, returning the store-assigned id.
    pub async fn create(&self, input: &NewStudent) -> Result<DbId, RepoError> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO students (name, email, birthdate)
             VALUES ($1, $2, $3::date)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.birthdate)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Student>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(student)
    }

    /// List all students in id order.
    pub async fn list(&self) -> Result<Vec<Student>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id");
        let students = sqlx::query_as::<_, Student>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    /// Apply the present fields of `changes`.
    ///
    /// Returns `false` if no student with `id` exists. An empty change set
    /// only checks for existence.
    pub async fn update(&self, id: DbId, changes: &StudentChanges) -> Result<bool, RepoError> {
        let Some(mut query) = build_update(id, changes) else {
            return self.exists(id).await;
        };
        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a student. Fails with [`RepoError::IntegrityViolation`] while
    /// enrollments still reference it.
    pub async fn delete(&self, id: DbId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(&self, id: DbId) -> Result<bool, RepoError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}

/// Build an `UPDATE` touching only the supplied columns, or `None` when
/// nothing was supplied.
fn build_update(id: DbId, changes: &StudentChanges) -> Option<QueryBuilder<'_, Postgres>> {
    if changes.is_empty() {
        return None;
    }

    let mut query = QueryBuilder::new("UPDATE students SET ");
    let mut set = query.separated(", ");
    if let Some(name) = &changes.name {
        set.push("name = ").push_bind_unseparated(name);
    }
    if let Some(email) = &changes.email {
        set.push("email = ").push_bind_unseparated(email);
    }
    if let Some(birthdate) = &changes.birthdate {
        set.push("birthdate = ")
            .push_bind_unseparated(birthdate)
            .push_unseparated("::date");
    }
    query.push(" WHERE id = ").push_bind(id);
    Some(query)
}
