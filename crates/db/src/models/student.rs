use chrono::NaiveDate;
use school_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `students` table. `birthdate` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub birthdate: NaiveDate,
}
