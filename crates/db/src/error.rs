use sqlx::error::ErrorKind;

/// Failure of a repository call.
///
/// Foreign-key and date rejections are pulled out of the generic store error
/// so the HTTP layer can answer them with a client error instead of a 500.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The store refused the statement because of a foreign-key constraint:
    /// either an insert referenced a missing parent, or a delete targeted a
    /// row that is still referenced.
    #[error("Foreign key constraint violated ({})", .constraint.as_deref().unwrap_or("unknown"))]
    IntegrityViolation { constraint: Option<String> },

    /// The store could not read a bound value as a date (SQLSTATE 22007 or
    /// 22008), for example `2020-02-30`.
    #[error("Invalid date value")]
    InvalidDate,

    /// Connectivity, timeout or any other store failure.
    #[error("Database error: {0}")]
    Store(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // SQLSTATE 23503 on PostgreSQL.
            if matches!(db_err.kind(), ErrorKind::ForeignKeyViolation) {
                return RepoError::IntegrityViolation {
                    constraint: db_err.constraint().map(str::to_owned),
                };
            }
            if db_err
                .code()
                .is_some_and(|code| is_invalid_date_code(&code))
            {
                return RepoError::InvalidDate;
            }
        }
        RepoError::Store(err)
    }
}

/// `invalid_datetime_format` and `datetime_field_overflow`.
fn is_invalid_date_code(code: &str) -> bool {
    matches!(code, "22007" | "22008")
}
