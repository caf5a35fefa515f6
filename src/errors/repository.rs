use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match &err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db_err) => match db_err.code().as_deref() {
                // 23505 unique_violation, 23503 foreign_key_violation
                Some("23505") => RepositoryError::AlreadyExists(db_err.message().to_string()),
                Some("23503") => RepositoryError::ForeignKey(db_err.message().to_string()),
                _ => RepositoryError::Sqlx(err),
            },
            _ => RepositoryError::Sqlx(err),
        }
    }
}
