use thiserror::Error;

/// Errors surfaced by the persistence layer
#[derive(Debug, Error)]
pub enum DbError {
    /// The caller referenced a row that does not exist
    #[error("record not found")]
    NotFound,

    /// A uniqueness or foreign-key constraint rejected the write
    #[error("constraint violated: {0}")]
    Conflict(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Classify a write error: constraint violations become `Conflict`,
    /// everything else passes through as a raw sqlx error.
    pub(crate) fn from_write(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db)
                if db.is_unique_violation() || db.is_foreign_key_violation() =>
            {
                DbError::Conflict(db.message().to_string())
            }
            _ => DbError::Sqlx(err),
        }
    }
}
