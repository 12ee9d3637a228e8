use thiserror::Error;

/// Failures surfaced by the record store boundary.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("record not found")]
    NotFound,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
