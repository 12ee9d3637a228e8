use thiserror::Error;

use crate::repository::RepositoryError;

pub mod auth;
pub mod menu;
pub mod orders;
pub mod tables;

/// Failures surfaced by the service boundary. Routes translate these into
/// flash messages or degraded views; nothing propagates further as a fault.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Form(String),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Render an amount of cents as a decimal string for display.
pub(crate) fn format_price(cents: i32) -> String {
    format!("{:.2}", cents as f64 / 100.0)
}
