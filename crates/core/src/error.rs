// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// Engine operations are total and never produce one of these; only use cases
/// in front of the engine (registration intake) do.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
