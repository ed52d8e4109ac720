// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Contact too short: {len} chars (minimum {min})")]
    ContactTooShort { len: usize, min: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
