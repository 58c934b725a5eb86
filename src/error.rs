use thiserror::Error;

pub type Result<T> = std::result::Result<T, QcError>;

#[derive(Debug, Error)]
pub enum QcError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid ticket status: {0}")]
    InvalidStatus(String),

    #[error("Invalid ticket priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid sprint status: {0}")]
    InvalidSprintStatus(String),

    #[error("Invalid alert type: {0}")]
    InvalidAlertType(String),

    #[error("Unknown view: {0}")]
    InvalidRoute(String),

    #[error("Invalid tickets per page: {0}. Valid values: 10, 20, 50, 100")]
    InvalidTicketsPerPage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
