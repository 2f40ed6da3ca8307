use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(i64),

    #[error("Not found")]
    NotFound,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
