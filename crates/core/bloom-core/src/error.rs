use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Generic IO error: {0}")]
    IoGeneric(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Relay error: {0}")]
    Relay(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
