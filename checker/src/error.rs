// checker/src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type CheckResult<T> = Result<T, CheckError>;
