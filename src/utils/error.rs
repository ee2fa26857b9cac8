use crate::domain::model::FilenameViolation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Version string is empty")]
    EmptyVersion,

    #[error("Invalid file name: {0}")]
    InvalidFileName(#[from] FilenameViolation),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, HelperError>;
