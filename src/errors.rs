use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::model::BoothId;

// Errors raised while building or loading a floor plan.
#[derive(Error, Debug)]
pub enum FloorError {
    #[error("Floor file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate booth id {id} on line {line}")]
    DuplicateBooth { id: BoothId, line: usize },

    #[error("Duplicate booth id {id} at position {position}")]
    DuplicateBoothAt { id: BoothId, position: usize },

    #[error("Unknown booth attribute '{attr}' on line {line}")]
    UnknownAttribute { attr: String, line: usize },

    #[error("Empty price value on line {line}")]
    EmptyPrice { line: usize },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Floor error: {0}")]
    Floor(#[from] FloorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

pub type AppResult<T> = Result<T, AppError>;
