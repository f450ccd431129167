// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("failed to write Anki package: {0}")]
    Package(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
}
