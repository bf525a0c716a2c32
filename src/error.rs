// src/error.rs
//! Public error type for the entire crate

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("configuration file not found: {0}; create it from the template before launching")]
    ConfigurationMissing(PathBuf),

    #[error("key generation failed: {0}")]
    KeyGenerationFailed(String),

    #[error("failed to persist configuration: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("clipboard unavailable")]
    ClipboardUnavailable,

    #[error("clipboard write failed: {0}")]
    ClipboardFailed(String),

    #[error("confirmation surface unavailable")]
    ConfirmationUnavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),
}
