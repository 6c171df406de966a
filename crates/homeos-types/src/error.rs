//! Error types for HomeOS.

use std::io;

/// Errors produced by the HomeOS core.
///
/// The namespace variants (`NotFound`, `AlreadyExists`, `NotEmpty`,
/// `InvalidArgument`, `Unresolvable`) are recovered at the command-handler
/// boundary and turned into a single diagnostic line; none of them is fatal
/// to a session.
#[derive(Debug, thiserror::Error)]
pub enum HomeOsError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("directory not empty: {0}")]
    NotEmpty(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot resolve parent: {0}")]
    Unresolvable(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, HomeOsError>;
