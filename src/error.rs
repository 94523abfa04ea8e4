//! Error types for navigation config loading

use thiserror::Error;

/// Errors raised while loading a navigation tree
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Failed to parse navigation config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Navigation link '{name}' has an empty route")]
    EmptyRoute { name: String },

    #[error("Navigation link to '{route}' has an empty name")]
    EmptyName { route: String },
}

/// Result type for navigation config operations
pub type NavResult<T> = Result<T, NavError>;
