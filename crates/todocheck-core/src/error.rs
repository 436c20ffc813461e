//! Unified error types for todocheck

use thiserror::Error;

/// Unified error type for all todocheck operations
#[derive(Error, Debug)]
pub enum TodoCheckError {
    // Session errors
    #[error("Session error: {0}")]
    Session(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    // Element lookup errors
    #[error("Element not found within wait bound: {selector}")]
    ElementNotFound { selector: String },

    #[error("Interaction failed on {selector}: {reason}")]
    Interaction { selector: String, reason: String },

    // In-page script errors
    #[error("Script evaluation failed: {0}")]
    Script(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using TodoCheckError
pub type Result<T> = std::result::Result<T, TodoCheckError>;
