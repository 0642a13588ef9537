//! Unified error types for swagsuite

use thiserror::Error;

/// Unified error type for all swagsuite operations
#[derive(Error, Debug)]
pub enum SwagError {
    // Browser errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Timed out after {timeout_secs}s waiting for {what}")]
    Timeout { what: String, timeout_secs: u64 },

    #[error("Unsupported browser engine: {0}")]
    UnsupportedEngine(String),

    // Harness errors
    #[error("Unknown fixture: {0}")]
    UnknownFixture(String),

    #[error("Fixture dependency cycle: {0}")]
    FixtureCycle(String),

    #[error("Fixture '{name}' produced an unexpected type")]
    FixtureType { name: String },

    #[error("Fixture '{name}' setup failed: {reason}")]
    FixtureSetup { name: String, reason: String },

    #[error("Screenshot capture failed: {0}")]
    ScreenshotFailed(String),

    #[error("Artifact storage failed: {0}")]
    Artifact(String),

    // Configuration errors
    #[error("Invalid configuration value for {key}: {value}")]
    Config { key: String, value: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using SwagError
pub type Result<T> = std::result::Result<T, SwagError>;
