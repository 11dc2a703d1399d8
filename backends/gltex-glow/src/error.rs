//! Error types for the glow backend

use thiserror::Error;

/// Errors that can occur during backend initialization
#[derive(Error, Debug)]
pub enum InitError {
    /// The context lacks immutable texture storage or sampler objects
    #[error("Unsupported OpenGL version: {0}")]
    UnsupportedVersion(String),
}

/// Result type for initialization operations
pub type InitResult<T> = Result<T, InitError>;
