//! Error types for upld-platform

use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("WORKSPACE is not set and no workspace root was given")]
    NoWorkspace,

    #[error("Workspace root is not a directory: {0}")]
    NotADirectory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
