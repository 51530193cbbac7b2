//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Form input failed a format rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Clipboard access failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Core layer result alias
pub type CoreResult<T> = Result<T, CoreError>;
