use coyote_syntax::SyntaxError;
use coyote_validator::{ValidationError, ValidationFailed};

/// Errors surfaced by the coyote entry points.
#[derive(Debug, thiserror::Error)]
pub enum CoyoteError {
    /// The schema source could not be parsed.
    #[error("Error compiling schema: {0}")]
    Compile(#[from] SyntaxError),

    /// The payload is not valid JSON.
    #[error("Input error: {0}")]
    Input(#[from] serde_json::Error),

    /// One or more fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationFailed),

    /// A schema file could not be loaded.
    #[error("failed to load schema: {0}")]
    LoadFailed(String),

    /// No schema registered under the given name.
    #[error("no schema registered under '{0}'")]
    NoSchema(String),
}

impl CoyoteError {
    /// Field-level errors carried by a validation failure; empty otherwise.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(failed) => &failed.errors,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, CoyoteError>;
