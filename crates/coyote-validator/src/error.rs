use std::fmt;

use serde::Serialize;

/// One failed check, keyed by the dotted path of the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub name: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// Aggregate failure raised once the whole tree has been walked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed with {} errors.", .errors.len())]
pub struct ValidationFailed {
    pub errors: Vec<ValidationError>,
}

/// Errors that can occur while invoking a decorator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecoratorError {
    /// No decorator is registered under this name.
    #[error("unknown decorator '{0}'")]
    Unknown(String),

    /// The value or the declared arguments have the wrong shape.
    #[error("Decorator '{0}' could not be invoked. Invalid arguments provided.")]
    InvalidArguments(&'static str),
}

/// Per-field failure messages.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Violation<'a> {
    #[error("Field {name} (optional: {optional}) was not passed. Consider marking it optional.")]
    NotPassed { name: &'a str, optional: bool },

    #[error("Field {name} (optional: {optional}, type: {passed}) does not match the defined type {expected}.")]
    TypeMismatch {
        name: &'a str,
        optional: bool,
        passed: &'static str,
        expected: &'static str,
    },

    #[error("Decorator '{decorator}' could not be invoked.")]
    DecoratorInvocation { decorator: &'a str },

    #[error("Field {name} (optional: {optional}, decorator: {decorator}) could not be validated.")]
    DecoratorRejected {
        name: &'a str,
        optional: bool,
        decorator: &'a str,
    },

    #[error("Field '{name}' is not defined within the provided schema.")]
    Undefined { name: &'a str },
}

pub type Result<T> = std::result::Result<T, ValidationFailed>;
