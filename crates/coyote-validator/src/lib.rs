//! Validation of structured data against compiled coyote schemas.
//!
//! The validator walks a [`Value`] in lock-step with a parsed field tree and
//! collects every violation before reporting. Unknown keys are rejected at
//! every nesting level.

pub mod decorator;
pub mod error;
pub mod validator;
pub mod value;

pub use decorator::DecoratorKind;
pub use error::{DecoratorError, Result, ValidationError, ValidationFailed};
pub use validator::{validate, Validator};
pub use value::Value;
