use std::fmt;

use coyote_syntax::Argument;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DecoratorError;
use crate::value::Value;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// The fixed set of decorators a field may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecoratorKind {
    /// `@format email`
    Format,
    /// `@length n`: exact string length.
    Length,
    /// `@min n`: inclusive lower bound.
    Min,
    /// `@max n`: inclusive upper bound.
    Max,
}

impl DecoratorKind {
    pub const ALL: [Self; 4] = [Self::Format, Self::Length, Self::Min, Self::Max];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "format" => Some(Self::Format),
            "length" => Some(Self::Length),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Length => "length",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Look up a decorator by name and run it.
    pub fn resolve_and_invoke(
        name: &str,
        value: &Value,
        arguments: &[Argument],
    ) -> Result<bool, DecoratorError> {
        Self::from_name(name)
            .ok_or_else(|| DecoratorError::Unknown(name.to_string()))?
            .invoke(value, arguments)
    }

    /// Run the predicate against `value` with the declared arguments.
    ///
    /// Arguments beyond the ones a decorator reads are ignored.
    pub fn invoke(self, value: &Value, arguments: &[Argument]) -> Result<bool, DecoratorError> {
        let invalid = || DecoratorError::InvalidArguments(self.name());
        let first = arguments.first();

        match self {
            Self::Format => match first.and_then(Argument::as_str) {
                Some("email") => Ok(matches!(value, Value::String(s) if EMAIL.is_match(s))),
                _ => Err(invalid()),
            },
            Self::Length => match (value, first.and_then(Argument::as_number)) {
                (Value::String(s), Some(n)) => Ok(s.encode_utf16().count() as f64 == n),
                _ => Err(invalid()),
            },
            Self::Min => match (value, first.and_then(Argument::as_number)) {
                (Value::Number(v), Some(n)) => Ok(*v >= n),
                _ => Err(invalid()),
            },
            Self::Max => match (value, first.and_then(Argument::as_number)) {
                (Value::Number(v), Some(n)) => Ok(*v <= n),
                _ => Err(invalid()),
            },
        }
    }
}

impl fmt::Display for DecoratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
