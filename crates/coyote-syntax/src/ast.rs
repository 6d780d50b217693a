use std::fmt;

use serde::{Serialize, Serializer};

/// Parse result: the top-level fields of the outermost object literal.
pub type AbstractSyntaxTree = Vec<Field>;

/// Declared datatype of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Number,
    Boolean,
    StringArray,
    NumberArray,
    BooleanArray,
    /// Nested object; the only type that carries children.
    Object,
}

impl FieldType {
    /// Resolve a type keyword lexeme such as `number` or `String[]`.
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme.to_ascii_lowercase().as_str() {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "string[]" => Some(Self::StringArray),
            "number[]" => Some(Self::NumberArray),
            "boolean[]" => Some(Self::BooleanArray),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::StringArray => "string[]",
            Self::NumberArray => "number[]",
            Self::BooleanArray => "boolean[]",
            Self::Object => "object",
        }
    }

    /// Element type of an array type, `None` for everything else.
    pub fn element(self) -> Option<Self> {
        match self {
            Self::StringArray => Some(Self::String),
            Self::NumberArray => Some(Self::Number),
            Self::BooleanArray => Some(Self::Boolean),
            _ => None,
        }
    }

    pub fn is_scalar(self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Boolean)
    }

    pub fn is_array(self) -> bool {
        self.element().is_some()
    }

    pub fn is_object(self) -> bool {
        self == Self::Object
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Positional decorator argument, coerced from its token kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Argument {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Argument {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

/// A named constraint attached to a field, e.g. `@max 120`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decorator {
    pub name: String,
    pub arguments: Vec<Argument>,
}

impl Decorator {
    pub fn new(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// One declared property of an object schema.
///
/// `children` is only populated for [`FieldType::Object`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub optional: bool,
    pub decorators: Vec<Decorator>,
    pub children: Vec<Field>,
}

impl Field {
    /// A field with no decorators and no children.
    pub fn new(name: impl Into<String>, field_type: FieldType, optional: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            optional,
            decorators: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_decorator(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn with_children(mut self, children: Vec<Field>) -> Self {
        self.children = children;
        self
    }
}
