//! Miniature schema-definition language and validator for structured data.
//!
//! A coyote schema describes an object shape: named fields, optional scalar,
//! array or object types, and decorators such as `@format email` or `@max 120`.
//! Schema text is compiled once into an immutable tree and can then validate
//! any number of payloads.
//!
//! ```
//! use serde_json::json;
//!
//! let schema = coyote::compile("{ name: string age?: number @min 0 @max 120 }").unwrap();
//! let data = coyote::Value::from(json!({ "name": "Ann", "age": 150 }));
//! let err = coyote::validate_schema(&data, &schema).unwrap_err();
//! assert_eq!(err.errors()[0].name, "age");
//! ```
//!
//! # Crate Structure
//!
//! - [`syntax`]: Lexer, parser and printer for schema text
//! - [`validator`]: Tree-walking validator and decorators
//! - [`registry`]: Named cache of compiled schemas

pub mod config;
pub mod error;
pub mod pipeline;
pub mod registry;

/// Re-export syntax types.
pub mod syntax {
    pub use coyote_syntax::*;
}

/// Re-export validator types.
pub mod validator {
    pub use coyote_validator::*;
}

pub use config::RegistryConfig;
pub use coyote_syntax::{AbstractSyntaxTree, Field, FieldType};
pub use coyote_validator::{ValidationError, Value};
pub use error::{CoyoteError, Result};
pub use pipeline::{compile, decode, validate, validate_schema, validate_slice};
pub use registry::SchemaRegistry;
