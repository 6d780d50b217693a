//! Source text → tokens → tree → validation.

use coyote_syntax::{parse, tokenize, AbstractSyntaxTree, Field};
use coyote_validator::{Validator, Value};

use crate::error::{CoyoteError, Result};

/// Compile schema source into a reusable tree.
pub fn compile(source: &str) -> Result<AbstractSyntaxTree> {
    parse(&tokenize(source)).map_err(CoyoteError::Compile)
}

/// Decode a JSON request body into a validator value.
pub fn decode(payload: &[u8]) -> Result<Value> {
    let value: serde_json::Value = serde_json::from_slice(payload)?;
    Ok(Value::from(value))
}

/// Validate data against an already compiled schema.
pub fn validate_schema(data: &Value, schema: &[Field]) -> Result<()> {
    Validator::new().validate(data, schema)?;
    Ok(())
}

/// Compile `source` and validate `data` against it.
pub fn validate(data: &Value, source: &str) -> Result<()> {
    let schema = compile(source)?;
    validate_schema(data, &schema)
}

/// Decode a JSON payload, compile `source`, and validate.
///
/// The payload is decoded first, so malformed input is reported even when the
/// schema is also broken.
pub fn validate_slice(payload: &[u8], source: &str) -> Result<()> {
    let data = decode(payload)?;
    validate(&data, source)
}
