//! Lexer, parser and printer for the coyote schema language.
//!
//! A schema is a brace-delimited object literal:
//!
//! ```text
//! {
//!     name: string @length 3
//!     age?: number @min 0 @max 120
//!     contact {
//!         email: string @format email
//!     }
//! }
//! ```
//!
//! Source text flows through [`tokenize`] and [`parse`] into an
//! [`AbstractSyntaxTree`], which is immutable and can be shared across any
//! number of validations.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

pub use ast::{AbstractSyntaxTree, Argument, Decorator, Field, FieldType};
pub use error::{Result, SyntaxError};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, Parser, MAX_DEPTH};
pub use printer::to_source;
pub use token::{Token, TokenKind};

/// Tokenize and parse schema source in one step.
pub fn parse_source(source: &str) -> Result<AbstractSyntaxTree> {
    parse(&tokenize(source))
}
