/// Errors raised while parsing schema tokens.
///
/// Parsing is fail-fast: the first grammar violation aborts and no partial
/// tree is returned. `position` is the byte offset of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// An object did not start with `{`.
    #[error("Parser Error: Expecting object literal '{{'.")]
    ExpectedObject { position: usize },

    /// An object was not closed with `}`.
    #[error("Parser Error: Expecting '}}' after object properties.")]
    ExpectedClosingBrace { position: usize },

    /// A property did not start with a name.
    #[error("Parser Error: Expecting identifier.")]
    ExpectedIdentifier { position: usize },

    /// No scalar type keyword and no nested object followed the name.
    #[error("Parser Error: Unknown datatype provided.")]
    UnknownDatatype { position: usize },

    /// A scalar type appeared without a leading `:`.
    #[error("Parser Error: A scalar datatype has to be preceded by a colon.")]
    MissingColon { position: usize },

    /// Objects were nested deeper than [`MAX_DEPTH`](crate::parser::MAX_DEPTH).
    #[error("Parser Error: Objects are nested too deeply.")]
    NestingTooDeep { position: usize },

    /// A numeric decorator argument does not fit in a finite `f64`.
    #[error("Parser Error: Numeric literal is out of range.")]
    NumberOutOfRange { position: usize },
}

impl SyntaxError {
    pub fn position(&self) -> usize {
        match self {
            Self::ExpectedObject { position }
            | Self::ExpectedClosingBrace { position }
            | Self::ExpectedIdentifier { position }
            | Self::UnknownDatatype { position }
            | Self::MissingColon { position }
            | Self::NestingTooDeep { position }
            | Self::NumberOutOfRange { position } => *position,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
