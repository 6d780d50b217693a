use std::fmt;

use serde::Serialize;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Opening brace `{`.
    LeftBrace,
    /// Closing brace `}`.
    RightBrace,
    /// Type separator `:`.
    Colon,
    /// Optional marker `?`.
    QuestionMark,
    /// Field name, decorator argument or `@`-prefixed decorator name.
    Identifier,
    /// Run of ASCII digits.
    NumberLiteral,
    StringKeyword,
    NumberKeyword,
    BooleanKeyword,
    True,
    False,
    /// Always the last token of a stream.
    EndOfInput,
}

impl TokenKind {
    /// Map a bracket-stripped, lowercased lexeme onto its keyword kind.
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "string" => Some(Self::StringKeyword),
            "number" => Some(Self::NumberKeyword),
            "boolean" => Some(Self::BooleanKeyword),
            _ => None,
        }
    }

    /// Whether this kind names a scalar datatype.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            Self::StringKeyword | Self::NumberKeyword | Self::BooleanKeyword
        )
    }

    /// Whether a token of this kind may appear as a decorator argument.
    pub fn is_argument(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::NumberLiteral | Self::True | Self::False
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Colon => "COLON",
            Self::QuestionMark => "QMARK",
            Self::Identifier => "IDENTIFIER",
            Self::NumberLiteral => "NUMBER_LITERAL",
            Self::StringKeyword => "STRING",
            Self::NumberKeyword => "NUMBER",
            Self::BooleanKeyword => "BOOLEAN",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexeme with its kind and location in the source.
///
/// `position` and `length` are byte offsets into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: usize,
    pub length: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        let lexeme = lexeme.into();
        let length = lexeme.len();
        Self {
            kind,
            lexeme,
            position,
            length,
        }
    }

    /// Whether this token opens a decorator (`@name`).
    pub fn is_descriptor(&self) -> bool {
        self.lexeme.starts_with('@')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_exact() {
        assert_eq!(TokenKind::keyword("string"), Some(TokenKind::StringKeyword));
        assert_eq!(TokenKind::keyword("false"), Some(TokenKind::False));
        assert_eq!(TokenKind::keyword("String"), None);
        assert_eq!(TokenKind::keyword("object"), None);
    }

    #[test]
    fn token_length_tracks_lexeme() {
        let token = Token::new(TokenKind::Identifier, "@min", 4);
        assert_eq!(token.length, 4);
        assert!(token.is_descriptor());
    }
}
