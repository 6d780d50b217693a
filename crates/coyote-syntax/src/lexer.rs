use tracing::debug;

use crate::token::{Token, TokenKind};

/// Single-pass scanner turning schema source into tokens.
///
/// The lexer never fails. Whitespace and any character that cannot start a
/// token are consumed without producing output; malformed input surfaces as
/// a parser error instead.
pub struct Lexer<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    tokens: Vec<Token>,
}

/// Tokenize schema source. The result always ends with [`TokenKind::EndOfInput`].
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole source.
    pub fn tokenize(mut self) -> Vec<Token> {
        loop {
            self.start = self.current;
            let Some(c) = self.advance() else {
                break;
            };
            match c {
                '{' => self.push(TokenKind::LeftBrace),
                '}' => self.push(TokenKind::RightBrace),
                ':' => self.push(TokenKind::Colon),
                '?' => self.push(TokenKind::QuestionMark),
                '@' => self.descriptor(),
                c => self.literal(c),
            }
        }

        self.start = self.source.len();
        self.current = self.source.len();
        self.push(TokenKind::EndOfInput);

        debug!(tokens = self.tokens.len(), "tokenized schema source");
        self.tokens
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn consume_while(&mut self, accept: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            self.current += c.len_utf8();
        }
    }

    fn lexeme(&self) -> &'a str {
        let source = self.source;
        &source[self.start..self.current]
    }

    fn push(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.lexeme(), self.start);
        self.tokens.push(token);
    }

    /// `@` followed by a run of letters. The `@` stays in the lexeme.
    fn descriptor(&mut self) {
        self.consume_while(is_alpha);
        self.push(TokenKind::Identifier);
    }

    fn literal(&mut self, first: char) {
        if first.is_ascii_digit() {
            self.consume_while(|c| c.is_ascii_digit());
            self.push(TokenKind::NumberLiteral);
        } else if is_alpha(first) {
            self.consume_while(|c| is_alphanumeric(c) || c == '[' || c == ']');
            let word = self
                .lexeme()
                .chars()
                .filter(|c| *c != '[' && *c != ']')
                .collect::<String>()
                .to_ascii_lowercase();
            let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier);
            self.push(kind);
        }
        // Anything else (whitespace, stray punctuation) is dropped.
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
