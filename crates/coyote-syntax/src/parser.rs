use tracing::debug;

use crate::ast::{AbstractSyntaxTree, Argument, Decorator, Field, FieldType};
use crate::error::{Result, SyntaxError};
use crate::token::{Token, TokenKind};

/// Recursive-descent parser over a token stream, one method per grammar rule:
///
/// ```text
/// object      := '{' property* '}'
/// property    := identifier optional type decorators object?
/// identifier  := IDENTIFIER
/// optional    := '?'?
/// type        := (':' (STRING | NUMBER | BOOLEAN))?
/// decorators  := ('@' IDENTIFIER (IDENTIFIER | NUMBER_LITERAL | TRUE | FALSE)*)*
/// ```
pub struct Parser<'t> {
    tokens: &'t [Token],
    current: usize,
    depth: usize,
}

/// Maximum number of nested objects, the root included.
pub const MAX_DEPTH: usize = 128;

/// Parse a token stream into the top-level fields of the outermost object.
pub fn parse(tokens: &[Token]) -> Result<AbstractSyntaxTree> {
    Parser::new(tokens).parse()
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    pub fn parse(mut self) -> Result<AbstractSyntaxTree> {
        let fields = self.object()?;
        debug!(fields = fields.len(), "parsed schema");
        Ok(fields)
    }

    fn peek(&self, offset: usize) -> Option<&'t Token> {
        self.tokens.get(self.current + offset)
    }

    fn finished(&self) -> bool {
        self.peek(0)
            .is_none_or(|token| token.kind == TokenKind::EndOfInput)
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.finished() && self.peek(0).is_some_and(|token| token.kind == kind)
    }

    /// Byte offset used for error reporting.
    fn position(&self) -> usize {
        match self.peek(0) {
            Some(token) => token.position,
            None => self
                .tokens
                .last()
                .map(|token| token.position + token.length)
                .unwrap_or(0),
        }
    }

    /// Consume the current token if its kind is one of `kinds`.
    fn accept(&mut self, kinds: &[TokenKind]) -> Option<&'t Token> {
        let token = self.peek(0)?;
        if !kinds.contains(&token.kind) {
            return None;
        }
        if token.kind != TokenKind::EndOfInput {
            self.current += 1;
        }
        Some(token)
    }

    fn object(&mut self) -> Result<Vec<Field>> {
        let position = self.position();
        if self.accept(&[TokenKind::LeftBrace]).is_none() {
            return Err(SyntaxError::ExpectedObject { position });
        }
        if self.depth == MAX_DEPTH {
            return Err(SyntaxError::NestingTooDeep { position });
        }

        self.depth += 1;
        let fields = self.properties();
        self.depth -= 1;
        fields
    }

    fn properties(&mut self) -> Result<Vec<Field>> {
        let mut fields = Vec::new();
        while !self.finished() && !self.check(TokenKind::RightBrace) {
            fields.push(self.property()?);
        }

        if self.accept(&[TokenKind::RightBrace]).is_none() {
            return Err(SyntaxError::ExpectedClosingBrace {
                position: self.position(),
            });
        }
        Ok(fields)
    }

    fn property(&mut self) -> Result<Field> {
        let name = self.identifier()?;
        let optional = self.optional();
        let field_type = self.field_type()?;
        let decorators = self.decorators()?;
        let children = if field_type.is_object() {
            self.object()?
        } else {
            Vec::new()
        };

        Ok(Field {
            name,
            field_type,
            optional,
            decorators,
            children,
        })
    }

    fn identifier(&mut self) -> Result<String> {
        match self.accept(&[TokenKind::Identifier]) {
            Some(token) => Ok(token.lexeme.clone()),
            None => Err(SyntaxError::ExpectedIdentifier {
                position: self.position(),
            }),
        }
    }

    fn optional(&mut self) -> bool {
        self.accept(&[TokenKind::QuestionMark]).is_some()
    }

    /// Scalar types need a colon; a nested object is inferred from a following `{`.
    fn field_type(&mut self) -> Result<FieldType> {
        let colon = self.accept(&[TokenKind::Colon]).is_some();
        let position = self.position();

        let keyword = self.accept(&[
            TokenKind::StringKeyword,
            TokenKind::NumberKeyword,
            TokenKind::BooleanKeyword,
        ]);
        match keyword {
            Some(token) => {
                let field_type = FieldType::from_lexeme(&token.lexeme)
                    .ok_or(SyntaxError::UnknownDatatype { position })?;
                if !colon {
                    return Err(SyntaxError::MissingColon { position });
                }
                Ok(field_type)
            }
            None if self.peek(0).is_some_and(|t| t.kind == TokenKind::LeftBrace) => {
                Ok(FieldType::Object)
            }
            None => Err(SyntaxError::UnknownDatatype { position }),
        }
    }

    fn decorators(&mut self) -> Result<Vec<Decorator>> {
        let mut decorators = Vec::new();

        while self.at_descriptor() {
            let Some(descriptor) = self.accept(&[TokenKind::Identifier]) else {
                break;
            };
            let name = descriptor
                .lexeme
                .strip_prefix('@')
                .unwrap_or(&descriptor.lexeme);

            let mut arguments = Vec::new();
            while !self.at_property_boundary() && !self.at_descriptor() {
                let Some(token) = self.accept(&[
                    TokenKind::Identifier,
                    TokenKind::NumberLiteral,
                    TokenKind::True,
                    TokenKind::False,
                ]) else {
                    break;
                };
                arguments.push(argument(token)?);
            }

            decorators.push(Decorator::new(name, arguments));
        }

        Ok(decorators)
    }

    fn at_descriptor(&self) -> bool {
        self.peek(0).is_some_and(Token::is_descriptor)
    }

    /// The token after the next one starts a property when it is `?`, `:` or `{`,
    /// which makes the next token a property name rather than an argument.
    fn at_property_boundary(&self) -> bool {
        self.peek(1).is_some_and(|token| {
            matches!(
                token.kind,
                TokenKind::QuestionMark | TokenKind::Colon | TokenKind::LeftBrace
            )
        })
    }
}

fn argument(token: &Token) -> Result<Argument> {
    let argument = match token.kind {
        TokenKind::True => Argument::Boolean(true),
        TokenKind::False => Argument::Boolean(false),
        TokenKind::NumberLiteral => match token.lexeme.parse::<f64>() {
            Ok(number) if number.is_finite() => Argument::Number(number),
            _ => {
                return Err(SyntaxError::NumberOutOfRange {
                    position: token.position,
                })
            }
        },
        _ => Argument::String(token.lexeme.clone()),
    };
    Ok(argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_str(source: &str) -> Result<AbstractSyntaxTree> {
        parse(&tokenize(source))
    }

    #[test]
    fn empty_object() {
        assert!(parse_str("{}").unwrap().is_empty());
    }

    #[test]
    fn scalar_fields_with_optional_marker() {
        let ast = parse_str("{ name: string age?: number active: boolean }").unwrap();
        assert_eq!(
            ast,
            vec![
                Field::new("name", FieldType::String, false),
                Field::new("age", FieldType::Number, true),
                Field::new("active", FieldType::Boolean, false),
            ]
        );
    }

    #[test]
    fn array_types() {
        let ast = parse_str("{ tags: string[] scores?: number[] flags: Boolean[] }").unwrap();
        let types: Vec<FieldType> = ast.iter().map(|f| f.field_type).collect();
        assert_eq!(
            types,
            vec![
                FieldType::StringArray,
                FieldType::NumberArray,
                FieldType::BooleanArray
            ]
        );
    }

    #[test]
    fn nested_object_without_colon() {
        let ast = parse_str("{ contact { email: string } }").unwrap();
        assert_eq!(ast.len(), 1);
        assert_eq!(ast[0].field_type, FieldType::Object);
        assert_eq!(
            ast[0].children,
            vec![Field::new("email", FieldType::String, false)]
        );
    }

    #[test]
    fn nested_object_with_colon_and_optional() {
        let ast = parse_str("{ meta?: { depth { level: number } } }").unwrap();
        assert!(ast[0].optional);
        assert_eq!(ast[0].children[0].name, "depth");
        assert_eq!(ast[0].children[0].children[0].field_type, FieldType::Number);
    }

    #[test]
    fn empty_nested_object_has_no_children() {
        let ast = parse_str("{ blob {} }").unwrap();
        assert_eq!(ast[0].field_type, FieldType::Object);
        assert!(ast[0].children.is_empty());
    }

    #[test]
    fn decorators_with_arguments() {
        let ast = parse_str("{ name: string age?: number @min 0 @max 120 }").unwrap();
        assert!(ast[0].decorators.is_empty());
        assert_eq!(
            ast[1].decorators,
            vec![
                Decorator::new("min", vec![Argument::Number(0.0)]),
                Decorator::new("max", vec![Argument::Number(120.0)]),
            ]
        );
    }

    #[test]
    fn decorator_argument_kinds() {
        let ast = parse_str("{ a: string @custom word 7 true FALSE }").unwrap();
        assert_eq!(
            ast[0].decorators[0].arguments,
            vec![
                Argument::String("word".into()),
                Argument::Number(7.0),
                Argument::Boolean(true),
                Argument::Boolean(false),
            ]
        );
    }

    #[test]
    fn decorator_arguments_stop_before_next_property() {
        let ast =
            parse_str("{ email: string @format email name: string next? : number }").unwrap();
        assert_eq!(ast.len(), 3);
        assert_eq!(
            ast[0].decorators,
            vec![Decorator::new(
                "format",
                vec![Argument::String("email".into())]
            )]
        );
        assert_eq!(ast[1].name, "name");
        assert_eq!(ast[2].name, "next");
    }

    #[test]
    fn decorator_arguments_stop_before_nested_object() {
        let ast = parse_str("{ code: string @length 3 contact { email: string } }").unwrap();
        assert_eq!(ast[0].decorators[0].arguments, vec![Argument::Number(3.0)]);
        assert_eq!(ast[1].name, "contact");
        assert_eq!(ast[1].children.len(), 1);
    }

    #[test]
    fn decorator_without_arguments() {
        let ast = parse_str("{ a: string @trim b: number }").unwrap();
        assert_eq!(ast[0].decorators, vec![Decorator::new("trim", vec![])]);
        assert_eq!(ast[1].name, "b");
    }

    #[test]
    fn missing_colon_before_scalar() {
        let err = parse_str("{ name string }").unwrap_err();
        assert!(matches!(err, SyntaxError::MissingColon { position: 7 }));
        assert!(err.to_string().contains("preceded by a colon"));
    }

    #[test]
    fn unknown_datatype() {
        let err = parse_str("{ name: text }").unwrap_err();
        assert_eq!(err.to_string(), "Parser Error: Unknown datatype provided.");
    }

    #[test]
    fn malformed_keyword_is_unknown_datatype() {
        let err = parse_str("{ name: string[][] }").unwrap_err();
        assert!(matches!(err, SyntaxError::UnknownDatatype { .. }));
    }

    #[test]
    fn missing_opening_brace() {
        let err = parse_str("name: string").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parser Error: Expecting object literal '{'."
        );
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn missing_closing_brace() {
        let err = parse_str("{ name: string").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parser Error: Expecting '}' after object properties."
        );
        assert_eq!(err.position(), "{ name: string".len());
    }

    #[test]
    fn property_must_start_with_identifier() {
        let err = parse_str("{ : string }").unwrap_err();
        assert_eq!(err.to_string(), "Parser Error: Expecting identifier.");
    }

    #[test]
    fn trailing_tokens_after_root_object_are_ignored() {
        let ast = parse_str("{ a: number } trailing").unwrap();
        assert_eq!(ast.len(), 1);
    }

    fn nested(levels: usize) -> String {
        let mut source = String::from("{ ");
        for _ in 1..levels {
            source.push_str("a { ");
        }
        for _ in 1..levels {
            source.push_str("} ");
        }
        source.push('}');
        source
    }

    #[test]
    fn nesting_up_to_limit_parses() {
        let ast = parse_str(&nested(MAX_DEPTH)).unwrap();
        let mut depth = 1;
        let mut fields = &ast;
        while let Some(field) = fields.first() {
            depth += 1;
            fields = &field.children;
        }
        assert_eq!(depth, MAX_DEPTH);
    }

    #[test]
    fn nesting_past_limit_is_rejected() {
        let source = nested(MAX_DEPTH + 1);
        let err = parse_str(&source).unwrap_err();
        assert!(matches!(err, SyntaxError::NestingTooDeep { .. }));
        assert_eq!(err.to_string(), "Parser Error: Objects are nested too deeply.");
        assert_eq!(err.position(), 2 + 4 * (MAX_DEPTH - 1) + 2);
    }

    #[test]
    fn very_deep_nesting_fails_without_overflow() {
        let err = parse_str(&nested(100_000)).unwrap_err();
        assert!(matches!(err, SyntaxError::NestingTooDeep { .. }));
    }

    #[test]
    fn overlong_number_argument_is_rejected() {
        let source = format!("{{ a: number @max {} }}", "9".repeat(400));
        let err = parse_str(&source).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::NumberOutOfRange {
                position: "{ a: number @max ".len()
            }
        );
    }

    #[test]
    fn tokens_without_end_marker() {
        let tokens = vec![
            Token::new(TokenKind::LeftBrace, "{", 0),
            Token::new(TokenKind::RightBrace, "}", 1),
        ];
        assert!(parse(&tokens).unwrap().is_empty());
        assert!(matches!(
            parse(&[]),
            Err(SyntaxError::ExpectedObject { position: 0 })
        ));
    }
}
