use std::borrow::Cow;
use std::fmt;

use crate::ast::{
    Argument, Assignment, CommandLine, DefaultParameter, Parameter, ParameterStyle, Terminal, Value,
};
use crate::lexer::tokenize;
use crate::token::{Span, Token, TokenKind};

/// Token kinds that may appear where a value is required.
const VALUE_KINDS: [TokenKind; 2] = [TokenKind::BareWord, TokenKind::QuotedString];

/// Token kinds that may start a top-level argument, or end the input.
const ARGUMENT_KINDS: [TokenKind; 6] = [
    TokenKind::BareWord,
    TokenKind::QuotedString,
    TokenKind::WindowsWord,
    TokenKind::LongWord,
    TokenKind::ShortWord,
    TokenKind::End,
];

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Quoted string opened but never closed.
    UnterminatedQuote,
    /// Separator consumed with no value after it.
    MissingValue { separator: String },
    /// Token that no production accepts at this position.
    UnexpectedToken { found: TokenKind, text: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedQuote => write!(f, "unterminated quoted string"),
            Self::MissingValue { separator } => {
                write!(f, "missing value after '{separator}'")
            }
            Self::UnexpectedToken {
                found: TokenKind::End,
                ..
            } => write!(f, "unexpected end of input"),
            Self::UnexpectedToken {
                found: found @ (TokenKind::Colon | TokenKind::Equals),
                ..
            } => write!(f, "unexpected {found}"),
            Self::UnexpectedToken { found, text } => {
                write!(f, "unexpected {found} '{text}'")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {}, expected {}", span.offset, describe_expected(expected))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// Token kinds that would have been accepted instead.
    pub expected: Vec<TokenKind>,
}

fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} or {last}", init.join(", "))
        }
    }
}

/// Tokenize and parse a command-line string.
///
/// # Errors
///
/// Returns `ParseError` on an unterminated quote, a separator with no
/// value, or a token out of place. No partial tree is produced.
pub fn parse(input: &str) -> Result<CommandLine, ParseError> {
    let tokens: Vec<Token> = tokenize(input).collect();
    let result = Parser::new(&tokens).parse();
    match &result {
        Ok(cl) => log::debug!("parsed {} argument(s)", cl.arguments.len()),
        Err(e) => log::debug!("parse failed: {e}"),
    }
    result
}

/// Parse an already tokenized command line.
///
/// Whitespace tokens are skipped. A slice without a
/// [`TokenKind::End`] is treated as if it ended with one; any
/// non-whitespace token after `End` is an `UnexpectedToken` error.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_tokens(tokens: &[Token]) -> Result<CommandLine, ParseError> {
    let tokens: Cow<'_, [Token]> = if tokens.iter().any(|t| t.kind == TokenKind::End) {
        Cow::Borrowed(tokens)
    } else {
        let offset = tokens.last().map_or(0, |t| t.span.end());
        let mut owned = tokens.to_vec();
        owned.push(Token {
            kind: TokenKind::End,
            text: String::new(),
            span: Span::new(offset, 0),
        });
        Cow::Owned(owned)
    };
    Parser::new(&tokens).parse()
}

/// Recursive-descent parser over a token slice ending in `End`.
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<CommandLine, ParseError> {
        let mut arguments = Vec::new();

        loop {
            let token = self.peek();
            match ParameterStyle::from_token(token.kind) {
                Some(style) => {
                    arguments.push(Argument::Parameter(self.parse_parameter(style)?));
                }
                None if token.kind == TokenKind::End => break,
                None => {
                    arguments.push(Argument::Default(self.parse_default_parameter()?));
                }
            }
        }

        self.expect_nothing_after_end()?;
        Ok(CommandLine { arguments })
    }

    /// Reject tokens trailing the `End` marker in a hand-built slice.
    fn expect_nothing_after_end(&self) -> Result<(), ParseError> {
        let trailing = self.tokens[self.pos + 1..]
            .iter()
            .find(|t| t.kind != TokenKind::Whitespace);
        match trailing {
            None => Ok(()),
            Some(token) => Err(ParseError {
                kind: ParseErrorKind::UnexpectedToken {
                    found: token.kind,
                    text: token.text.clone(),
                },
                span: token.span,
                expected: Vec::new(),
            }),
        }
    }

    fn parse_default_parameter(&mut self) -> Result<DefaultParameter, ParseError> {
        log::trace!("default parameter at {}", self.peek().span.offset);
        let value = self.expect_value(None, &ARGUMENT_KINDS)?;
        Ok(DefaultParameter { value })
    }

    fn parse_parameter(&mut self, style: ParameterStyle) -> Result<Parameter, ParseError> {
        let name = Terminal::from(self.bump());
        log::trace!("{style:?} parameter {:?}", name.text);

        // Short flag groups never take a value.
        let assignment = match style.separator() {
            Some(kind) if self.peek().kind == kind => {
                let separator = Terminal::from(self.bump());
                let value = Value {
                    terminal: self.expect_value(Some(&separator), &VALUE_KINDS)?,
                };
                Some(Assignment { separator, value })
            }
            _ => None,
        };

        Ok(Parameter {
            style,
            name,
            assignment,
        })
    }

    /// Consume a bare word or quoted string.
    ///
    /// `after` is the separator just consumed, if any; it turns a
    /// missing value into `MissingValue` instead of `UnexpectedToken`.
    fn expect_value(
        &mut self,
        after: Option<&Terminal>,
        expected: &[TokenKind],
    ) -> Result<Terminal, ParseError> {
        let token = self.peek();
        let kind = match token.kind {
            value if value.is_value() => {
                self.bump();
                return Ok(Terminal::from(token));
            }
            TokenKind::UnterminatedString => ParseErrorKind::UnterminatedQuote,
            found => match after {
                Some(separator) => ParseErrorKind::MissingValue {
                    separator: separator.text.clone(),
                },
                None => ParseErrorKind::UnexpectedToken {
                    found,
                    text: token.text.clone(),
                },
            },
        };

        Err(ParseError {
            kind,
            span: token.span,
            expected: expected.to_vec(),
        })
    }

    /// Next non-whitespace token; sticks at `End`.
    fn peek(&mut self) -> &'a Token {
        while self.pos < self.tokens.len() - 1
            && self.tokens[self.pos].kind == TokenKind::Whitespace
        {
            self.pos += 1;
        }
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> &'a Token {
        let token = self.peek();
        if token.kind != TokenKind::End {
            self.pos += 1;
        }
        token
    }
}
