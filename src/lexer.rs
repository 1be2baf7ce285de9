use std::iter::FusedIterator;

use crate::token::{Span, Token, TokenKind};

/// Tokenize a command-line string.
///
/// Tokens are produced lazily, left to right, and the sequence always
/// ends with exactly one [`TokenKind::End`] token. Tokenizing never
/// fails: an unclosed quote comes out as
/// [`TokenKind::UnterminatedString`] and is reported by the parser.
#[must_use]
pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens::new(input)
}

/// Lazy, one-shot token stream over a command-line string.
#[derive(Debug)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
    finished: bool,
}

impl<'a> Tokens<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            finished: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.char_after(0)
    }

    /// Character starting `bytes` bytes past the cursor.
    fn char_after(&self, bytes: usize) -> Option<char> {
        self.input.get(self.pos + bytes..)?.chars().next()
    }

    fn starts_identifier(&self, bytes: usize) -> bool {
        self.char_after(bytes).is_some_and(char::is_alphanumeric)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn read_word(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || matches!(ch, ':' | '=' | '"') {
                break;
            }
            self.advance();
        }
    }

    fn read_quoted_string(&mut self) -> TokenKind {
        self.advance(); // opening quote
        loop {
            match self.peek() {
                None => return TokenKind::UnterminatedString,
                Some('\\') if self.char_after(1) == Some('"') => {
                    self.pos += 2;
                }
                Some('"') => {
                    self.advance();
                    return TokenKind::QuotedString;
                }
                Some(_) => self.advance(),
            }
        }
    }

    fn classify(&mut self, ch: char) -> TokenKind {
        match ch {
            c if c.is_whitespace() => {
                self.skip_whitespace();
                TokenKind::Whitespace
            }
            '"' => self.read_quoted_string(),
            ':' => {
                self.advance();
                TokenKind::Colon
            }
            '=' => {
                self.advance();
                TokenKind::Equals
            }
            '/' if self.starts_identifier(1) => {
                self.advance();
                self.read_word();
                TokenKind::WindowsWord
            }
            '-' if self.char_after(1) == Some('-') && self.starts_identifier(2) => {
                self.pos += 2;
                self.read_word();
                TokenKind::LongWord
            }
            '-' if self.starts_identifier(1) => {
                self.advance();
                self.read_word();
                TokenKind::ShortWord
            }
            _ => {
                // A lone prefix character is ordinary word content.
                self.advance();
                self.read_word();
                TokenKind::BareWord
            }
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let start = self.pos;
        let kind = match self.peek() {
            Some(ch) => self.classify(ch),
            None => {
                self.finished = true;
                TokenKind::End
            }
        };

        let token = Token {
            kind,
            text: self.input[start..self.pos].to_string(),
            span: Span::new(start, self.pos - start),
        };
        log::trace!("token {:?} {:?} at {}", token.kind, token.text, start);
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}
