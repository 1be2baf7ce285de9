use std::fmt;

/// Byte range in the original input, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub offset: usize,
    pub length: usize,
}

impl Span {
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Offset one past the last byte covered.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of whitespace. Never reaches the grammar.
    Whitespace,
    /// Double-quoted string (`"..."`), quotes and escapes kept verbatim.
    QuotedString,
    /// Double-quoted string that runs off the end of the input.
    UnterminatedString,
    /// Unprefixed word.
    BareWord,
    /// Separator `:`.
    Colon,
    /// Separator `=`.
    Equals,
    /// Windows-style switch (`/Name`).
    WindowsWord,
    /// Unix-style long parameter (`--name`).
    LongWord,
    /// Unix-style short flag group (`-abc`).
    ShortWord,
    /// End of input.
    End,
}

impl TokenKind {
    /// Whether a token of this kind can stand as a value.
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(self, Self::BareWord | Self::QuotedString)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Whitespace => "whitespace",
            Self::QuotedString => "quoted string",
            Self::UnterminatedString => "unterminated quoted string",
            Self::BareWord => "word",
            Self::Colon => "':'",
            Self::Equals => "'='",
            Self::WindowsWord => "'/' switch",
            Self::LongWord => "'--' parameter",
            Self::ShortWord => "'-' flags",
            Self::End => "end of input",
        };
        f.write_str(name)
    }
}

/// A single token with its kind, source text, and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
