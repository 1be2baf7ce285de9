use crate::ast::{
    Argument, Assignment, CommandLine, DefaultParameter, Parameter, ParameterStyle, Terminal, Value,
};
use crate::token::{Span, TokenKind};

/// Error produced when builder input has no parseable rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Quoting would end in `\"`, which reads as an escaped quote.
    #[error("value {0:?} ends in a backslash and cannot be quoted")]
    TrailingBackslash(String),
    /// Text that would not tokenize as a single bare word.
    #[error("{0:?} cannot be written as a bare word")]
    NotBareWord(String),
    /// Switch name that does not start with a letter or digit, or
    /// contains whitespace, a separator, or a quote.
    #[error("invalid switch name {0:?}")]
    InvalidName(String),
    /// Value attached to a short flag group.
    #[error("flag group '-{0}' cannot take a value")]
    FlagsTakeNoValue(String),
}

/// Whether `text` must be quoted to survive a parse as one value.
fn needs_quotes(text: &str) -> bool {
    text.is_empty() || text.starts_with(['/', '-']) || text.chars().any(breaks_word)
}

fn breaks_word(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | '=' | '"')
}

fn valid_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_alphanumeric) && !name.chars().any(breaks_word)
}

impl Terminal {
    /// Unquoted word.
    pub fn bare(text: &str) -> Result<Self, BuildError> {
        if needs_quotes(text) {
            return Err(BuildError::NotBareWord(text.to_string()));
        }
        Ok(Self {
            kind: TokenKind::BareWord,
            text: text.to_string(),
            span: Span::default(),
        })
    }

    /// Double-quoted string; embedded `"` are escaped as `\"`.
    pub fn quoted(text: &str) -> Result<Self, BuildError> {
        if text.ends_with('\\') {
            return Err(BuildError::TrailingBackslash(text.to_string()));
        }
        Ok(Self {
            kind: TokenKind::QuotedString,
            text: format!("\"{}\"", text.replace('"', "\\\"")),
            span: Span::default(),
        })
    }

    /// Bare word when possible, quoted string otherwise.
    pub fn value(text: &str) -> Result<Self, BuildError> {
        if needs_quotes(text) {
            Self::quoted(text)
        } else {
            Self::bare(text)
        }
    }

    fn switch_name(style: ParameterStyle, name: &str) -> Result<Self, BuildError> {
        if !valid_name(name) {
            return Err(BuildError::InvalidName(name.to_string()));
        }
        let kind = match style {
            ParameterStyle::Windows => TokenKind::WindowsWord,
            ParameterStyle::Long => TokenKind::LongWord,
            ParameterStyle::Short => TokenKind::ShortWord,
        };
        Ok(Self {
            kind,
            text: format!("{}{name}", style.prefix()),
            span: Span::default(),
        })
    }

    fn separator(kind: TokenKind) -> Self {
        let text = if kind == TokenKind::Colon { ":" } else { "=" };
        Self {
            kind,
            text: text.to_string(),
            span: Span::default(),
        }
    }
}

impl CommandLine {
    /// Create an empty command line.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arguments: Vec::new(),
        }
    }

    /// Append an argument.
    #[must_use]
    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Append a switch.
    #[must_use]
    pub fn parameter(self, parameter: Parameter) -> Self {
        self.argument(Argument::Parameter(parameter))
    }

    /// Append a positional argument, quoting it if needed.
    pub fn default_param(self, text: &str) -> Result<Self, BuildError> {
        Ok(self.argument(Argument::Default(DefaultParameter {
            value: Terminal::value(text)?,
        })))
    }

    /// Append `/name`.
    pub fn windows(self, name: &str) -> Result<Self, BuildError> {
        Ok(self.parameter(Parameter::windows(name)?))
    }

    /// Append `/name:value`.
    pub fn windows_value(self, name: &str, value: &str) -> Result<Self, BuildError> {
        Ok(self.parameter(Parameter::windows(name)?.value(value)?))
    }

    /// Append `--name`.
    pub fn long(self, name: &str) -> Result<Self, BuildError> {
        Ok(self.parameter(Parameter::long(name)?))
    }

    /// Append `--name=value`.
    pub fn long_value(self, name: &str, value: &str) -> Result<Self, BuildError> {
        Ok(self.parameter(Parameter::long(name)?.value(value)?))
    }

    /// Append a `-flags` group.
    pub fn short(self, flags: &str) -> Result<Self, BuildError> {
        Ok(self.parameter(Parameter::short(flags)?))
    }
}

impl Default for CommandLine {
    fn default() -> Self {
        Self::new()
    }
}

impl Parameter {
    /// Create a switch of the given style; `name` excludes the prefix.
    pub fn new(style: ParameterStyle, name: &str) -> Result<Self, BuildError> {
        Ok(Self {
            style,
            name: Terminal::switch_name(style, name)?,
            assignment: None,
        })
    }

    /// `/name`.
    pub fn windows(name: &str) -> Result<Self, BuildError> {
        Self::new(ParameterStyle::Windows, name)
    }

    /// `--name`.
    pub fn long(name: &str) -> Result<Self, BuildError> {
        Self::new(ParameterStyle::Long, name)
    }

    /// `-flags`.
    pub fn short(flags: &str) -> Result<Self, BuildError> {
        Self::new(ParameterStyle::Short, flags)
    }

    /// Attach a value with the style's separator, quoting it if needed.
    pub fn value(self, text: &str) -> Result<Self, BuildError> {
        self.terminal_value(Terminal::value(text)?)
    }

    /// Attach a value, always quoted.
    pub fn quoted_value(self, text: &str) -> Result<Self, BuildError> {
        self.terminal_value(Terminal::quoted(text)?)
    }

    fn terminal_value(mut self, terminal: Terminal) -> Result<Self, BuildError> {
        let Some(kind) = self.style.separator() else {
            return Err(BuildError::FlagsTakeNoValue(self.bare_name().to_string()));
        };
        self.assignment = Some(Assignment {
            separator: Terminal::separator(kind),
            value: Value { terminal },
        });
        Ok(self)
    }
}
