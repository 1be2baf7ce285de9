use std::fmt;

use crate::token::{Span, Token, TokenKind};

/// Complete parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub arguments: Vec<Argument>,
}

/// Top-level argument, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Positional value with no switch prefix.
    Default(DefaultParameter),
    /// Switch introduced by `/`, `--`, or `-`.
    Parameter(Parameter),
}

/// Positional argument: a bare word or a quoted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultParameter {
    pub value: Terminal,
}

/// Prefix family of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterStyle {
    /// `/Name[:value]`.
    Windows,
    /// `--name[=value]`.
    Long,
    /// `-abc`, never carries a value.
    Short,
}

impl ParameterStyle {
    /// Prefix text, e.g. `--`.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Windows => "/",
            Self::Long => "--",
            Self::Short => "-",
        }
    }

    /// Separator accepted before a value, if the style takes one.
    #[must_use]
    pub const fn separator(self) -> Option<TokenKind> {
        match self {
            Self::Windows => Some(TokenKind::Colon),
            Self::Long => Some(TokenKind::Equals),
            Self::Short => None,
        }
    }

    pub(crate) const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::WindowsWord => Some(Self::Windows),
            TokenKind::LongWord => Some(Self::Long),
            TokenKind::ShortWord => Some(Self::Short),
            _ => None,
        }
    }
}

/// One switch occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub style: ParameterStyle,
    /// Switch name including its prefix (`/Switch`, `--Switch`, `-sUtZ`).
    pub name: Terminal,
    pub assignment: Option<Assignment>,
}

/// Separator plus the value it introduces. The two always come together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub separator: Terminal,
    pub value: Value,
}

/// Value attached to a switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub terminal: Terminal,
}

/// Leaf holding source text exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl From<&Token> for Terminal {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind,
            text: token.text.clone(),
            span: token.span,
        }
    }
}

impl Terminal {
    /// Compare kind and text, ignoring the source span.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Parameter {
    /// Switch name with its prefix stripped.
    #[must_use]
    pub fn bare_name(&self) -> &str {
        self.name
            .text
            .strip_prefix(self.style.prefix())
            .unwrap_or(&self.name.text)
    }

    /// Raw text of the attached value, quotes included.
    #[must_use]
    pub fn value_text(&self) -> Option<&str> {
        self.assignment
            .as_ref()
            .map(|a| a.value.terminal.text.as_str())
    }
}

impl Argument {
    /// Leaf terminals of this argument, in source order.
    #[must_use]
    pub fn terminals(&self) -> Vec<&Terminal> {
        match self {
            Self::Default(d) => vec![&d.value],
            Self::Parameter(p) => match &p.assignment {
                Some(a) => vec![&p.name, &a.separator, &a.value.terminal],
                None => vec![&p.name],
            },
        }
    }
}

impl CommandLine {
    /// Every leaf terminal, in source order.
    pub fn leaves(&self) -> impl Iterator<Item = &Terminal> {
        self.arguments.iter().flat_map(Argument::terminals)
    }

    /// Switch arguments, in source order.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.arguments.iter().filter_map(|arg| match arg {
            Argument::Parameter(p) => Some(p),
            Argument::Default(_) => None,
        })
    }

    /// Positional arguments, in source order.
    pub fn defaults(&self) -> impl Iterator<Item = &DefaultParameter> {
        self.arguments.iter().filter_map(|arg| match arg {
            Argument::Default(d) => Some(d),
            Argument::Parameter(_) => None,
        })
    }

    /// Structural comparison that ignores source spans.
    ///
    /// Useful for comparing a parsed tree against one assembled with
    /// the builder, whose terminals carry no real location.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        Node::CommandLine(self).same_shape(&Node::CommandLine(other))
    }

    /// Root of the generic node view.
    #[must_use]
    pub const fn node(&self) -> Node<'_> {
        Node::CommandLine(self)
    }
}

/// Node kind tag, one per grammar production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    CommandLine,
    DefaultParameter,
    Parameter,
    Value,
    Terminal,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Borrowed, uniformly typed view over the parse tree.
///
/// Each variant matches one grammar production, so consumers can walk
/// the tree generically with exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    CommandLine(&'a CommandLine),
    DefaultParameter(&'a DefaultParameter),
    Parameter(&'a Parameter),
    Value(&'a Value),
    Terminal(&'a Terminal),
}

impl<'a> Node<'a> {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::CommandLine(_) => NodeKind::CommandLine,
            Self::DefaultParameter(_) => NodeKind::DefaultParameter,
            Self::Parameter(_) => NodeKind::Parameter,
            Self::Value(_) => NodeKind::Value,
            Self::Terminal(_) => NodeKind::Terminal,
        }
    }

    /// Children in grammar order.
    ///
    /// `Parameter` has one child, or three when it carries a value:
    /// name, separator, `Value`.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        match *self {
            Self::CommandLine(cl) => cl
                .arguments
                .iter()
                .map(|arg| match arg {
                    Argument::Default(d) => Self::DefaultParameter(d),
                    Argument::Parameter(p) => Self::Parameter(p),
                })
                .collect(),
            Self::DefaultParameter(d) => vec![Self::Terminal(&d.value)],
            Self::Parameter(p) => match &p.assignment {
                Some(a) => vec![
                    Self::Terminal(&p.name),
                    Self::Terminal(&a.separator),
                    Self::Value(&a.value),
                ],
                None => vec![Self::Terminal(&p.name)],
            },
            Self::Value(v) => vec![Self::Terminal(&v.terminal)],
            Self::Terminal(_) => Vec::new(),
        }
    }

    /// Leaf text, for terminals only.
    #[must_use]
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            Self::Terminal(t) => Some(&t.text),
            _ => None,
        }
    }

    /// Compare kinds and terminal text recursively, ignoring spans.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        if let (Self::Terminal(a), Self::Terminal(b)) = (self, other) {
            return a.same_shape(b);
        }
        let mine = self.children();
        let theirs = other.children();
        self.kind() == other.kind()
            && mine.len() == theirs.len()
            && mine.iter().zip(&theirs).all(|(a, b)| a.same_shape(b))
    }

    /// Indented tree rendering, two spaces per level.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.kind().to_string());
        if let Some(text) = self.text() {
            out.push(' ');
            out.push_str(&format!("{text:?}"));
        }
        out.push('\n');
        for child in self.children() {
            child.dump_into(out, depth + 1);
        }
    }
}
