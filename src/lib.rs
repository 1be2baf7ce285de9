//! Tokenizer and grammar parser for command-line argument strings.
//!
//! Turns the raw text following a program name into a typed parse
//! tree that tells apart positional values, Windows-style switches
//! (`/Name[:value]`), Unix-style long parameters (`--name[=value]`)
//! and stacked short flags (`-abc`). Terminals keep their source text
//! verbatim, quotes and escapes included.
//!
//! # Quick start
//!
//! ## Parse and re-format a command line
//!
//! ```
//! use cmdline_grammar::{Argument, format, parse};
//!
//! let cl = parse(r#"build /Out:bin --mode="fast path" -vq"#).unwrap();
//! assert_eq!(cl.arguments.len(), 4);
//! assert!(matches!(cl.arguments[0], Argument::Default(_)));
//! assert_eq!(format(&cl), r#"build /Out:bin --mode="fast path" -vq"#);
//! ```
//!
//! ## Build a command line programmatically
//!
//! ```
//! use cmdline_grammar::{BuildError, CommandLine, format};
//!
//! let cl = CommandLine::new()
//!     .default_param("input.txt")?
//!     .windows_value("Level", "3")?
//!     .long_value("title", "two words")?
//!     .short("xz")?;
//!
//! assert_eq!(format(&cl), r#"input.txt /Level:3 --title="two words" -xz"#);
//! # Ok::<(), BuildError>(())
//! ```
//!
//! Builder input with no parseable rendering is rejected rather than
//! written out, e.g. a quoted value ending in a backslash:
//!
//! ```
//! use cmdline_grammar::{BuildError, CommandLine};
//!
//! let err = CommandLine::new().windows_value("Dir", r"C:\Program Files\").unwrap_err();
//! assert!(matches!(err, BuildError::TrailingBackslash(_)));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{
    Argument, Assignment, CommandLine, DefaultParameter, Node, NodeKind, Parameter,
    ParameterStyle, Terminal, Value,
};
pub use builder::BuildError;
pub use formatter::format;
pub use lexer::{Tokens, tokenize};
pub use parser::{ParseError, ParseErrorKind, parse, parse_tokens};
pub use token::{Span, Token, TokenKind};
