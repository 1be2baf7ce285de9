//! Renders a parse tree back into canonical command-line text.
//!
//! Terminals are written verbatim. The terminals of one argument are
//! written back to back, and arguments are separated by a single space.

use std::fmt;

use crate::ast::{Argument, CommandLine};

/// Format a `CommandLine` into its canonical string form.
///
/// Quoted terminals keep their quotes and escapes, so the output
/// parses back into the same tree.
#[must_use]
pub fn format(command_line: &CommandLine) -> String {
    let mut out = String::new();
    for (i, argument) in command_line.arguments.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        format_argument(&mut out, argument);
    }
    out
}

fn format_argument(out: &mut String, argument: &Argument) {
    for terminal in argument.terminals() {
        out.push_str(&terminal.text);
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        format_argument(&mut out, self);
        f.write_str(&out)
    }
}
