//! CLI tool to tokenize, parse, and format command-line strings.

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use cmdline_grammar::{CommandLine, ParseError, TokenKind, format, parse, tokenize};

#[derive(Parser, Debug)]
#[command(name = "cmdline", about, version)]
struct Cli {
    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count, global = true)]
    verbosity: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one token per line
    Tokens(Input),
    /// Print the parse tree
    Tree(Input),
    /// Print the canonical form
    Fmt(Input),
    /// Check whether the input parses
    Check(Input),
}

#[derive(clap::Args, Debug)]
struct Input {
    /// Command-line text to process; each stdin line is used when absent
    #[arg(allow_hyphen_values = true)]
    text: Option<String>,
}

impl Command {
    const fn input(&self) -> &Input {
        match self {
            Self::Tokens(input) | Self::Tree(input) | Self::Fmt(input) | Self::Check(input) => {
                input
            }
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_tokens(text: &str) {
    for token in tokenize(text) {
        if token.kind == TokenKind::Whitespace {
            continue;
        }
        println!(
            "{:?} {}+{} {:?}",
            token.kind, token.span.offset, token.span.length, token.text
        );
    }
}

fn run(command: &Command, label: &str, text: &str) -> Result<(), ParseError> {
    match command {
        Command::Tokens(_) => print_tokens(text),
        Command::Tree(_) => print!("{}", parse(text)?.node().dump()),
        Command::Fmt(_) => println!("{}", format(&parse(text)?)),
        Command::Check(_) => {
            let cl: CommandLine = parse(text)?;
            let switches = cl.parameters().count();
            let positional = cl.defaults().count();
            eprintln!(
                "{label}: valid ({} argument(s), \
                 {switches} switch(es), {positional} positional)",
                cl.arguments.len()
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let inputs: Vec<(String, String)> = match &cli.command.input().text {
        Some(text) => vec![("<arg>".to_string(), text.clone())],
        None => {
            let mut lines = Vec::new();
            for (i, line) in io::stdin().lock().lines().enumerate() {
                match line {
                    Ok(line) => lines.push((format!("stdin:{}", i + 1), line)),
                    Err(e) => {
                        eprintln!("stdin: {e}");
                        return ExitCode::from(2);
                    }
                }
            }
            lines
        }
    };

    let mut had_error = false;

    for (label, text) in &inputs {
        log::info!("processing {label}");
        if let Err(e) = run(&cli.command, label, text) {
            eprintln!("{label}: {e}");
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
