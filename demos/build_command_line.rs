//! Build a command line programmatically using the builder API.

use cmdline_grammar::{BuildError, CommandLine, Parameter};

fn main() -> Result<(), BuildError> {
    let cl = CommandLine::new()
        .default_param("backup")?
        .windows_value("Source", r"C:\data")?
        .windows("Recurse")?
        .long_value("exclude", "*.tmp")?
        .parameter(Parameter::long("label")?.quoted_value("nightly run")?)
        .short("vz")?;

    let output = cmdline_grammar::format(&cl);
    println!("{output}");

    let reparsed = cmdline_grammar::parse(&output).expect("re-parse failed");
    assert!(reparsed.same_shape(&cl));

    // A quoted value cannot end in a backslash.
    if let Err(e) = CommandLine::new().windows_value("Dest", r"D:\backup dir\") {
        println!("rejected: {e}");
    }
    Ok(())
}
