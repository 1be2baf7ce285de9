//! Parse a command-line string, walk its arguments, and re-format it.

use cmdline_grammar::Argument;

fn main() {
    let input = r#"  deploy   /Target:prod --message="ship it"  -fq  notes.txt"#;

    let cl = cmdline_grammar::parse(input).expect("parse failed");

    println!("Arguments: {}", cl.arguments.len());
    for argument in &cl.arguments {
        match argument {
            Argument::Default(d) => println!("  Positional: {}", d.value.text),
            Argument::Parameter(p) => match p.value_text() {
                Some(value) => println!("  {:?} switch {} = {value}", p.style, p.bare_name()),
                None => println!("  {:?} switch {}", p.style, p.bare_name()),
            },
        }
    }

    println!("\nTree:\n{}", cl.node().dump());
    println!("Formatted: {}", cmdline_grammar::format(&cl));
}
