//! Demonstrate error handling for malformed command lines.

fn main() {
    for input in ["/Name:", r#"copy "unclosed"#, "a : b"] {
        match cmdline_grammar::parse(input) {
            Ok(_) => println!("{input:?}: parsed OK (unexpected)"),
            Err(e) => {
                println!("{input:?}: {e}");
                println!("  Kind: {:?}", e.kind);
                println!("  Location: offset {}, length {}", e.span.offset, e.span.length);
                println!("  Expected: {:?}", e.expected);
            }
        }
        println!();
    }
}
