#![allow(dead_code)]

use cmdline_grammar::{CommandLine, format, parse};

pub fn roundtrip(input: &str) {
    let cl = parse(input).expect("parse failed");
    let output = format(&cl);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: format a tree, parse it back, assert structural equality.
pub fn assert_tree_roundtrip(original: &CommandLine) {
    let formatted = format(original);
    let parsed = parse(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });

    assert!(
        original.same_shape(&parsed),
        "tree mismatch\n--- formatted ---\n{formatted}\n\
         --- original ---\n{}\n--- parsed ---\n{}",
        original.node().dump(),
        parsed.node().dump()
    );
}

/// Leaf texts of a parsed command line.
pub fn leaf_texts(input: &str) -> Vec<String> {
    parse(input)
        .expect("parse failed")
        .leaves()
        .map(|t| t.text.clone())
        .collect()
}
