//! Parser behaviour and error tests.

mod common;

use cmdline_grammar::{
    Argument, CommandLine, NodeKind, ParameterStyle, ParseErrorKind, Span, TokenKind, parse,
    parse_tokens, tokenize,
};
use common::leaf_texts;

fn parameter_at(cl: &CommandLine, index: usize) -> &cmdline_grammar::Parameter {
    match &cl.arguments[index] {
        Argument::Parameter(p) => p,
        Argument::Default(d) => panic!("expected parameter, got default {:?}", d.value.text),
    }
}

// -----------------------------------------------------------
// Tree shapes.
// -----------------------------------------------------------

#[test]
fn parse_empty_input_has_no_children() {
    let cl = parse("").unwrap();
    assert!(cl.node().children().is_empty());
}

#[test]
fn parse_plain_words_become_default_parameters() {
    let cl = parse("alpha beta  gamma").unwrap();
    assert_eq!(cl.arguments.len(), 3);
    let texts: Vec<_> = cl.defaults().map(|d| d.value.text.as_str()).collect();
    assert_eq!(texts, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn parse_quoted_default_parameter_keeps_quotes() {
    let cl = parse(r#""hello world" "say \"hi\"""#).unwrap();
    let texts: Vec<_> = cl.defaults().map(|d| d.value.text.as_str()).collect();
    assert_eq!(texts, vec![r#""hello world""#, r#""say \"hi\"""#]);
    assert!(
        cl.defaults()
            .all(|d| d.value.kind == TokenKind::QuotedString)
    );
}

#[test]
fn parse_windows_switch_alone_has_one_child() {
    let cl = parse("/Name").unwrap();
    let children = cl.node().children()[0].children();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].kind(), NodeKind::Terminal);
    assert_eq!(children[0].text(), Some("/Name"));
}

#[test]
fn parse_windows_switch_with_value_has_three_children() {
    let cl = parse("/Name:123").unwrap();
    let children = cl.node().children()[0].children();
    let kinds: Vec<_> = children.iter().map(cmdline_grammar::Node::kind).collect();
    assert_eq!(
        kinds,
        vec![NodeKind::Terminal, NodeKind::Terminal, NodeKind::Value]
    );
    assert_eq!(children[0].text(), Some("/Name"));
    assert_eq!(children[1].text(), Some(":"));
    assert_eq!(children[2].children()[0].text(), Some("123"));
}

#[test]
fn parse_long_parameter_with_quoted_value() {
    let cl = parse(r#"--Name="abc XYZ""#).unwrap();
    let p = parameter_at(&cl, 0);
    assert_eq!(p.style, ParameterStyle::Long);
    assert_eq!(p.bare_name(), "Name");
    let a = p.assignment.as_ref().unwrap();
    assert_eq!(a.separator.kind, TokenKind::Equals);
    assert_eq!(a.value.terminal.kind, TokenKind::QuotedString);
    assert_eq!(a.value.terminal.text, r#""abc XYZ""#);
}

#[test]
fn parse_short_flags_are_opaque() {
    let cl = parse("-sUtZ").unwrap();
    let p = parameter_at(&cl, 0);
    assert_eq!(p.style, ParameterStyle::Short);
    assert_eq!(p.name.text, "-sUtZ");
    assert_eq!(p.bare_name(), "sUtZ");
    assert!(p.assignment.is_none());
}

#[test]
fn parse_mixed_arguments_keep_source_order() {
    let cl = parse(r#"src /R --to="a b" -fv dest"#).unwrap();
    let kinds: Vec<_> = cl
        .node()
        .children()
        .iter()
        .map(cmdline_grammar::Node::kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::DefaultParameter,
            NodeKind::Parameter,
            NodeKind::Parameter,
            NodeKind::Parameter,
            NodeKind::DefaultParameter,
        ]
    );
    assert_eq!(cl.parameters().count(), 3);
}

#[test]
fn parse_value_may_be_followed_by_more_arguments() {
    let cl = parse("/a:1 /b:2").unwrap();
    assert_eq!(parameter_at(&cl, 0).value_text(), Some("1"));
    assert_eq!(parameter_at(&cl, 1).value_text(), Some("2"));
}

#[test]
fn parse_value_only_takes_one_token() {
    let cl = parse("--out=a b").unwrap();
    assert_eq!(cl.arguments.len(), 2);
    assert_eq!(parameter_at(&cl, 0).value_text(), Some("a"));
}

#[test]
fn parse_value_may_look_like_a_path() {
    let cl = parse("/Out:C /x:a/b").unwrap();
    assert_eq!(parameter_at(&cl, 0).value_text(), Some("C"));
    assert_eq!(parameter_at(&cl, 1).value_text(), Some("a/b"));
}

#[test]
fn parse_terminal_spans_point_into_input() {
    let input = "  /Name:123";
    let cl = parse(input).unwrap();
    for leaf in cl.leaves() {
        assert_eq!(&input[leaf.span.offset..leaf.span.end()], leaf.text);
    }
}

#[test]
fn parse_leaves_in_source_order() {
    assert_eq!(
        leaf_texts(r#"a /B:c --d="e f" -g"#),
        vec!["a", "/B", ":", "c", "--d", "=", r#""e f""#, "-g"]
    );
}

#[test]
fn parse_is_idempotent() {
    let input = r#"x /Y:"z w" --k=v -abc"#;
    assert_eq!(parse(input).unwrap(), parse(input).unwrap());
}

#[test]
fn parse_tokens_matches_parse() {
    let input = "/a:b --c=d -e f";
    let tokens: Vec<_> = tokenize(input).collect();
    assert_eq!(parse_tokens(&tokens).unwrap(), parse(input).unwrap());
}

#[test]
fn parse_tokens_empty_slice() {
    let cl = parse_tokens(&[]).unwrap();
    assert!(cl.arguments.is_empty());
}

// -----------------------------------------------------------
// Parse errors.
// -----------------------------------------------------------

#[test]
fn parse_error_trailing_windows_separator() {
    let err = parse("/Name:").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::MissingValue { ref separator } if separator == ":"));
    assert_eq!(err.span, Span::new(6, 0));
    assert_eq!(
        err.expected,
        vec![TokenKind::BareWord, TokenKind::QuotedString]
    );
}

#[test]
fn parse_error_trailing_long_separator_after_whitespace() {
    let err = parse("--Name=   ").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::MissingValue { ref separator } if separator == "="));
    assert_eq!(err.span.offset, 10);
}

#[test]
fn parse_error_separator_then_separator() {
    let err = parse("/a::b").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::MissingValue { .. }));
    assert_eq!(err.span.offset, 3);
}

#[test]
fn parse_error_unterminated_quote() {
    let err = parse(r#""abc"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedQuote);
    assert_eq!(err.span, Span::new(0, 4));
}

#[test]
fn parse_error_unterminated_quote_in_long_value() {
    let err = parse(r#"--msg="oops"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedQuote);
    assert_eq!(err.span.offset, 6);
}

#[test]
fn parse_error_leading_separator() {
    let err = parse("=x").unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::Equals,
            ..
        }
    ));
    assert_eq!(err.span.offset, 0);
}

#[test]
fn parse_error_short_flags_reject_value() {
    let err = parse("-o=file").unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::Equals,
            ..
        }
    ));
    assert_eq!(err.span.offset, 2);
}

#[test]
fn parse_error_long_with_colon() {
    let err = parse("--level:3").unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::Colon,
            ..
        }
    ));
}

// -----------------------------------------------------------
// Error display.
// -----------------------------------------------------------

#[test]
fn display_error_types() {
    let msg = parse(r#""abc"#).unwrap_err().to_string();
    assert!(msg.contains("unterminated quoted string"));
    assert!(msg.contains("offset 0"));

    let msg = parse("/Name:").unwrap_err().to_string();
    assert!(msg.contains("missing value after ':'"));
    assert!(msg.contains("expected word or quoted string"));

    let msg = parse("a = b").unwrap_err().to_string();
    assert!(msg.starts_with("unexpected '=' at offset 2"));
    assert!(msg.contains("end of input"));
}
