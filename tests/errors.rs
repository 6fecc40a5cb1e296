mod common;

use kisexpr::parse::{Parser, ParseError, ParseErrorWithPos};
use kisexpr::settings::{Settings, DEFAULT_SETTINGS};
use kisexpr::value::Quotekind;
use kisexpr::{parse, parse_with_settings};

fn parse_err(s: &str) -> ParseErrorWithPos {
    match parse(s) {
        Ok(v) => panic!("expected {:?} to fail, got {:?}", s, v),
        Err(e) => e,
    }
}

#[test]
fn superfluous_input() {
    for s in ["()()", "((a) b))", "((a))abc", "a b", ")"] {
        let e = parse_err(s);
        assert!(matches!(e.err, ParseError::SuperfluousInput(_)), "{s}: {e}");
        assert!(e.to_string().contains("Superfluous characters after expression"));
    }
    let e = parse_err("((a))abc");
    assert_eq!(e.err, ParseError::SuperfluousInput('a'));
    assert_eq!(e.to_string(),
               "Syntax error: Superfluous characters after expression: a line: 1 col: 6");
}

#[test]
fn quote_without_anything_to_quote() {
    let e = parse_err("(')");
    assert_eq!(e.err, ParseError::UnexpectedToken(Some(')'), Quotekind::Quote));
    assert_eq!(e.message(), "Syntax Error: Unexpected ) after '");

    let e = parse_err("(a ,@ )");
    assert_eq!(e.message(), "Syntax Error: Unexpected ) after ,@");
    let e = parse_err("`");
    assert_eq!(e.message(), "Syntax Error: Unexpected null after `");
}

#[test]
fn error_position_after_newline() {
    let e = parse_err("(\n'");
    assert_eq!(e.to_string(), "Syntax Error: Unexpected null after ' line: 2 col: 2");
    assert_eq!((e.line(), e.col()), (2, 2));
    // CRLF counts as a single line break
    let e = parse_err("(\r\n'");
    assert_eq!(e.to_string(), "Syntax Error: Unexpected null after ' line: 2 col: 2");
    let e = parse_err("(\r'");
    assert_eq!((e.line(), e.col()), (2, 2));
}

#[test]
fn unterminated_string() {
    let e = parse_err("(a \"string)");
    assert_eq!(e.err, ParseError::UnterminatedString);
    assert_eq!(e.message(), "Syntax Error: Unterminated string literal");
    assert_eq!(e.to_string(), "Syntax Error: Unterminated string literal line: 1 col: 12");
    let e = parse_err("(\"a)");
    assert_eq!(e.message(), "Syntax Error: Unterminated string literal");
    let e = parse_err("\"abc\\");
    assert_eq!(e.err, ParseError::UnterminatedString);
    let e = parse_err("\"abc\\\"");
    assert_eq!(e.err, ParseError::UnterminatedString);
}

#[test]
fn missing_close_paren() {
    let e = parse_err("(a b");
    assert_eq!(e.err, ParseError::ExpectedCloseParen(None));
    assert_eq!(e.to_string(), "Syntax Error: Expected ) - saw: null line: 1 col: 5");
    let e = parse_err("((a)\n");
    assert_eq!((e.line(), e.col()), (2, 1));
}

#[test]
fn list_requires_open_paren() {
    let mut parser = Parser::new("a)", &DEFAULT_SETTINGS);
    let e = parser.list().unwrap_err();
    assert_eq!(e.err, ParseError::ExpectedOpenParen(Some('a')));
    assert_eq!(e.to_string(), "Syntax Error: Expected ( - saw a instead. line: 1 col: 1");
    let mut parser = Parser::new("", &DEFAULT_SETTINGS);
    assert_eq!(parser.list().unwrap_err().err, ParseError::ExpectedOpenParen(None));
}

#[test]
fn nesting_too_deep() {
    let settings = Settings { max_depth: 10, ..DEFAULT_SETTINGS };
    let e = parse_with_settings(&common::nested_lists(11), &settings).unwrap_err();
    assert_eq!(e.err, ParseError::NestingTooDeep);
    assert_eq!((e.line(), e.col()), (1, 11));
    assert!(parse_with_settings(&common::nested_lists(10), &settings).is_ok());
    assert_eq!(parse_err(&common::nested_lists(501)).err, ParseError::NestingTooDeep);
}

#[test]
fn errors_are_std_errors() {
    let r: anyhow::Result<_> = parse("(a").map_err(anyhow::Error::from);
    let e = r.unwrap_err();
    assert!(e.downcast_ref::<ParseErrorWithPos>().is_some());
}
