//! Edge-case tests exercising the parser across module boundaries.

use emgc_util::Handler;

use crate::ast::{Expr, StateKind};

fn parse_err_message(source: &str) -> String {
    let mut handler = Handler::new();
    let program = crate::parse(source, &mut handler);
    assert!(program.is_none(), "expected failure for {:?}", source);
    handler.diagnostics()[0].to_string()
}

#[test]
fn test_error_token_from_lexer_is_reported() {
    // A bad character literal surfaces as an Error token; the parser
    // rejects it at the grammar position it lands on, quoting the pair.
    let message = parse_err_message("model m : n { state s 'ab { } }");
    assert!(message.starts_with("Parsing Error: State"), "{}", message);
    assert!(message.contains("'ab'"), "{}", message);
}

#[test]
fn test_bare_equals_is_reported() {
    let message =
        parse_err_message("model m : n { state s 'x' { this = 'x' } default state d '.' }");
    assert!(message.contains("Parsing Error"), "{}", message);
    assert!(message.contains("'='"), "{}", message);
}

#[test]
fn test_error_position_is_one_based() {
    let message = parse_err_message("model");
    assert!(message.contains("Line 1"), "{}", message);
}

#[test]
fn test_comments_are_transparent() {
    let mut handler = Handler::new();
    let program = crate::parse(
        "// automaton header\nneighbourhood n : 1 { // neighbours\n [1] }",
        &mut handler,
    )
    .expect("parse failed");
    assert_eq!(program.neighbourhoods[0].neighbours.len(), 1);
}

#[test]
fn test_deeply_nested_parens() {
    let source = format!(
        "model m : n {{ state s 'x' {{ {}this == 'x'{} }} default state d '.' }}",
        "(".repeat(64),
        ")".repeat(64)
    );
    let mut handler = Handler::new();
    let program = crate::parse(&source, &mut handler).expect("parse failed");
    match &program.models[0].states[0].kind {
        StateKind::Guarded(Expr::Binary(_)) => {},
        other => panic!("expected guarded binary, got {:?}", other),
    }
}

#[test]
fn test_negative_dimension_is_syntax_error() {
    // The dimension slot takes a bare natural, not an integer.
    let message = parse_err_message("neighbourhood n : -1 { [1] }");
    assert!(message.contains("natural literal"), "{}", message);
}

#[test]
fn test_model_and_neighbourhood_interleaving() {
    let mut handler = Handler::new();
    let program = crate::parse(
        "model before : n { default state d '.' } neighbourhood n : 1 { [1] }",
        &mut handler,
    )
    .expect("parse failed");
    // Forward reference is fine syntactically; ordering is preserved per
    // kind.
    assert_eq!(program.models.len(), 1);
    assert_eq!(program.neighbourhoods.len(), 1);
}

#[test]
fn test_first_error_stops_parsing() {
    let mut handler = Handler::new();
    let program = crate::parse("model ! : n { } model m2 : n { }", &mut handler);
    assert!(program.is_none());
    assert_eq!(handler.diagnostics().len(), 1);
}
