//! Edge-case and property tests for the lexer.

use proptest::prelude::*;

use crate::{Lexer, TokenKind};

/// Drains a lexer, panicking if it fails to reach `Eof` within a generous
/// bound relative to the input length.
fn drain(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(source);
    let mut kinds = Vec::new();
    for _ in 0..source.len() + 2 {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            return kinds;
        }
        kinds.push(token.kind);
    }
    panic!("lexer did not terminate on {:?}", source);
}

proptest! {
    // Totality: every input reaches Eof, and every token consumes at least
    // one character.
    #[test]
    fn lexer_terminates_on_arbitrary_input(source in ".*") {
        drain(&source);
    }

    #[test]
    fn lexer_terminates_on_grammar_characters(source in "[a-z0-9 \n'=!<>{}\\[\\],:|/.%*+-]{0,64}") {
        drain(&source);
    }
}

#[test]
fn test_whitespace_only() {
    assert!(drain(" \t \r\n  ").is_empty());
}

#[test]
fn test_error_tokens_do_not_stall() {
    let kinds = drain("= ! 'ab' @");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Error,
            TokenKind::Error,
            TokenKind::Error,
            TokenKind::Unknown('@'),
        ]
    );
}

#[test]
fn test_adjacent_operators() {
    // "<=" then "=" (bare, an error), not "<" "==".
    let kinds = drain("<==");
    assert_eq!(kinds, vec![TokenKind::Le, TokenKind::Error]);
}

#[test]
fn test_crlf_line_counting() {
    let mut lexer = Lexer::new("model\r\nstate");
    lexer.next_token();
    let state = lexer.next_token();
    // Both '\r' and '\n' end a line.
    assert_eq!(state.span.line, 3);
}

#[test]
fn test_null_bytes() {
    let kinds = drain("\0\0");
    assert_eq!(
        kinds,
        vec![TokenKind::Unknown('\0'), TokenKind::Unknown('\0')]
    );
}

#[test]
fn test_long_identifier() {
    let source = "a".repeat(4096);
    let mut lexer = Lexer::new(&source);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.lexeme.len(), 4096);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}
