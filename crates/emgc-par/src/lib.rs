//! emgc-par - Recursive-descent parser for Emergent.
//!
//! The parser pulls tokens from [`emgc_lex::Lexer`] one at a time, with a
//! single-slot pushback buffer for the one-token lookahead the grammar
//! needs. Two helpers carry most of the grammar:
//!
//! - [`Parser::parse_binary`] implements one precedence level of
//!   left-associative binary operators;
//! - [`Parser::parse_series`] implements a homogeneous, optionally
//!   separator-delimited sequence.
//!
//! There is no error recovery: the deepest failing production emits a
//! diagnostic and every caller propagates `None` up to the root.

pub mod ast;
mod expr;
mod items;
pub mod print;

#[cfg(test)]
mod edge_cases;

use emgc_lex::{Lexer, Token, TokenKind};
use emgc_util::{Diagnostic, Handler, Span};

use crate::ast::{Binary, BinaryOp, Expr, Program};

/// Parses a whole source file into a [`Program`].
///
/// Returns `None` after emitting a diagnostic to `handler` on the first
/// syntax error.
pub fn parse(source: &str, handler: &mut Handler) -> Option<Program> {
    Parser::new(source, handler).parse_program()
}

/// Recursive-descent parser with one-token lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// The token currently being examined. Each production finishes with
    /// this set to the last token it consumed.
    token: Token,
    /// Single-slot pushback buffer; [`Parser::advance`] drains it before
    /// asking the lexer for more.
    buffer: Option<Token>,
    handler: &'a mut Handler,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source`, reporting errors to `handler`.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            lexer: Lexer::new(source),
            token: Token::new(TokenKind::Eof, "", Span::DUMMY),
            buffer: None,
            handler,
        }
    }

    /// Moves to the next token, draining the pushback buffer first.
    fn advance(&mut self) {
        self.token = match self.buffer.take() {
            Some(token) => token,
            None => self.lexer.next_token(),
        };
    }

    /// Restores `previous` as the current token, buffering the token that
    /// was being examined so the next [`Parser::advance`] returns it.
    fn push_back(&mut self, previous: Token) {
        debug_assert!(self.buffer.is_none(), "pushback buffer is single-slot");
        self.buffer = Some(std::mem::replace(&mut self.token, previous));
    }

    /// Emits a parse error for `production`, naming the tokens that could
    /// have legally appeared, quoting the current lexeme.
    fn error(&mut self, production: &str, expected: &str) {
        self.handler.emit(Diagnostic::parsing(
            production,
            expected,
            self.token.lexeme.clone(),
            self.token.span,
        ));
    }

    /// Parses the current natural literal's value.
    fn nat_value(&mut self, production: &str) -> Option<i64> {
        match self.token.lexeme.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.error(production, "natural literal in range");
                None
            },
        }
    }

    /// One precedence level of left-associative binary operators.
    ///
    /// Parses a left operand with `parse`, then peeks one token: an
    /// operator in `ops` extends the expression to the left, a token in
    /// `follow_set` is pushed back and ends the level, and anything else is
    /// a parse error naming the allowed follow tokens.
    fn parse_binary(
        &mut self,
        parse: fn(&mut Self) -> Option<Expr>,
        ops: &[BinaryOp],
        follow_set: &[TokenKind],
        expected: &str,
    ) -> Option<Expr> {
        let mut left = parse(self)?;
        loop {
            let previous = self.token.clone();
            self.advance();
            match BinaryOp::from_token(self.token.kind) {
                Some(op) if ops.contains(&op) => {
                    let token = self.token.clone();
                    self.advance();
                    let right = parse(self)?;
                    left = Expr::Binary(Binary {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                        token,
                    });
                },
                _ if follow_set.contains(&self.token.kind) => {
                    self.push_back(previous);
                    return Some(left);
                },
                _ => {
                    self.error("Binary", expected);
                    return None;
                },
            }
        }
    }

    /// A homogeneous series of one or more elements.
    ///
    /// When `separator` is configured it is required between elements; a
    /// separator followed by a token outside the element's `first_set`
    /// terminates the series instead of starting an element. The
    /// terminating token must be in `follow_set`, and is pushed back for
    /// the caller.
    fn parse_series<T>(
        &mut self,
        parse: fn(&mut Self) -> Option<T>,
        first_set: &[TokenKind],
        follow_set: &[TokenKind],
        expected: &str,
        separator: Option<TokenKind>,
    ) -> Option<Vec<T>> {
        let mut items = Vec::new();
        loop {
            items.push(parse(self)?);
            let mut previous = self.token.clone();
            self.advance();
            if let Some(sep) = separator {
                if self.token.kind == sep {
                    self.advance();
                    if first_set.contains(&self.token.kind) {
                        continue;
                    }
                    previous = self.token.clone();
                }
            } else if first_set.contains(&self.token.kind) {
                continue;
            }
            if follow_set.contains(&self.token.kind) {
                self.push_back(previous);
                return Some(items);
            }
            self.error("Series", expected);
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_parser<R>(source: &str, f: impl FnOnce(&mut Parser) -> R) -> R {
        let mut handler = Handler::new();
        let mut parser = Parser::new(source, &mut handler);
        f(&mut parser)
    }

    #[test]
    fn test_advance_pulls_tokens_in_order() {
        with_parser("model m", |parser| {
            parser.advance();
            assert_eq!(parser.token.kind, TokenKind::Model);
            parser.advance();
            assert_eq!(parser.token.kind, TokenKind::Ident);
            parser.advance();
            assert_eq!(parser.token.kind, TokenKind::Eof);
        });
    }

    #[test]
    fn test_push_back_involution() {
        // After advancing past a token and pushing it back, the next
        // advance must return the identical token.
        with_parser("neighbourhood : 2", |parser| {
            parser.advance();
            let first = parser.token.clone();
            parser.advance();
            let second = parser.token.clone();
            parser.push_back(first.clone());
            assert_eq!(parser.token, first);
            parser.advance();
            assert_eq!(parser.token, second);
            parser.advance();
            assert_eq!(parser.token.kind, TokenKind::NatLit);
        });
    }

    #[test]
    fn test_error_records_lexeme_and_position() {
        let mut handler = Handler::new();
        {
            let mut parser = Parser::new("model", &mut handler);
            parser.advance();
            parser.error("Program", "'neighbourhood'");
        }
        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].title, "Program");
        assert_eq!(diagnostics[0].found, "model");
        assert_eq!(diagnostics[0].span, Span::new(1, 1));
    }

    #[test]
    fn test_nat_value_overflow_is_error() {
        let mut handler = Handler::new();
        {
            let mut parser = Parser::new("99999999999999999999", &mut handler);
            parser.advance();
            assert_eq!(parser.nat_value("Integer"), None);
        }
        assert!(handler.has_errors());
    }
}
