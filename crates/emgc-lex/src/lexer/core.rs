//! Core lexer implementation.
//!
//! This module contains the main `Lexer` struct, the per-call dispatch, and
//! the token constructor that stamps each token with the position its
//! lexeme started at.

use emgc_util::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Pull-based lexer for Emergent source code.
///
/// Whitespace (including `\r` and `\n`) is skipped between tokens; the
/// line/column of a returned token always refer to the start of its lexeme.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Span of the first character of the current token.
    token_span: Span,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_span: Span::new(1, 1),
        }
    }

    /// Returns the next token from the source.
    ///
    /// At the end of input this returns an `Eof` token, and keeps returning
    /// it on every subsequent call.
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_span = Span::new(self.cursor.line(), self.cursor.column());

        if self.cursor.is_at_end() {
            return self.token(TokenKind::Eof, "EOF");
        }

        match self.cursor.current_char() {
            '\'' => self.lex_char_literal(),
            '=' | '!' | '<' | '>' => self.lex_relational(),
            '/' => self.lex_slash(),
            '+' => self.single(TokenKind::Add),
            '-' => self.single(TokenKind::Sub),
            '*' => self.single(TokenKind::Mul),
            '%' => self.single(TokenKind::Mod),
            ':' => self.single(TokenKind::Colon),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            ',' => self.single(TokenKind::Comma),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '|' => self.single(TokenKind::Pipe),
            '.' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_leading_dot(),
            c if c.is_ascii_alphabetic() || c == '_' => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.cursor.advance();
                self.token(TokenKind::Unknown(c), c.to_string())
            },
        }
    }

    /// Resets the lexer to the start of the source, line 1, column 1.
    pub fn reset(&mut self) {
        self.cursor.rewind();
        self.token_start = 0;
        self.token_span = Span::new(1, 1);
    }

    /// Builds a token starting at the current lexeme position.
    pub(crate) fn token(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(kind, lexeme, self.token_span)
    }

    /// Consumes one character and returns it as `kind`.
    fn single(&mut self, kind: TokenKind) -> Token {
        let c = self.cursor.current_char();
        self.cursor.advance();
        self.token(kind, c.to_string())
    }

    /// The source slice of the token currently being lexed.
    pub(crate) fn current_lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_source_is_eof() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("model");
        assert_eq!(lexer.next_token().kind, TokenKind::Model);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            kinds(": { } ( ) , [ ] |"),
            vec![
                TokenKind::Colon,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Pipe,
            ]
        );
    }

    #[test]
    fn test_arithmetic_operators() {
        assert_eq!(
            kinds("+ - * / %"),
            vec![
                TokenKind::Add,
                TokenKind::Sub,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::Mod,
            ]
        );
    }

    #[test]
    fn test_token_span_points_at_lexeme_start() {
        let mut lexer = Lexer::new("  model\n  rule90");
        let model = lexer.next_token();
        assert_eq!(model.span, Span::new(1, 3));
        let id = lexer.next_token();
        assert_eq!(id.span, Span::new(2, 3));
        assert_eq!(id.lexeme, "rule90");
    }

    #[test]
    fn test_unknown_character() {
        let mut lexer = Lexer::new("@");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Unknown('@'));
        assert_eq!(token.lexeme, "@");
    }

    #[test]
    fn test_reset() {
        let mut lexer = Lexer::new("set all");
        assert_eq!(lexer.next_token().kind, TokenKind::Set);
        assert_eq!(lexer.next_token().kind, TokenKind::All);
        lexer.reset();
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Set);
        assert_eq!(token.span, Span::new(1, 1));
    }

    #[test]
    fn test_iterator_stops_at_eof() {
        let tokens: Vec<Token> = Lexer::new("model m").collect();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_rule90_token_stream() {
        assert_eq!(
            kinds("neighbourhood bi : 1 { l[-1], r[1] }"),
            vec![
                TokenKind::Neighbourhood,
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::NatLit,
                TokenKind::LBrace,
                TokenKind::Ident,
                TokenKind::LBracket,
                TokenKind::Sub,
                TokenKind::NatLit,
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::Ident,
                TokenKind::LBracket,
                TokenKind::NatLit,
                TokenKind::RBracket,
                TokenKind::RBrace,
            ]
        );
    }
}
