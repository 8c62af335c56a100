//! Relational operator lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `==`, `!=`, `<=`, `<`, `>=` or `>`.
    ///
    /// `<` and `>` stand on their own when no `=` follows; bare `=` and `!`
    /// have no single-character meaning and become `Error` tokens.
    pub(crate) fn lex_relational(&mut self) -> Token {
        let first = self.cursor.current_char();
        self.cursor.advance();

        if self.cursor.match_char('=') {
            return match first {
                '=' => self.token(TokenKind::Eq, "=="),
                '!' => self.token(TokenKind::Ne, "!="),
                '<' => self.token(TokenKind::Le, "<="),
                _ => self.token(TokenKind::Ge, ">="),
            };
        }

        match first {
            '<' => self.token(TokenKind::Lt, "<"),
            '>' => self.token(TokenKind::Gt, ">"),
            _ => self.token(TokenKind::Error, first.to_string()),
        }
    }
}
