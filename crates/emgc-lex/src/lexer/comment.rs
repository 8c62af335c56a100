//! Line comments and division.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `/`: either the division operator or a `//` line comment.
    ///
    /// A comment extends to the next `\n`, `\r` or end of file and is
    /// skipped entirely; the lexer then recurses to return the next real
    /// token.
    pub(crate) fn lex_slash(&mut self) -> Token {
        self.cursor.advance();

        if self.cursor.current_char() == '/' {
            while !self.cursor.is_at_end()
                && self.cursor.current_char() != '\n'
                && self.cursor.current_char() != '\r'
            {
                self.cursor.advance();
            }
            return self.next_token();
        }

        self.token(TokenKind::Div, "/")
    }
}
