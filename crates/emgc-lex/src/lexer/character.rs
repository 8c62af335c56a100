//! Character literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a character literal: exactly one character between
    /// apostrophes, e.g. `'X'`.
    ///
    /// The token's lexeme is the bare character. When the closing
    /// apostrophe is missing, an `Error` token carries the offending pair
    /// of characters instead.
    pub(crate) fn lex_char_literal(&mut self) -> Token {
        self.cursor.advance(); // opening apostrophe

        if self.cursor.is_at_end() {
            return self.token(TokenKind::Error, "'");
        }

        let character = self.cursor.current_char();
        self.cursor.advance();

        if self.cursor.current_char() != '\'' {
            let mut pair = character.to_string();
            if !self.cursor.is_at_end() {
                pair.push(self.cursor.current_char());
                self.cursor.advance();
            }
            return self.token(TokenKind::Error, pair);
        }

        self.cursor.advance(); // closing apostrophe
        self.token(TokenKind::CharLit, character.to_string())
    }
}
