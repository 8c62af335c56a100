//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Reads a maximal `[A-Za-z0-9_]+` run starting at the current
    /// character, then checks the result against the keyword table.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.current_lexeme();
        match keyword_from_ident(text) {
            Some(kind) => self.token(kind, text),
            None => self.token(TokenKind::Ident, text),
        }
    }
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
