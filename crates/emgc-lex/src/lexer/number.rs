//! Natural and decimal literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number starting with a digit.
    ///
    /// A maximal digit run is a natural literal; if it is followed by `.`
    /// and at least one more digit, the combined run is a decimal literal.
    /// A trailing `.` without digits is left for the next token.
    pub(crate) fn lex_number(&mut self) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            let text = self.current_lexeme();
            return self.token(TokenKind::DecLit, text);
        }

        let text = self.current_lexeme();
        self.token(TokenKind::NatLit, text)
    }

    /// Lexes a decimal literal written without a whole part, e.g. `.5`.
    ///
    /// The caller has already checked that a digit follows the dot.
    pub(crate) fn lex_leading_dot(&mut self) -> Token {
        self.cursor.advance();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let text = self.current_lexeme();
        self.token(TokenKind::DecLit, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_one(source: &str) -> Token {
        Lexer::new(source).next_token()
    }

    #[test]
    fn test_natural() {
        let token = lex_one("42");
        assert_eq!(token.kind, TokenKind::NatLit);
        assert_eq!(token.lexeme, "42");
    }

    #[test]
    fn test_zero() {
        let token = lex_one("0");
        assert_eq!(token.kind, TokenKind::NatLit);
        assert_eq!(token.lexeme, "0");
    }

    #[test]
    fn test_decimal() {
        let token = lex_one("3.14");
        assert_eq!(token.kind, TokenKind::DecLit);
        assert_eq!(token.lexeme, "3.14");
    }

    #[test]
    fn test_leading_dot_decimal() {
        let token = lex_one(".5");
        assert_eq!(token.kind, TokenKind::DecLit);
        assert_eq!(token.lexeme, ".5");
    }

    #[test]
    fn test_trailing_dot_is_not_decimal() {
        let mut lexer = Lexer::new("12.");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::NatLit);
        assert_eq!(token.lexeme, "12");
        assert_eq!(lexer.next_token().kind, TokenKind::Unknown('.'));
    }

    #[test]
    fn test_bare_dot_is_unknown() {
        assert_eq!(lex_one(".").kind, TokenKind::Unknown('.'));
    }

    #[test]
    fn test_number_then_identifier() {
        let mut lexer = Lexer::new("2x");
        assert_eq!(lexer.next_token().lexeme, "2");
        assert_eq!(lexer.next_token().lexeme, "x");
    }

    #[test]
    fn test_decimal_stops_at_second_dot() {
        let mut lexer = Lexer::new("1.2.3");
        assert_eq!(lexer.next_token().lexeme, "1.2");
        assert_eq!(lexer.next_token().lexeme, ".3");
    }
}
