//! emgc-lex - Lexical analyzer for Emergent source code.
//!
//! The lexer is a pull-based producer: the parser asks for one token at a
//! time via [`Lexer::next_token`]. Each [`Token`] carries its kind, the
//! exact source substring it was read from, and the 1-based line/column of
//! its first character.
//!
//! Malformed input never aborts lexing; it surfaces as [`TokenKind::Error`]
//! tokens (and ultimately [`TokenKind::Eof`]) which the parser reports. The
//! lexer itself emits no diagnostics.

pub mod cursor;
mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};
