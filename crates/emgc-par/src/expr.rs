//! Predicate expression productions.
//!
//! One method per precedence level, lowest first; each level is a single
//! call to the binary-parser helper. The grammar is left-recursion-free and
//! every level is left-associative:
//!
//! | Level | Operators |
//! |-------|-----------|
//! | predicate | `or` |
//! | ex_disjunction | `xor` |
//! | conjunction | `and` |
//! | equivalence | `==`, `!=` |
//! | relation | `<=`, `<`, `>=`, `>` |
//! | translation | `+`, `-` |
//! | scaling | `*`, `/`, `%` |
//! | element | unary `-`/`not`, parens, cardinality, terminals |

use emgc_lex::TokenKind;

use crate::ast::{
    BinaryOp, Cardinality, Character, Coordinate, Decimal, Expr, Identifier, Integer, Negation,
    Negative,
};
use crate::Parser;

impl<'a> Parser<'a> {
    /// `predicate = ex_disj { "or" ex_disj }`
    pub(crate) fn parse_predicate(&mut self) -> Option<Expr> {
        self.parse_binary(
            Self::parse_ex_disjunction,
            &[BinaryOp::Or],
            &[TokenKind::RBrace, TokenKind::Pipe, TokenKind::RParen],
            "'}', '|' or ')'",
        )
    }

    /// `ex_disj = conj { "xor" conj }`
    fn parse_ex_disjunction(&mut self) -> Option<Expr> {
        self.parse_binary(
            Self::parse_conjunction,
            &[BinaryOp::Xor],
            &[
                TokenKind::Or,
                TokenKind::RBrace,
                TokenKind::Pipe,
                TokenKind::RParen,
            ],
            "'or', '}', '|' or ')'",
        )
    }

    /// `conj = equiv { "and" equiv }`
    fn parse_conjunction(&mut self) -> Option<Expr> {
        self.parse_binary(
            Self::parse_equivalence,
            &[BinaryOp::And],
            &[
                TokenKind::Xor,
                TokenKind::Or,
                TokenKind::RBrace,
                TokenKind::Pipe,
                TokenKind::RParen,
            ],
            "'xor', 'or', '}', '|' or ')'",
        )
    }

    /// `equiv = rel { ("==" | "!=") rel }`
    fn parse_equivalence(&mut self) -> Option<Expr> {
        self.parse_binary(
            Self::parse_relation,
            &[BinaryOp::Eq, BinaryOp::Ne],
            &[
                TokenKind::And,
                TokenKind::Xor,
                TokenKind::Or,
                TokenKind::RBrace,
                TokenKind::Pipe,
                TokenKind::RParen,
            ],
            "'and', 'xor', 'or', '}', '|' or ')'",
        )
    }

    /// `rel = trans { ("<=" | "<" | ">=" | ">") trans }`
    fn parse_relation(&mut self) -> Option<Expr> {
        self.parse_binary(
            Self::parse_translation,
            &[BinaryOp::Le, BinaryOp::Lt, BinaryOp::Ge, BinaryOp::Gt],
            &[
                TokenKind::Eq,
                TokenKind::Ne,
                TokenKind::And,
                TokenKind::Xor,
                TokenKind::Or,
                TokenKind::RBrace,
                TokenKind::Pipe,
                TokenKind::RParen,
            ],
            "'==', '!=', 'and', 'xor', 'or', '}', '|' or ')'",
        )
    }

    /// `trans = scale { ("+" | "-") scale }`
    fn parse_translation(&mut self) -> Option<Expr> {
        self.parse_binary(
            Self::parse_scaling,
            &[BinaryOp::Add, BinaryOp::Sub],
            &[
                TokenKind::Le,
                TokenKind::Lt,
                TokenKind::Ge,
                TokenKind::Gt,
                TokenKind::Eq,
                TokenKind::Ne,
                TokenKind::And,
                TokenKind::Xor,
                TokenKind::Or,
                TokenKind::RBrace,
                TokenKind::Pipe,
                TokenKind::RParen,
            ],
            "'<=', '<', '>=', '>', '==', '!=', 'and', 'xor', 'or', '}', '|' or ')'",
        )
    }

    /// `scale = element { ("*" | "/" | "%") element }`
    fn parse_scaling(&mut self) -> Option<Expr> {
        self.parse_binary(
            Self::parse_element,
            &[BinaryOp::Mul, BinaryOp::Div, BinaryOp::Mod],
            &[
                TokenKind::Add,
                TokenKind::Sub,
                TokenKind::Le,
                TokenKind::Lt,
                TokenKind::Ge,
                TokenKind::Gt,
                TokenKind::Eq,
                TokenKind::Ne,
                TokenKind::And,
                TokenKind::Xor,
                TokenKind::Or,
                TokenKind::RBrace,
                TokenKind::Pipe,
                TokenKind::RParen,
            ],
            "'-', '+', '<=', '<', '>=', '>', '==', '!=', 'and', 'xor', 'or', '}', '|' or ')'",
        )
    }

    /// The atoms of the expression grammar.
    fn parse_element(&mut self) -> Option<Expr> {
        match self.token.kind {
            TokenKind::Sub | TokenKind::Not => {
                let token = self.token.clone();
                let is_negative = self.token.kind == TokenKind::Sub;
                self.advance();
                let value = Box::new(self.parse_element()?);
                if is_negative {
                    Some(Expr::Negative(Negative { value, token }))
                } else {
                    Some(Expr::Negation(Negation { value, token }))
                }
            },
            TokenKind::LParen => {
                self.advance();
                let predicate = self.parse_predicate()?;
                self.advance();
                if self.token.kind != TokenKind::RParen {
                    self.error("Element", "')'");
                    return None;
                }
                Some(predicate)
            },
            TokenKind::Pipe => {
                self.advance();
                if self.token.kind != TokenKind::Set {
                    self.error("Element", "'set'");
                    return None;
                }
                let cardinality = self.parse_set()?;
                self.advance();
                if self.token.kind != TokenKind::Pipe {
                    self.error("Element", "'|'");
                    return None;
                }
                Some(cardinality)
            },
            TokenKind::LBracket => self.parse_coordinate().map(Expr::Coordinate),
            TokenKind::NatLit => {
                let token = self.token.clone();
                let value = self.nat_value("Element")?;
                Some(Expr::Integer(Integer { value, token }))
            },
            TokenKind::DecLit => {
                let token = self.token.clone();
                let value = match self.token.lexeme.parse::<f64>() {
                    Ok(value) => value,
                    Err(_) => {
                        self.error("Element", "decimal literal");
                        return None;
                    },
                };
                Some(Expr::Decimal(Decimal { value, token }))
            },
            TokenKind::CharLit => {
                let token = self.token.clone();
                let glyph = self.token.lexeme.chars().next().unwrap_or(' ');
                Some(Expr::Character(Character { glyph, token }))
            },
            TokenKind::Ident | TokenKind::This => {
                let token = self.token.clone();
                Some(Expr::Identifier(Identifier {
                    id: self.token.lexeme.clone(),
                    token,
                }))
            },
            _ => {
                self.error(
                    "Element",
                    "'-', 'not', '(', '[', '|', 'this', identifier, natural literal, decimal literal or character literal",
                );
                None
            },
        }
    }

    /// `cardinality = "set" ID "in" ("all" | coord_list) ":" predicate`
    fn parse_set(&mut self) -> Option<Expr> {
        let token = self.token.clone();
        if self.token.kind != TokenKind::Set {
            self.error("Set", "'set'");
            return None;
        }
        self.advance();
        if self.token.kind != TokenKind::Ident {
            self.error("Set", "identifier");
            return None;
        }
        let variable = self.token.lexeme.clone();
        self.advance();
        if self.token.kind != TokenKind::In {
            self.error("Set", "'in'");
            return None;
        }
        self.advance();
        let coords = if self.token.kind == TokenKind::All {
            None
        } else {
            Some(self.parse_coordinates()?)
        };
        self.advance();
        if self.token.kind != TokenKind::Colon {
            self.error("Set", "':'");
            return None;
        }
        self.advance();
        let predicate = Box::new(self.parse_predicate()?);
        Some(Expr::Cardinality(Cardinality {
            variable,
            coords,
            predicate,
            token,
        }))
    }

    /// `coord_list = coordinate { "," coordinate }`
    fn parse_coordinates(&mut self) -> Option<Vec<Coordinate>> {
        self.parse_series(
            Self::parse_coordinate,
            &[TokenKind::LBracket],
            &[TokenKind::Colon],
            "':'",
            Some(TokenKind::Comma),
        )
    }
}
