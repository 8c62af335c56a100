//! Typed AST for Emergent programs.
//!
//! Nodes are built bottom-up by the parser and owned by their parent; the
//! [`Program`] root owns the whole tree. Homogeneous sequences are plain
//! vectors of the concrete node type rather than of a general node sum.
//!
//! Every node keeps the [`Token`] that was current when it was parsed, so a
//! semantic error found later can still quote a lexeme and its position.

use emgc_lex::{Token, TokenKind};

/// Root of the AST: every neighbourhood and model in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub neighbourhoods: Vec<Neighbourhood>,
    pub models: Vec<Model>,
}

/// A named set of relative cell offsets, in 1 or 2 dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighbourhood {
    pub id: String,
    /// Declared dimensionality. The parser accepts any natural; codegen
    /// rejects anything other than 1 or 2.
    pub dimensions: i64,
    pub neighbours: Vec<Neighbour>,
    pub token: Token,
}

/// One offset in a neighbourhood, optionally named.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighbour {
    /// `None` for anonymous neighbours, which may repeat.
    pub id: Option<String>,
    pub coordinate: Coordinate,
    pub token: Token,
}

/// An integer vector naming a cell relative to the subject cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub vector: Vec<Integer>,
    pub token: Token,
}

/// A cellular-automaton definition: states bound to one neighbourhood.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: String,
    pub neighbourhood_id: String,
    pub states: Vec<State>,
    pub token: Token,
}

/// How a state is guarded.
#[derive(Clone, Debug, PartialEq)]
pub enum StateKind {
    /// `default state` - fires when no other state matches.
    Default,
    /// `state id 'c' { }` - empty braces, never fires.
    Empty,
    /// `state id 'c' { predicate }`.
    Guarded(Expr),
}

/// One cell state: name, visible glyph, and guard.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub id: String,
    pub glyph: char,
    pub kind: StateKind,
    pub token: Token,
}

/// Binary operation kinds, in precedence-agnostic form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Eq,
    Ne,
    Le,
    Lt,
    Ge,
    Gt,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Maps an operator token to its operation, if it is one.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::And => Some(BinaryOp::And),
            TokenKind::Or => Some(BinaryOp::Or),
            TokenKind::Xor => Some(BinaryOp::Xor),
            TokenKind::Eq => Some(BinaryOp::Eq),
            TokenKind::Ne => Some(BinaryOp::Ne),
            TokenKind::Le => Some(BinaryOp::Le),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Ge => Some(BinaryOp::Ge),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::Add => Some(BinaryOp::Add),
            TokenKind::Sub => Some(BinaryOp::Sub),
            TokenKind::Mul => Some(BinaryOp::Mul),
            TokenKind::Div => Some(BinaryOp::Div),
            TokenKind::Mod => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    /// Human-readable operation name, used by the tree printer.
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Xor => "XOR",
            BinaryOp::Eq => "EQUALS",
            BinaryOp::Ne => "NOT EQUALS",
            BinaryOp::Le => "LESS THAN OR EQUAL",
            BinaryOp::Lt => "LESS THAN",
            BinaryOp::Ge => "GREATER THAN OR EQUAL",
            BinaryOp::Gt => "GREATER THAN",
            BinaryOp::Add => "ADDITION",
            BinaryOp::Sub => "SUBTRACT",
            BinaryOp::Mul => "MULTIPLY",
            BinaryOp::Div => "DIVIDE",
            BinaryOp::Mod => "MODULUS",
        }
    }
}

/// A predicate expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Binary(Binary),
    Negation(Negation),
    Negative(Negative),
    Cardinality(Cardinality),
    Coordinate(Coordinate),
    Integer(Integer),
    Decimal(Decimal),
    Character(Character),
    Identifier(Identifier),
}

/// Binary expression: operation, left and right operands.
#[derive(Clone, Debug, PartialEq)]
pub struct Binary {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub token: Token,
}

/// Logical `not`.
#[derive(Clone, Debug, PartialEq)]
pub struct Negation {
    pub value: Box<Expr>,
    pub token: Token,
}

/// Arithmetic minus.
#[derive(Clone, Debug, PartialEq)]
pub struct Negative {
    pub value: Box<Expr>,
    pub token: Token,
}

/// `|set v in ... : P|` - counts the coordinates whose bound cell satisfies
/// the predicate.
#[derive(Clone, Debug, PartialEq)]
pub struct Cardinality {
    /// Variable bound over each coordinate of the set.
    pub variable: String,
    /// `None` means `all`: every neighbour of the enclosing neighbourhood.
    pub coords: Option<Vec<Coordinate>>,
    pub predicate: Box<Expr>,
    pub token: Token,
}

/// Integer literal (possibly negated inside a coordinate).
#[derive(Clone, Debug, PartialEq)]
pub struct Integer {
    pub value: i64,
    pub token: Token,
}

/// Decimal literal.
#[derive(Clone, Debug, PartialEq)]
pub struct Decimal {
    pub value: f64,
    pub token: Token,
}

/// Character literal in a predicate, compared against cell contents.
#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    pub glyph: char,
    pub token: Token,
}

/// Identifier reference inside a predicate: `this`, a neighbour, a state,
/// or a cardinality-bound variable. Resolution happens during codegen.
#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    pub id: String,
    pub token: Token,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_from_token() {
        assert_eq!(BinaryOp::from_token(TokenKind::And), Some(BinaryOp::And));
        assert_eq!(BinaryOp::from_token(TokenKind::Xor), Some(BinaryOp::Xor));
        assert_eq!(BinaryOp::from_token(TokenKind::Le), Some(BinaryOp::Le));
        assert_eq!(BinaryOp::from_token(TokenKind::Mod), Some(BinaryOp::Mod));
        assert_eq!(BinaryOp::from_token(TokenKind::Ident), None);
        assert_eq!(BinaryOp::from_token(TokenKind::Not), None);
    }

    #[test]
    fn test_binary_op_names() {
        assert_eq!(BinaryOp::Xor.name(), "XOR");
        assert_eq!(BinaryOp::Ne.name(), "NOT EQUALS");
        assert_eq!(BinaryOp::Ge.name(), "GREATER THAN OR EQUAL");
    }
}
