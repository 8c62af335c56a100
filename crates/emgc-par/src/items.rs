//! Declaration productions: program, neighbourhood, model, state,
//! neighbour, coordinate.
//!
//! Every production follows the same convention: it is entered with the
//! current token being its first token, and it returns with the current
//! token being the last token it consumed.

use emgc_lex::TokenKind;

use crate::ast::{
    Coordinate, Integer, Model, Neighbour, Neighbourhood, Program, State, StateKind,
};
use crate::Parser;

impl<'a> Parser<'a> {
    /// `program = { model | neighbourhood }+` followed by end of file.
    pub fn parse_program(&mut self) -> Option<Program> {
        self.advance();
        let mut models = Vec::new();
        let mut neighbourhoods = Vec::new();
        loop {
            match self.token.kind {
                TokenKind::Model => models.push(self.parse_model()?),
                TokenKind::Neighbourhood => neighbourhoods.push(self.parse_neighbourhood()?),
                _ => break,
            }
            self.advance();
        }
        if models.is_empty() && neighbourhoods.is_empty() {
            self.error("Program", "'model' or 'neighbourhood'");
            return None;
        }
        if self.token.kind != TokenKind::Eof {
            self.error("Program", "'model' or 'neighbourhood'");
            return None;
        }
        Some(Program {
            neighbourhoods,
            models,
        })
    }

    /// `neighbourhood = "neighbourhood" ID ":" NAT "{" neighbours "}"`
    fn parse_neighbourhood(&mut self) -> Option<Neighbourhood> {
        let token = self.token.clone();
        if self.token.kind != TokenKind::Neighbourhood {
            self.error("Neighbourhood", "'neighbourhood'");
            return None;
        }
        self.advance();
        if self.token.kind != TokenKind::Ident {
            self.error("Neighbourhood", "identifier");
            return None;
        }
        let id = self.token.lexeme.clone();
        self.advance();
        if self.token.kind != TokenKind::Colon {
            self.error("Neighbourhood", "':'");
            return None;
        }
        self.advance();
        if self.token.kind != TokenKind::NatLit {
            self.error("Neighbourhood", "natural literal");
            return None;
        }
        let dimensions = self.nat_value("Neighbourhood")?;
        self.advance();
        if self.token.kind != TokenKind::LBrace {
            self.error("Neighbourhood", "'{'");
            return None;
        }
        self.advance();
        let neighbours = if self.token.kind == TokenKind::RBrace {
            Vec::new()
        } else {
            let neighbours = self.parse_neighbours()?;
            self.advance();
            neighbours
        };
        if self.token.kind != TokenKind::RBrace {
            self.error("Neighbourhood", "'}'");
            return None;
        }
        Some(Neighbourhood {
            id,
            dimensions,
            neighbours,
            token,
        })
    }

    /// `neighbours = [ neighbour { "," neighbour } ]`
    fn parse_neighbours(&mut self) -> Option<Vec<Neighbour>> {
        self.parse_series(
            Self::parse_neighbour,
            &[TokenKind::Ident, TokenKind::LBracket],
            &[TokenKind::RBrace],
            "'}'",
            Some(TokenKind::Comma),
        )
    }

    /// `neighbour = [ ID ] coordinate`
    fn parse_neighbour(&mut self) -> Option<Neighbour> {
        let token = self.token.clone();
        let id = if self.token.kind == TokenKind::Ident {
            let id = self.token.lexeme.clone();
            self.advance();
            Some(id)
        } else {
            None
        };
        let coordinate = self.parse_coordinate()?;
        Some(Neighbour {
            id,
            coordinate,
            token,
        })
    }

    /// `model = "model" ID ":" ID "{" { state } "}"`
    fn parse_model(&mut self) -> Option<Model> {
        let token = self.token.clone();
        if self.token.kind != TokenKind::Model {
            self.error("Model", "'model'");
            return None;
        }
        self.advance();
        if self.token.kind != TokenKind::Ident {
            self.error("Model", "identifier");
            return None;
        }
        let id = self.token.lexeme.clone();
        self.advance();
        if self.token.kind != TokenKind::Colon {
            self.error("Model", "':'");
            return None;
        }
        self.advance();
        if self.token.kind != TokenKind::Ident {
            self.error("Model", "identifier");
            return None;
        }
        let neighbourhood_id = self.token.lexeme.clone();
        self.advance();
        if self.token.kind != TokenKind::LBrace {
            self.error("Model", "'{'");
            return None;
        }
        self.advance();
        let states = if self.token.kind == TokenKind::RBrace {
            Vec::new()
        } else {
            let states = self.parse_states()?;
            self.advance();
            states
        };
        if self.token.kind != TokenKind::RBrace {
            self.error("Model", "'}'");
            return None;
        }
        Some(Model {
            id,
            neighbourhood_id,
            states,
            token,
        })
    }

    /// `{ state }` - states follow each other with no separator.
    fn parse_states(&mut self) -> Option<Vec<State>> {
        self.parse_series(
            Self::parse_state,
            &[TokenKind::Default, TokenKind::State],
            &[TokenKind::RBrace],
            "'}'",
            None,
        )
    }

    /// `state = "default" "state" ID CHAR | "state" ID CHAR "{" [ predicate ] "}"`
    fn parse_state(&mut self) -> Option<State> {
        let token = self.token.clone();
        if self.token.kind == TokenKind::Default {
            self.advance();
            if self.token.kind != TokenKind::State {
                self.error("State", "'state'");
                return None;
            }
            self.advance();
            if self.token.kind != TokenKind::Ident {
                self.error("State", "identifier");
                return None;
            }
            let id = self.token.lexeme.clone();
            self.advance();
            if self.token.kind != TokenKind::CharLit {
                self.error("State", "character literal");
                return None;
            }
            let glyph = self.token.lexeme.chars().next().unwrap_or(' ');
            return Some(State {
                id,
                glyph,
                kind: StateKind::Default,
                token,
            });
        }
        if self.token.kind == TokenKind::State {
            self.advance();
            if self.token.kind != TokenKind::Ident {
                self.error("State", "identifier");
                return None;
            }
            let id = self.token.lexeme.clone();
            self.advance();
            if self.token.kind != TokenKind::CharLit {
                self.error("State", "character literal");
                return None;
            }
            let glyph = self.token.lexeme.chars().next().unwrap_or(' ');
            self.advance();
            if self.token.kind != TokenKind::LBrace {
                self.error("State", "'{'");
                return None;
            }
            self.advance();
            if self.token.kind == TokenKind::RBrace {
                return Some(State {
                    id,
                    glyph,
                    kind: StateKind::Empty,
                    token,
                });
            }
            let predicate = self.parse_predicate()?;
            self.advance();
            if self.token.kind != TokenKind::RBrace {
                self.error("State", "'}'");
                return None;
            }
            return Some(State {
                id,
                glyph,
                kind: StateKind::Guarded(predicate),
                token,
            });
        }
        self.error("State", "'default' or 'state'");
        None
    }

    /// `coordinate = "[" integer { "," integer } "]"`
    pub(crate) fn parse_coordinate(&mut self) -> Option<Coordinate> {
        let token = self.token.clone();
        if self.token.kind != TokenKind::LBracket {
            self.error("Coordinate", "'['");
            return None;
        }
        self.advance();
        let vector = self.parse_vector()?;
        self.advance();
        if self.token.kind != TokenKind::RBracket {
            self.error("Coordinate", "']'");
            return None;
        }
        Some(Coordinate { vector, token })
    }

    /// The comma-separated integers inside a coordinate.
    fn parse_vector(&mut self) -> Option<Vec<Integer>> {
        self.parse_series(
            Self::parse_integer,
            &[TokenKind::Sub, TokenKind::NatLit],
            &[TokenKind::RBracket],
            "']'",
            Some(TokenKind::Comma),
        )
    }

    /// `integer = [ "-" ] NAT`
    fn parse_integer(&mut self) -> Option<Integer> {
        let token = self.token.clone();
        let negative = if self.token.kind == TokenKind::Sub {
            self.advance();
            true
        } else {
            false
        };
        if self.token.kind != TokenKind::NatLit {
            self.error("Integer", "'-' or natural literal");
            return None;
        }
        let value = self.nat_value("Integer")?;
        Some(Integer {
            value: if negative { -value } else { value },
            token,
        })
    }
}
