//! Expression code generation.
//!
//! Predicates become C++ boolean expressions over the simulation globals.
//! Identifier resolution happens here, against the scope tables built up
//! by the declaration pass: `this`, then a named neighbour of the current
//! neighbourhood, then a state of the current model, then a
//! cardinality-bound variable.

use emgc_par::ast::{Binary, BinaryOp, Cardinality, Coordinate, Expr, Identifier};

use crate::Generator;

impl<'ast, 'h> Generator<'ast, 'h> {
    /// Emits any predicate expression.
    pub(crate) fn expr(&mut self, expr: &'ast Expr) -> Option<String> {
        match expr {
            Expr::Binary(binary) => self.binary(binary),
            Expr::Negation(negation) => Some(format!("!{}", self.expr(&negation.value)?)),
            Expr::Negative(negative) => Some(format!("-{}", self.expr(&negative.value)?)),
            Expr::Cardinality(cardinality) => self.cardinality(cardinality),
            Expr::Coordinate(coordinate) => self.coordinate(coordinate),
            Expr::Integer(integer) => Some(integer.value.to_string()),
            Expr::Decimal(decimal) => Some(decimal.value.to_string()),
            Expr::Character(character) => Some(format!("'{}'", character.glyph)),
            Expr::Identifier(identifier) => self.identifier(identifier),
        }
    }

    /// Emits `(L OP R)`; `xor` has no C++ operator and expands to its
    /// disjunctive form.
    fn binary(&mut self, binary: &'ast Binary) -> Option<String> {
        let l = self.expr(&binary.left)?;
        let r = self.expr(&binary.right)?;

        Some(match binary.op {
            BinaryOp::And => format!("({} && {})", l, r),
            BinaryOp::Or => format!("({} || {})", l, r),
            BinaryOp::Xor => format!("(({} && !{}) || (!{} && {}))", l, r, l, r),
            BinaryOp::Eq => format!("({} == {})", l, r),
            BinaryOp::Ne => format!("({} != {})", l, r),
            BinaryOp::Le => format!("({} <= {})", l, r),
            BinaryOp::Lt => format!("({} < {})", l, r),
            BinaryOp::Ge => format!("({} >= {})", l, r),
            BinaryOp::Gt => format!("({} > {})", l, r),
            BinaryOp::Add => format!("({} + {})", l, r),
            BinaryOp::Sub => format!("({} - {})", l, r),
            BinaryOp::Mul => format!("({} * {})", l, r),
            BinaryOp::Div => format!("({} / {})", l, r),
            BinaryOp::Mod => format!("({} % {})", l, r),
        })
    }

    /// Emits a coordinate in expression position: the wrapped grid index of
    /// the cell it names.
    pub(crate) fn coordinate(&mut self, coordinate: &'ast Coordinate) -> Option<String> {
        let code = self.coordinate_restricted(coordinate)?;
        let current = self.current_neighbourhood?;
        if current.dimensions == 1 {
            Some(format!("coordinate1d(x + {})", code))
        } else {
            Some(format!("coordinate2d(add_point({}, x, y))", code))
        }
    }

    /// Emits a coordinate's raw offset form: `N` in 1-D, `{X, Y}` in 2-D.
    ///
    /// This is also where the arity check against the current
    /// neighbourhood's dimensions lives.
    pub(crate) fn coordinate_restricted(
        &mut self,
        coordinate: &'ast Coordinate,
    ) -> Option<String> {
        let current = self.current_neighbourhood?;
        if current.dimensions != coordinate.vector.len() as i64 {
            self.semantic_error(
                "Coordinate",
                "Dimension don't match neighbourhood.",
                &coordinate.token,
            );
            return None;
        }
        let list = coordinate
            .vector
            .iter()
            .map(|integer| integer.value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        if current.dimensions == 1 {
            Some(list)
        } else {
            Some(format!("{{{}}}", list))
        }
    }

    /// Resolves an identifier reference and emits the value it denotes.
    fn identifier(&mut self, identifier: &'ast Identifier) -> Option<String> {
        if identifier.id == "this" {
            return Some(String::from("prev[current]"));
        }

        let current = self.current_neighbourhood?;

        let neighbour = self
            .neighbour_ids
            .get(&current.id)
            .and_then(|table| table.get(identifier.id.as_str()))
            .copied();
        if let Some(coordinate) = neighbour {
            // A neighbour names a cell; its value is the previous grid at
            // that cell's index.
            let index = self.coordinate(coordinate)?;
            return Some(format!("prev[{}]", index));
        }

        if let Some(state) = self.local_states.get(identifier.id.as_str()) {
            return Some(format!("'{}'", state.glyph));
        }

        if self.variables.iter().any(|variable| variable == &identifier.id) {
            return Some(if current.dimensions == 1 {
                format!("prev[coordinate1d(x + {})]", identifier.id)
            } else {
                format!("prev[coordinate2d(add_point({}, x, y))]", identifier.id)
            });
        }

        self.semantic_error("Identifier", "Unrecognised name.", &identifier.token);
        None
    }

    /// Emits a cardinality as `std::count_if` over either the full
    /// neighbourhood vector (`all`) or a freshly constructed literal list,
    /// with the bound variable scoped to the lambda body.
    fn cardinality(&mut self, cardinality: &'ast Cardinality) -> Option<String> {
        let current = self.current_neighbourhood?;
        let (element_type, suffix) = if current.dimensions == 2 {
            ("std::pair<int, int>", "2d")
        } else {
            ("int", "1d")
        };

        let list = match &cardinality.coords {
            None => current.id.clone(),
            Some(coords) => {
                let mut entries = Vec::new();
                for coordinate in coords {
                    entries.push(self.coordinate_restricted(coordinate)?);
                }
                format!("vec{}({{{}}})", suffix, entries.join(", "))
            },
        };

        self.variables.push(cardinality.variable.clone());
        let condition = self.expr(&cardinality.predicate);
        self.variables.pop();
        let condition = condition?;

        Some(format!(
            "std::count_if({list}.begin(), {list}.end(), [=]({element_type} {variable}) {{ return {condition}; }})",
            list = list,
            element_type = element_type,
            variable = cardinality.variable,
            condition = condition,
        ))
    }
}
