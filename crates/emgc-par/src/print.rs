//! Indented tree rendering of the AST, for the driver's `-t` flag.
//!
//! Indentation is two-phase: a set of "active pipe depths" and a current
//! depth counter. A child that is not the last at its depth is prefixed
//! with `"|-  "` and keeps its depth's pipe active in descendants; the last
//! child is prefixed with `"\-  "` and its depth's pipe is removed before
//! recursing. Each line starts with `"\n"` followed by `"|   "` or four
//! spaces per ancestor depth.

use rustc_hash::FxHashSet;

use crate::ast::{
    Cardinality, Coordinate, Expr, Integer, Model, Neighbour, Neighbourhood, Program, State,
    StateKind,
};

impl Program {
    /// Renders the whole AST as an indented textual tree.
    ///
    /// The output is deterministic: rendering the same tree twice yields
    /// byte-identical text.
    pub fn tree(&self) -> String {
        TreePrinter::new().program(self)
    }
}

/// Rendering state: which depths still have a pipe running through them,
/// and how deep the current node is.
struct TreePrinter {
    pipes: FxHashSet<usize>,
    depth: usize,
}

impl TreePrinter {
    fn new() -> Self {
        Self {
            pipes: FxHashSet::default(),
            depth: 0,
        }
    }

    /// Registers a pipe at the current depth so descendants show it.
    fn start_indent(&mut self) -> usize {
        self.pipes.insert(self.depth);
        self.depth
    }

    /// Removes the pipe at a given depth.
    fn end_indent(&mut self, level: usize) {
        self.pipes.remove(&level);
    }

    /// A line break plus the continuation columns of every ancestor depth.
    fn current_indent(&self) -> String {
        let mut text = String::from("\n");
        for level in 0..self.depth.saturating_sub(1) {
            if self.pipes.contains(&level) {
                text.push_str("|   ");
            } else {
                text.push_str("    ");
            }
        }
        text
    }

    /// Renders a homogeneous series under `label`; an empty series renders
    /// as `label Ø`.
    fn series<T>(
        &mut self,
        label: &str,
        items: &[T],
        render: fn(&mut Self, &T) -> String,
    ) -> String {
        if items.is_empty() {
            return format!("{} Ø", label);
        }
        let mut text = format!("{}:", label);
        let indent = self.start_indent();
        self.depth += 1;
        let last = items.len() - 1;
        for item in &items[..last] {
            text += &self.current_indent();
            text += "|-  ";
            text += &render(self, item);
        }
        self.end_indent(indent);
        text += &self.current_indent();
        text += "\\-  ";
        text += &render(self, &items[last]);
        self.depth -= 1;
        text
    }

    /// Renders a node's single (therefore last) child at the child depth.
    fn only_child(&mut self, text: &mut String, render: impl FnOnce(&mut Self) -> String) {
        self.depth += 1;
        *text += &self.current_indent();
        *text += "\\-  ";
        let child = render(self);
        *text += &child;
        self.depth -= 1;
    }

    fn program(&mut self, program: &Program) -> String {
        let mut text = String::from("<program>");
        let indent = self.start_indent();
        self.depth += 1;
        text += &self.current_indent();
        text += "|-  ";
        text += &self.series("<neighbourhoods>", &program.neighbourhoods, Self::neighbourhood);
        self.end_indent(indent);
        text += &self.current_indent();
        text += "\\-  ";
        text += &self.series("<models>", &program.models, Self::model);
        self.depth -= 1;
        text + "\n"
    }

    fn neighbourhood(&mut self, neighbourhood: &Neighbourhood) -> String {
        let mut text = format!(
            "<neighbourhood> {} : {}",
            neighbourhood.id, neighbourhood.dimensions
        );
        self.only_child(&mut text, |printer| {
            printer.series("<neighbours>", &neighbourhood.neighbours, Self::neighbour)
        });
        text
    }

    fn neighbour(&mut self, neighbour: &Neighbour) -> String {
        let mut text = match &neighbour.id {
            Some(id) => format!("<neighbour> {}", id),
            None => String::from("<neighbour>"),
        };
        self.only_child(&mut text, |printer| printer.coordinate(&neighbour.coordinate));
        text
    }

    fn coordinate(&mut self, coordinate: &Coordinate) -> String {
        self.series("<coordinate>", &coordinate.vector, Self::integer)
    }

    fn integer(&mut self, integer: &Integer) -> String {
        format!("<integer> {}", integer.value)
    }

    fn model(&mut self, model: &Model) -> String {
        let mut text = format!("<model> {} ~ {}", model.id, model.neighbourhood_id);
        self.only_child(&mut text, |printer| {
            printer.series("<states>", &model.states, Self::state)
        });
        text
    }

    fn state(&mut self, state: &State) -> String {
        match &state.kind {
            StateKind::Default => format!("<state> {} {} ~ default", state.id, state.glyph),
            StateKind::Empty => format!("<state> {} {}", state.id, state.glyph),
            StateKind::Guarded(predicate) => {
                let mut text = format!("<state> {} {}:", state.id, state.glyph);
                self.only_child(&mut text, |printer| printer.expr(predicate));
                text
            },
        }
    }

    fn expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Binary(binary) => {
                let mut text = format!("<expression> {}:", binary.op.name());
                let indent = self.start_indent();
                self.depth += 1;
                text += &self.current_indent();
                text += "|-  ";
                text += &self.expr(&binary.left);
                self.end_indent(indent);
                text += &self.current_indent();
                text += "\\-  ";
                text += &self.expr(&binary.right);
                self.depth -= 1;
                text
            },
            Expr::Negation(negation) => {
                let mut text = String::from("<negation>:");
                self.only_child(&mut text, |printer| printer.expr(&negation.value));
                text
            },
            Expr::Negative(negative) => {
                let mut text = String::from("<negative>:");
                self.only_child(&mut text, |printer| printer.expr(&negative.value));
                text
            },
            Expr::Cardinality(cardinality) => self.cardinality(cardinality),
            Expr::Coordinate(coordinate) => self.coordinate(coordinate),
            Expr::Integer(integer) => self.integer(integer),
            Expr::Decimal(decimal) => format!("<decimal> {}", decimal.value),
            Expr::Character(character) => format!("<character> {}", character.glyph),
            Expr::Identifier(identifier) => format!("<identifier> {}", identifier.id),
        }
    }

    fn cardinality(&mut self, cardinality: &Cardinality) -> String {
        match &cardinality.coords {
            None => {
                let mut text = format!("<cardinality> {} ~ all:", cardinality.variable);
                self.only_child(&mut text, |printer| printer.expr(&cardinality.predicate));
                text
            },
            Some(coords) => {
                let mut text = format!("<cardinality> {}:", cardinality.variable);
                let indent = self.start_indent();
                self.depth += 1;
                text += &self.current_indent();
                text += "|-  ";
                text += &self.series("<coordinates>", coords, Self::coordinate);
                self.end_indent(indent);
                text += &self.current_indent();
                text += "\\-  ";
                text += &self.expr(&cardinality.predicate);
                self.depth -= 1;
                text
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use emgc_util::Handler;

    fn tree_of(source: &str) -> String {
        let mut handler = Handler::new();
        let program = crate::parse(source, &mut handler)
            .unwrap_or_else(|| panic!("parse failed: {:?}", handler.diagnostics()));
        program.tree()
    }

    const RULE90: &str = "neighbourhood bi : 1 { l[-1], r[1] }\n\
        model rule90 : bi { state on 'X' { (l == 'X') xor (r == 'X') }  default state off '.' }";

    #[test]
    fn test_printing_is_deterministic() {
        let mut handler = Handler::new();
        let program = crate::parse(RULE90, &mut handler).expect("parse failed");
        assert_eq!(program.tree(), program.tree());
    }

    #[test]
    fn test_program_shape() {
        let tree = tree_of(RULE90);
        assert!(tree.starts_with("<program>"));
        assert!(tree.ends_with('\n'));
        // Exactly one program block with both subtrees, neighbourhoods first.
        assert_eq!(tree.matches("<program>").count(), 1);
        let neighbourhoods = tree.find("<neighbourhoods>").expect("neighbourhoods subtree");
        let models = tree.find("<models>").expect("models subtree");
        assert!(neighbourhoods < models);
    }

    #[test]
    fn test_child_prefixes() {
        let tree = tree_of(RULE90);
        // The neighbourhoods subtree is not the program's last child; the
        // models subtree is.
        assert!(tree.contains("|-  <neighbourhoods>:"));
        assert!(tree.contains("\\-  <models>:"));
        // Two neighbours: first piped, last slashed.
        assert!(tree.contains("|-  <neighbour> l"));
        assert!(tree.contains("\\-  <neighbour> r"));
    }

    #[test]
    fn test_empty_series_renders_nullset() {
        let tree = tree_of("neighbourhood n : 1 { [1] }");
        assert!(tree.contains("<models> Ø"));
    }

    #[test]
    fn test_state_labels() {
        let tree = tree_of(RULE90);
        assert!(tree.contains("<state> on X:"));
        assert!(tree.contains("<state> off . ~ default"));
    }

    #[test]
    fn test_expression_labels() {
        let tree = tree_of(RULE90);
        assert!(tree.contains("<expression> XOR:"));
        assert!(tree.contains("<expression> EQUALS:"));
        assert!(tree.contains("<identifier> l"));
        assert!(tree.contains("<character> X"));
    }

    #[test]
    fn test_integer_labels() {
        let tree = tree_of("neighbourhood n : 2 { [0,-1] }");
        assert!(tree.contains("<coordinate>:"));
        assert!(tree.contains("|-  <integer> 0"));
        assert!(tree.contains("\\-  <integer> -1"));
    }

    #[test]
    fn test_cardinality_labels() {
        let tree = tree_of(
            "model m : n { state a 'X' { |set v in all : v == 'X'| == 2 } default state d '.' }",
        );
        assert!(tree.contains("<cardinality> v ~ all:"));
    }

    #[test]
    fn test_pipe_columns_align() {
        let tree = tree_of(RULE90);
        // While inside the (non-last) neighbourhoods subtree, descendant
        // lines carry the program-level pipe in their first column.
        let has_piped_line = tree
            .lines()
            .any(|line| line.starts_with("|   ") && line.contains("<neighbour>"));
        assert!(has_piped_line, "expected piped continuation lines:\n{}", tree);
    }
}
