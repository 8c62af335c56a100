//! emgc-gen - Semantic validation and C++ code generation.
//!
//! A single depth-first traversal of the AST both checks the program's
//! semantics (identifier resolution, dimension agreement, uniqueness rules)
//! and produces the text of the target simulator. There is no intermediate
//! representation: each node contributes a string fragment, assembled
//! around the fixed runtime skeleton in [`runtime`].
//!
//! Failure is `None`: the failing node emits a [`Diagnostic`] and every
//! caller propagates, so the first semantic error is terminal.

mod expr;
mod runtime;


use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use emgc_lex::Token;
use emgc_par::ast::{Coordinate, Model, Neighbourhood, Program, State, StateKind};
use emgc_util::{Diagnostic, Handler};

/// Generates the complete C++ simulator for a parsed program.
///
/// Returns `None` after emitting a diagnostic to `handler` on the first
/// semantic error.
pub fn generate(program: &Program, handler: &mut Handler) -> Option<String> {
    Generator::new(handler).program(program)
}

/// What a top-level id is bound to; model and neighbourhood ids share one
/// namespace. Only neighbourhoods need to be resolvable later, so the
/// model arm carries no payload.
enum Global<'ast> {
    Neighbourhood(&'ast Neighbourhood),
    Model,
}

/// Traversal state for one code-generation run.
///
/// Holding the scope tables here (rather than in process-wide globals)
/// keeps the generator re-entrant: each run starts from empty tables.
pub struct Generator<'ast, 'h> {
    handler: &'h mut Handler,

    /// Top-level id -> declaration, for duplicate detection and for
    /// resolving a model's neighbourhood reference.
    globals: FxHashMap<String, Global<'ast>>,

    /// Named neighbours per neighbourhood, accumulated as declarations are
    /// visited.
    neighbour_ids: FxHashMap<String, IndexMap<String, &'ast Coordinate>>,

    /// The neighbourhood whose dimensions govern coordinate checks, set
    /// around each neighbourhood/model and cleared after.
    current_neighbourhood: Option<&'ast Neighbourhood>,

    /// States of the model currently being generated.
    local_states: IndexMap<String, &'ast State>,

    /// Stack of cardinality-bound variables currently in scope.
    variables: Vec<String>,
}

impl<'ast, 'h> Generator<'ast, 'h> {
    /// Creates a generator with empty scope tables.
    pub fn new(handler: &'h mut Handler) -> Self {
        Self {
            handler,
            globals: FxHashMap::default(),
            neighbour_ids: FxHashMap::default(),
            current_neighbourhood: None,
            local_states: IndexMap::new(),
            variables: Vec::new(),
        }
    }

    /// Emits the whole target program: preamble, neighbourhood tables and
    /// model functions in source order, then the main driver.
    pub fn program(&mut self, program: &'ast Program) -> Option<String> {
        let mut output = String::from(runtime::PREAMBLE);

        for neighbourhood in &program.neighbourhoods {
            if self
                .globals
                .insert(
                    neighbourhood.id.clone(),
                    Global::Neighbourhood(neighbourhood),
                )
                .is_some()
            {
                self.semantic_error(
                    "Neighbourhood",
                    "Duplicate identifiers conflict.",
                    &neighbourhood.token,
                );
                return None;
            }
            self.current_neighbourhood = Some(neighbourhood);
            let code = self.neighbourhood(neighbourhood);
            self.current_neighbourhood = None;
            output.push_str(&code?);
        }

        for model in &program.models {
            if self
                .globals
                .insert(model.id.clone(), Global::Model)
                .is_some()
            {
                self.semantic_error("Model", "Duplicate identifiers conflict.", &model.token);
                return None;
            }
            output.push_str(&self.model(model)?);
        }

        output.push_str(runtime::MAIN_PRELUDE);
        for model in &program.models {
            output.push_str(&runtime::dispatch_case(&model.id));
        }
        output.push_str(runtime::MAIN_POSTLUDE);
        Some(output)
    }

    /// Emits a neighbourhood's offset table and registers its named
    /// neighbours.
    fn neighbourhood(&mut self, neighbourhood: &'ast Neighbourhood) -> Option<String> {
        let mut entries = Vec::new();
        for neighbour in &neighbourhood.neighbours {
            entries.push(self.neighbour(neighbour)?);
        }
        let list = entries.join(", ");

        match neighbourhood.dimensions {
            1 => Some(format!(
                "std::vector<int> {} = std::vector<int> {{\n    {}\n}};\n",
                neighbourhood.id, list
            )),
            2 => Some(format!(
                "std::vector<std::pair<int,int>> {} = std::vector<std::pair<int,int>> {{\n    {}\n}};\n",
                neighbourhood.id, list
            )),
            _ => {
                self.semantic_error(
                    "Neighbourhood",
                    "Neighbourhood's dimensions must be 1 or 2.",
                    &neighbourhood.token,
                );
                None
            },
        }
    }

    /// Registers a named neighbour and emits its offset entry.
    fn neighbour(&mut self, neighbour: &'ast emgc_par::ast::Neighbour) -> Option<String> {
        let current = self.current_neighbourhood?;
        if let Some(id) = &neighbour.id {
            let table = self.neighbour_ids.entry(current.id.clone()).or_default();
            if table.contains_key(id) {
                self.semantic_error(
                    "Neighbour",
                    "Duplicate identifiers conflict.",
                    &neighbour.token,
                );
                return None;
            }
            table.insert(id.clone(), &neighbour.coordinate);
        }
        self.coordinate_restricted(&neighbour.coordinate)
    }

    /// Emits a model function, with the state chain checked and ordered.
    fn model(&mut self, model: &'ast Model) -> Option<String> {
        let neighbourhood = match self.globals.get(&model.neighbourhood_id) {
            Some(Global::Neighbourhood(neighbourhood)) => *neighbourhood,
            _ => {
                self.semantic_error(
                    "Model",
                    "Associated neighbourhood doesn't exist.",
                    &model.token,
                );
                return None;
            },
        };

        self.current_neighbourhood = Some(neighbourhood);
        let code = self.model_body(model, neighbourhood);
        self.current_neighbourhood = None;
        self.local_states.clear();
        code
    }

    fn model_body(
        &mut self,
        model: &'ast Model,
        neighbourhood: &'ast Neighbourhood,
    ) -> Option<String> {
        let mut default_state: Option<&'ast State> = None;
        for state in &model.states {
            if self.local_states.insert(state.id.clone(), state).is_some() {
                self.semantic_error("State", "Duplicate identifiers conflict.", &state.token);
                return None;
            }
            if matches!(state.kind, StateKind::Default) {
                if default_state.is_some() {
                    self.semantic_error("State", "Multiple Default States.", &state.token);
                    return None;
                }
                default_state = Some(state);
            }
        }
        let default_state = match default_state {
            Some(state) => state,
            None => {
                self.semantic_error("Model", "Missing default state.", &model.token);
                return None;
            },
        };

        let mut code = if neighbourhood.dimensions == 1 {
            runtime::model_header_1d(&model.id)
        } else {
            runtime::model_header_2d(&model.id)
        };

        for state in &model.states {
            if !matches!(state.kind, StateKind::Default) {
                code.push_str(&self.state(state)?);
            }
        }
        code.push_str(&self.state(default_state)?);

        code.push_str(if neighbourhood.dimensions == 1 {
            runtime::MODEL_FOOTER_1D
        } else {
            runtime::MODEL_FOOTER_2D
        });
        Some(code)
    }

    /// Emits one branch of the state chain.
    ///
    /// Guarded states become `if(P) { ... } else ` links; an empty
    /// predicate degenerates to `if(false)`; the default state is the final
    /// else-block.
    fn state(&mut self, state: &'ast State) -> Option<String> {
        match &state.kind {
            StateKind::Default => Some(format!(
                "{{\n                next[current] = '{}';\n            }}\n",
                state.glyph
            )),
            StateKind::Empty => {
                Some(String::from("if(false) {\n            } else "))
            },
            StateKind::Guarded(predicate) => {
                let condition = self.expr(predicate)?;
                Some(format!(
                    "if({}) {{\n                next[current] = '{}';\n            }} else ",
                    condition, state.glyph
                ))
            },
        }
    }

    /// Emits a semantic diagnostic anchored to the token recorded when the
    /// responsible node was parsed.
    pub(crate) fn semantic_error(&mut self, title: &str, message: &str, token: &Token) {
        self.handler.emit(Diagnostic::semantic(
            title,
            message,
            token.lexeme.clone(),
            token.span,
        ));
    }
}
