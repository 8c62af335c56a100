//! Compiler diagnostics.
//!
//! Two stages can reject a program: the parser (syntax) and the code
//! generator (semantics). Both describe the failure with a [`Diagnostic`]
//! naming the production or node kind responsible, what went wrong, the
//! offending lexeme, and where it sits in the source. Diagnostics are
//! collected by a [`Handler`]; the driver prints them to stderr and maps
//! their presence to a non-zero exit.

use std::fmt;

use crate::span::Span;

/// Which compiler stage raised a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Raised by the parser; the message names the expected tokens.
    Parsing,
    /// Raised during code generation; the message is a semantic phrase.
    Semantic,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Parsing => write!(f, "Parsing Error"),
            Stage::Semantic => write!(f, "Semantic Error"),
        }
    }
}

/// A single compiler error.
///
/// Rendered as two lines:
///
/// ```text
/// Parsing Error: Model
/// >>> Expected ':'. Instead got 'x'. Line 3, Column 7.
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Stage that raised the error.
    pub stage: Stage,
    /// Production or node kind responsible (e.g. `Model`, `Coordinate`).
    pub title: String,
    /// Human phrase: `Expected ...` for parse errors, a semantic sentence
    /// otherwise.
    pub message: String,
    /// The offending lexeme, quoted in the rendered output.
    pub found: String,
    /// Where the offending lexeme starts.
    pub span: Span,
}

impl Diagnostic {
    /// Creates a parse error for `production`, naming the tokens that could
    /// have legally appeared.
    pub fn parsing(
        production: impl Into<String>,
        expected: impl fmt::Display,
        found: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            stage: Stage::Parsing,
            title: production.into(),
            message: format!("Expected {}.", expected),
            found: found.into(),
            span,
        }
    }

    /// Creates a semantic error raised while generating code for the node
    /// kind named by `title`.
    pub fn semantic(
        title: impl Into<String>,
        message: impl Into<String>,
        found: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            stage: Stage::Semantic,
            title: title.into(),
            message: message.into(),
            found: found.into(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let connector = match self.stage {
            Stage::Parsing => "Instead got",
            Stage::Semantic => "Found",
        };
        write!(
            f,
            "{}: {}\n>>> {} {} '{}'. {}.",
            self.stage, self.title, self.message, connector, self.found, self.span
        )
    }
}

/// Collects diagnostics across a compilation.
///
/// The compiler stops at the first error, so the handler usually holds zero
/// or one entries; it still stores a list so tests can inspect everything
/// that was reported.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns true if any error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// All recorded diagnostics, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Prints every recorded diagnostic to stderr.
    pub fn report_to_stderr(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic);
        }
    }
}
