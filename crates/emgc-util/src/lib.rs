//! emgc-util - Shared compiler plumbing.
//!
//! This crate provides the types every phase of the Emergent compiler leans
//! on: source locations ([`Span`]) and diagnostics ([`Diagnostic`],
//! [`Handler`]). The lexer stamps spans onto tokens, the parser and the code
//! generator emit diagnostics, and the driver decides when to print them.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Stage};
pub use span::Span;
