//! Driver error types.
//!
//! These cover everything that can go wrong outside the parser and the
//! code generator: bad command lines, wrong file extensions, and the
//! catch-all raised after diagnostics have already been printed.

use thiserror::Error;

/// Usage text shared by `--help` and the argument errors.
pub const USAGE: &str = "Usage: ./emergent [OPTION]... SOURCE.emg";

/// Error type for the compiler driver.
#[derive(Debug, Error)]
pub enum DriverError {
    /// No source file argument was given.
    #[error("Error: Missing operand\nUsage: ./emergent [OPTION]... SOURCE.emg")]
    MissingOperand,

    /// An unrecognised option appeared before the final positional
    /// argument.
    #[error("Error: Unknown operand {0}\nUsage: ./emergent [OPTION]... SOURCE.emg")]
    UnknownOperand(String),

    /// The source path does not end in `.emg`.
    #[error("Error: SOURCE file extension must be .emg")]
    BadExtension,

    /// A parse or semantic diagnostic was reported; details are already on
    /// stderr.
    #[error("Error: Compilation failed")]
    CompilationFailed,
}
