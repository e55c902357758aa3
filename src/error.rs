/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Every parse error carries the 1-based line and column it refers to.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined names, arity mismatches, type mismatches or division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a complete run: either the source did not parse or the
/// program failed while executing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source text is not a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
