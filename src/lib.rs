//! # toys
//!
//! toys is a small scripting language with a tree-walking interpreter.
//! Programs consist of global variables and functions; execution starts at
//! `main` and its result is the program's result.
//!
//! ```text
//! define fact(n) {
//!   if (n < 2) 1; else n * fact(n - 1);
//! }
//! define main() {
//!   println(fact(5));
//! }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::Error,
    interpreter::{evaluator::core::Interpreter, parser::parse_program, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expression`, `TopLevel` and `Program` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parse errors carry the line and column they refer to; runtime errors carry
/// the names and kinds involved. Both implement `std::error::Error`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scope management, evaluation
/// and value representation.
pub mod interpreter;

/// Parses `source` as a program and runs it, printing to standard output.
///
/// Returns the value produced by `main`.
///
/// # Errors
/// Returns [`Error::Parse`] if the source is not a valid program and
/// [`Error::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use toys::{interpreter::value::core::Value, run_program};
///
/// let source = "define main() { 1 + 2; }";
/// assert_eq!(run_program(source).unwrap(), Value::Int(3));
///
/// // `x` is never defined.
/// assert!(run_program("define main() { x; }").is_err());
/// ```
pub fn run_program(source: &str) -> Result<Value, Error> {
    run_program_with_output(source, std::io::stdout())
}

/// Like [`run_program`], but `println` writes to `output`.
pub fn run_program_with_output<W: Write>(source: &str, output: W) -> Result<Value, Error> {
    let program = parse_program(source)?;
    let mut interpreter = Interpreter::with_output(output);
    Ok(interpreter.call_main(&program)?)
}
