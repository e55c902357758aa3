/// Parser state and entry points.
///
/// Defines the backtracking [`Cursor`](core::Cursor), the `one_of`
/// combinator used at every choice point, and the source-level entry points
/// for programs, scripts and single expressions.
pub mod core;

/// Binary operator parsing.
///
/// Implements the three left-associative precedence levels: comparison,
/// additive and multiplicative.
pub mod binary;

/// Primary expressions: literals, variables, calls and parenthesized
/// expressions.
pub mod primary;

/// Line (statement) parsing, including blocks and the `for` desugaring.
pub mod statement;

/// Top-level `global` and `define` definitions.
pub mod program;

/// Small helpers shared by the grammar rules.
pub mod utils;

pub use self::core::{parse_expression, parse_lines, parse_program};
