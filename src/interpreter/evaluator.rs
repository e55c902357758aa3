/// Core evaluation logic and interpreter state.
///
/// Contains the [`Interpreter`](core::Interpreter), the expression dispatch,
/// program start-up (`call_main`) and `reset`.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic and the comparison operators.
pub mod binary;

/// Blocks, conditionals and loops.
pub mod control;

/// Function evaluation.
///
/// Handles positional and labelled calls, argument binding, frame lifetime
/// and the call-depth limit.
pub mod function;

/// The `println` primitive.
pub mod print;
