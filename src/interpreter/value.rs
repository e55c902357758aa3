/// The `Value` enum and its conversions.
///
/// Defines every runtime value the evaluator can produce, together with the
/// accessors that turn a value into the concrete Rust type an operation
/// requires (reporting a type mismatch otherwise).
pub mod core;
