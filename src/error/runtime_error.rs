/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read a variable that no visible frame binds.
    #[error("Runtime error: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that was never defined.
    #[error("Runtime error: Function '{name}' is not found.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// A positional call supplied the wrong number of arguments.
    #[error("Runtime error: Function '{name}' expects {expected} argument(s), but {found} were given.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of formal parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// A labelled call's labels do not match the parameter names.
    #[error("Runtime error: Labelled call to '{name}' does not match its parameters: {details}.")]
    LabelMismatch {
        /// The name of the function.
        name:    String,
        /// Which label was missing, unknown, or repeated.
        details: String,
    },
    /// An operation received a value of the wrong kind.
    #[error("Runtime error: Type mismatch in {context}: expected {expected}, found {found}.")]
    TypeMismatch {
        /// The kind of value required.
        expected: &'static str,
        /// The kind of value received.
        found:    &'static str,
        /// The construct that required it.
        context:  String,
    },
    /// Attempted division by zero.
    #[error("Runtime error: Division by zero.")]
    DivisionByZero,
    /// Integer arithmetic left the 64-bit signed range.
    #[error("Runtime error: Integer overflow in '{operator}'.")]
    Overflow {
        /// The operator whose result overflowed.
        operator: &'static str,
    },
    /// The program defines no `main` function.
    #[error("Runtime error: This program doesn't have a main() function.")]
    MissingMain,
    /// A function name was defined twice.
    #[error("Runtime error: Function '{name}' is already defined.")]
    DuplicateFunction {
        /// The name of the function.
        name: String,
    },
    /// Calls nested deeper than the interpreter allows.
    #[error("Runtime error: Maximum call depth of {depth} exceeded.")]
    RecursionLimit {
        /// The depth limit that was hit.
        depth: usize,
    },
    /// Writing `println` output failed.
    #[error("Runtime error: Failed to write output: {message}.")]
    Output {
        /// The underlying I/O error message.
        message: String,
    },
}
