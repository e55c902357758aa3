use std::{collections::BTreeMap, fmt, rc::Rc};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible results of evaluating an expression:
/// assignments, function returns, loop results and conditions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// A 64-bit signed integer. Arithmetic on integers is checked.
    Int(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and boolean literals. Conditions of
    /// `if` and `while` must evaluate to `Bool`.
    Bool(bool),
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A mapping between values. No syntax produces one yet; the variant
    /// exists so that embedders can hand dictionaries to programs.
    Dictionary(Rc<BTreeMap<Self, Self>>),
    /// The result of a construct with nothing meaningful to return: an empty
    /// block, or an `if` without `else` whose condition is false.
    Unit,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<BTreeMap<Self, Self>> for Value {
    fn from(v: BTreeMap<Self, Self>) -> Self {
        Self::Dictionary(Rc::new(v))
    }
}

impl Value {
    /// A short name of the value's kind, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Array(_) => "array",
            Self::Dictionary(_) => "dictionary",
            Self::Unit => "unit",
        }
    }

    /// Converts the value to `i64`, or returns an error if not an integer.
    ///
    /// # Parameters
    /// - `context`: The construct requiring an integer, for error reporting.
    ///
    /// # Example
    /// ```
    /// use toys::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Int(10).as_int("test").unwrap(), 10);
    /// assert!(Value::Bool(true).as_int("test").is_err());
    /// ```
    pub fn as_int(&self, context: &str) -> EvalResult<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            _ => Err(self.mismatch("integer", context)),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions in `if` and `while`. Integers are not implicitly
    /// truthy.
    pub fn as_bool(&self, context: &str) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.mismatch("boolean", context)),
        }
    }

    fn mismatch(&self, expected: &'static str, context: &str) -> RuntimeError {
        RuntimeError::TypeMismatch { expected,
                                     found: self.type_name(),
                                     context: context.to_string() }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Self::Dictionary(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Unit => write!(f, "()"),
        }
    }
}
