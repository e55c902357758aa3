use std::io::Write;

use crate::{
    ast::{Expression, Operator},
    error::RuntimeError,
    interpreter::{
        environment::FrameId,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates both operands, left before right, and applies `operator`.
    pub(crate) fn eval_binary_expression(&mut self,
                                         operator: Operator,
                                         lhs: &Expression,
                                         rhs: &Expression,
                                         env: FrameId)
                                         -> EvalResult<Value> {
        let left = self.eval(lhs, env)?;
        let right = self.eval(rhs, env)?;
        apply_operator(operator, &left, &right)
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// Both operands must be integers. Arithmetic is checked: a result outside
/// the `i64` range is reported as [`RuntimeError::Overflow`] instead of
/// wrapping. Division truncates toward zero and fails with
/// [`RuntimeError::DivisionByZero`] when the divisor is zero. Comparison
/// operators produce booleans.
///
/// # Example
/// ```
/// use toys::{
///     ast::Operator,
///     error::RuntimeError,
///     interpreter::{evaluator::binary::apply_operator, value::core::Value},
/// };
///
/// assert_eq!(apply_operator(Operator::Add, &Value::Int(3), &Value::Int(4)).unwrap(),
///            Value::Int(7));
/// assert_eq!(apply_operator(Operator::LessThan, &Value::Int(3), &Value::Int(4)).unwrap(),
///            Value::Bool(true));
/// assert_eq!(apply_operator(Operator::Divide, &Value::Int(1), &Value::Int(0)),
///            Err(RuntimeError::DivisionByZero));
/// ```
pub fn apply_operator(operator: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
    let (l, r) = match (left, right) {
        (Value::Int(l), Value::Int(r)) => (*l, *r),
        (Value::Int(_), other) | (other, _) => {
            return Err(RuntimeError::TypeMismatch { expected: "integer",
                                                    found:    other.type_name(),
                                                    context:  format!("operator '{operator}'"), });
        },
    };

    let overflow = || RuntimeError::Overflow { operator: operator.symbol() };

    Ok(match operator {
           Operator::Add => Value::Int(l.checked_add(r).ok_or_else(overflow)?),
           Operator::Subtract => Value::Int(l.checked_sub(r).ok_or_else(overflow)?),
           Operator::Multiply => Value::Int(l.checked_mul(r).ok_or_else(overflow)?),
           Operator::Divide => {
               if r == 0 {
                   return Err(RuntimeError::DivisionByZero);
               }
               Value::Int(l.checked_div(r).ok_or_else(overflow)?)
           },
           Operator::LessThan => Value::Bool(l < r),
           Operator::LessOrEqual => Value::Bool(l <= r),
           Operator::GreaterThan => Value::Bool(l > r),
           Operator::GreaterOrEqual => Value::Bool(l >= r),
           Operator::EqualEqual => Value::Bool(l == r),
           Operator::NotEqual => Value::Bool(l != r),
       })
}
