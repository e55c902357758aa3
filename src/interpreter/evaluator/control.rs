use std::io::Write;

use crate::{
    ast::Expression,
    interpreter::{
        environment::FrameId,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates the elements of a block in order.
    ///
    /// Returns the value of the last element, or [`Value::Unit`] for an empty
    /// block. A block opens no scope of its own: assignments inside it land
    /// in the current frame.
    pub(crate) fn eval_block(&mut self, elements: &[Expression], env: FrameId) -> EvalResult<Value> {
        let mut last = Value::Unit;
        for element in elements {
            last = self.eval(element, env)?;
        }
        Ok(last)
    }

    /// Evaluates an `if` expression.
    ///
    /// The condition must be a boolean. When it is false and there is no
    /// `else` branch, the result is [`Value::Unit`], the same value an empty
    /// block produces.
    pub(crate) fn eval_if(&mut self,
                          condition: &Expression,
                          then_clause: &Expression,
                          else_clause: Option<&Expression>,
                          env: FrameId)
                          -> EvalResult<Value> {
        if self.eval(condition, env)?.as_bool("if condition")? {
            return self.eval(then_clause, env);
        }
        match else_clause {
            Some(else_clause) => self.eval(else_clause, env),
            None => Ok(Value::Unit),
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration and must be a
    /// boolean. The loop always yields `true`, whether or not the body ran.
    pub(crate) fn eval_while(&mut self,
                             condition: &Expression,
                             body: &Expression,
                             env: FrameId)
                             -> EvalResult<Value> {
        while self.eval(condition, env)?.as_bool("while condition")? {
            self.eval(body, env)?;
        }
        Ok(Value::Bool(true))
    }
}
