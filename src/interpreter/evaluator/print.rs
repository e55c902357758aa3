use std::io::Write;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::FrameId,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Prints a value to the output sink and returns it unchanged.
    ///
    /// The value is formatted using its `Display` implementation followed by
    /// a newline. Every kind of value can be printed.
    ///
    /// # Example
    /// ```
    /// use toys::interpreter::{
    ///     evaluator::core::Interpreter, parser::parse_lines, value::core::Value,
    /// };
    ///
    /// let lines = parse_lines("println([1, 2]);").unwrap();
    /// let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    ///
    /// let result = interpreter.run_lines(&lines).unwrap();
    ///
    /// assert_eq!(result, vec![Value::Int(1), Value::Int(2)].into());
    /// assert_eq!(interpreter.output().as_slice(), b"[1, 2]\n");
    /// ```
    pub(crate) fn eval_println(&mut self, arg: &Expression, env: FrameId) -> EvalResult<Value> {
        let value = self.eval(arg, env)?;
        writeln!(self.output, "{value}").map_err(|e| RuntimeError::Output { message: e.to_string() })?;
        Ok(value)
    }
}
