use std::{collections::HashMap, io::Write, rc::Rc};

use tracing::trace;

use crate::{
    ast::{Expression, FunctionDefinition, LabelledArgument},
    error::RuntimeError,
    interpreter::{
        environment::FrameId,
        evaluator::core::{EvalResult, Interpreter, MAX_CALL_DEPTH},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    fn lookup_function(&self, name: &str) -> EvalResult<Rc<FunctionDefinition>> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string() })
    }

    /// Evaluates a positional call.
    ///
    /// The argument count must equal the parameter count. Arguments are
    /// evaluated left to right in the caller's frame before any binding
    /// happens.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     args: &[Expression],
                                     env: FrameId)
                                     -> EvalResult<Value> {
        let function = self.lookup_function(name)?;

        if args.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                     expected: function.params.len(),
                                                     found:    args.len(), });
        }

        let values = args.iter()
                         .map(|arg| self.eval(arg, env))
                         .collect::<EvalResult<Vec<_>>>()?;

        self.invoke(&function, values, env)
    }

    /// Evaluates a labelled call such as `power[n = 5]`.
    ///
    /// The labels must name every parameter exactly once and nothing else.
    /// Argument expressions are evaluated in the caller's frame, in parameter
    /// order rather than source order.
    pub(crate) fn eval_labelled_call(&mut self,
                                     name: &str,
                                     args: &[LabelledArgument],
                                     env: FrameId)
                                     -> EvalResult<Value> {
        let function = self.lookup_function(name)?;
        let mismatch = |details: String| RuntimeError::LabelMismatch { name: name.to_string(),
                                                                       details };

        let mut by_label: HashMap<&str, &Expression> = HashMap::with_capacity(args.len());
        for arg in args {
            if !function.params.contains(&arg.label) {
                return Err(mismatch(format!("unknown label '{}'", arg.label)));
            }
            if by_label.insert(&arg.label, &arg.expression).is_some() {
                return Err(mismatch(format!("label '{}' given more than once", arg.label)));
            }
        }

        let ordered = function.params
                              .iter()
                              .map(|param| {
                                  by_label.get(param.as_str())
                                          .copied()
                                          .ok_or_else(|| mismatch(format!("missing label '{param}'")))
                              })
                              .collect::<EvalResult<Vec<_>>>()?;

        let values = ordered.into_iter()
                            .map(|arg| self.eval(arg, env))
                            .collect::<EvalResult<Vec<_>>>()?;

        self.invoke(&function, values, env)
    }

    /// Runs `function` with already evaluated arguments.
    ///
    /// A new frame whose parent is `caller` is pushed, the parameters are
    /// bound in it by position, and the body is evaluated there. The frame
    /// is popped again whether the body succeeds or fails.
    ///
    /// # Errors
    /// - [`RuntimeError::ArityMismatch`] if `values` does not match the
    ///   parameter list.
    /// - [`RuntimeError::RecursionLimit`] if [`MAX_CALL_DEPTH`] calls are
    ///   already active.
    pub(crate) fn invoke(&mut self,
                         function: &FunctionDefinition,
                         values: Vec<Value>,
                         caller: FrameId)
                         -> EvalResult<Value> {
        if values.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name:     function.name.clone(),
                                                     expected: function.params.len(),
                                                     found:    values.len(), });
        }

        let depth = self.environment.depth().saturating_sub(1);
        if depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { depth: MAX_CALL_DEPTH });
        }
        trace!(function = %function.name, depth, "call");

        let frame = self.environment.push_frame(caller);
        for (param, value) in function.params.iter().zip(values) {
            self.environment.define(frame, param, value);
        }

        let result = self.eval(&function.body, frame);
        self.environment.pop_frame(frame);
        result
    }
}
