use std::{
    collections::HashMap,
    io::{self, Write},
    rc::Rc,
};

use tracing::debug;

use crate::{
    ast::{Expression, FunctionDefinition, Program, TopLevel},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, FrameId},
        stack::ensure_sufficient_stack,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum number of nested function calls before evaluation is aborted with
/// [`RuntimeError::RecursionLimit`].
pub const MAX_CALL_DEPTH: usize = 10_000;

/// Stores the runtime state of one program run.
///
/// The interpreter owns the frame arena (with its global frame), the table of
/// user-defined functions and the sink that `println` writes to. Independent
/// program runs should use separate interpreters, or call
/// [`reset`](Self::reset) in between.
///
/// ## Usage
///
/// ```
/// use toys::interpreter::{
///     evaluator::core::Interpreter, parser::parse_program, value::core::Value,
/// };
///
/// let program = parse_program(
///     "define fact(n) { if (n < 2) 1; else n * fact(n - 1); }
///      define main() { fact(5); }",
/// ).unwrap();
///
/// let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
/// assert_eq!(interpreter.call_main(&program).unwrap(), Value::Int(120));
/// ```
pub struct Interpreter<W = io::Stdout> {
    pub(crate) environment: Environment,
    /// User-defined functions by name. Filled by `call_main` before `main`
    /// runs and read-only afterwards.
    pub(crate) functions:   HashMap<String, Rc<FunctionDefinition>>,
    pub(crate) output:      W,
}

impl Interpreter<io::Stdout> {
    /// Creates an interpreter whose `println` writes to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter whose `println` writes to `output`.
    pub fn with_output(output: W) -> Self {
        Self { environment: Environment::new(),
               functions: HashMap::new(),
               output }
    }

    /// The sink `println` writes to.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Discards all global bindings and all registered functions.
    ///
    /// Afterwards the interpreter behaves exactly like a freshly created one.
    pub fn reset(&mut self) {
        self.environment.reset();
        self.functions.clear();
    }

    /// Returns the value bound to `name` in the global frame, if any.
    #[must_use]
    pub fn global(&self, name: &str) -> Option<Value> {
        self.environment
            .get(self.environment.global(), name)
            .cloned()
    }

    /// Returns the definition of a registered function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionDefinition> {
        self.functions.get(name).map(Rc::as_ref)
    }

    /// Evaluates one expression in the global frame.
    ///
    /// Assignments made this way persist as globals, so successive calls
    /// share state.
    pub fn interpret(&mut self, expression: &Expression) -> EvalResult<Value> {
        let global = self.environment.global();
        self.eval(expression, global)
    }

    /// Evaluates a sequence of lines in the global frame and returns the
    /// value of the last one, or [`Value::Unit`] if there are none.
    pub fn run_lines(&mut self, lines: &[Expression]) -> EvalResult<Value> {
        let mut last = Value::Unit;
        for line in lines {
            last = self.interpret(line)?;
        }
        Ok(last)
    }

    /// Runs a program.
    ///
    /// Top-level definitions are processed in source order: each global's
    /// initializer is evaluated in the global frame and bound there, and each
    /// function is registered. Then `main` is called with no arguments and
    /// its result is returned.
    ///
    /// # Errors
    /// - [`RuntimeError::DuplicateFunction`] if a name is defined twice.
    /// - [`RuntimeError::MissingMain`] if there is no `main` function.
    /// - Any error raised while evaluating a global initializer or `main`.
    pub fn call_main(&mut self, program: &Program) -> EvalResult<Value> {
        let global = self.environment.global();

        for definition in &program.definitions {
            match definition {
                TopLevel::GlobalVariableDefinition { name, expression } => {
                    let value = self.eval(expression, global)?;
                    self.environment.define(global, name, value);
                },
                TopLevel::FunctionDefinition(def) => self.register_function(def)?,
            }
        }

        let main = self.functions
                       .get("main")
                       .cloned()
                       .ok_or(RuntimeError::MissingMain)?;

        debug!(functions = self.functions.len(), "calling main");
        self.invoke(&main, Vec::new(), global)
    }

    fn register_function(&mut self, def: &Rc<FunctionDefinition>) -> EvalResult<()> {
        if self.functions.contains_key(&def.name) {
            return Err(RuntimeError::DuplicateFunction { name: def.name.clone() });
        }
        debug!(function = %def.name, params = def.params.len(), "registered function");
        self.functions
            .insert(def.name.clone(), Rc::clone(def));
        Ok(())
    }

    /// Evaluates an expression in frame `env` and returns the resulting
    /// value.
    ///
    /// This is the main entry point for expression evaluation and the only
    /// place the evaluator recurses through, so the native stack is grown
    /// here when it runs low.
    pub fn eval(&mut self, expr: &Expression, env: FrameId) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_node(expr, env))
    }

    fn eval_node(&mut self, expr: &Expression, env: FrameId) -> EvalResult<Value> {
        match expr {
            Expression::BinaryExpression { operator, lhs, rhs } => {
                self.eval_binary_expression(*operator, lhs, rhs, env)
            },
            Expression::IntegerLiteral(value) => Ok(Value::Int(*value)),
            Expression::BoolLiteral(value) => Ok(Value::Bool(*value)),
            Expression::ArrayLiteral(items) => {
                let values = items.iter()
                                  .map(|item| self.eval(item, env))
                                  .collect::<EvalResult<Vec<_>>>()?;
                Ok(values.into())
            },
            Expression::Identifier(name) => self.environment.read(env, name),
            Expression::Assignment { name, expression } => {
                let value = self.eval(expression, env)?;
                self.environment.assign(env, name, value.clone());
                Ok(value)
            },
            Expression::Block(elements) => self.eval_block(elements, env),
            Expression::If { condition,
                             then_clause,
                             else_clause, } => {
                self.eval_if(condition, then_clause, else_clause.as_deref(), env)
            },
            Expression::While { condition, body } => self.eval_while(condition, body, env),
            Expression::FunctionCall { name, args } => self.eval_function_call(name, args, env),
            Expression::LabelledCall { name, args } => self.eval_labelled_call(name, args, env),
            Expression::Println(arg) => self.eval_println(arg, env),
        }
    }
}
