use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A stable handle to a frame in an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(usize);

/// One scope: its own bindings plus the handle of the enclosing frame.
#[derive(Debug, Default)]
struct Frame {
    bindings: HashMap<String, Value>,
    parent:   Option<FrameId>,
}

/// The chain of scope frames of one program run.
///
/// Frames live in an arena and refer to their parent by [`FrameId`], so the
/// chain is walked by index and no frame ever borrows another. Frame 0 is
/// the global frame; it has no parent and exists until the environment is
/// dropped or [`reset`](Self::reset). Every other frame belongs to one active
/// function call and is released with [`pop_frame`](Self::pop_frame) when
/// the call returns, so frames are pushed and popped in stack order.
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Frame>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::default()] }
    }

    /// The handle of the global frame.
    #[must_use]
    pub const fn global(&self) -> FrameId {
        FrameId(0)
    }

    /// Number of live frames, the global frame included.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Allocates an empty frame whose parent is `parent`.
    pub fn push_frame(&mut self, parent: FrameId) -> FrameId {
        let id = FrameId(self.frames.len());
        self.frames.push(Frame { bindings: HashMap::new(),
                                 parent:   Some(parent), });
        id
    }

    /// Releases `id`, which must be the most recently pushed frame.
    ///
    /// The global frame is never released.
    pub fn pop_frame(&mut self, id: FrameId) {
        debug_assert_eq!(id.0 + 1, self.frames.len(), "frames must be popped in stack order");
        self.frames.truncate(id.0.max(1));
    }

    /// Discards every binding and every call frame, leaving a fresh, empty
    /// global frame.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.frames.push(Frame::default());
    }

    /// Finds the frame that owns `name`, walking outward from `env`.
    ///
    /// Returns `None` if no frame in the chain binds the name.
    #[must_use]
    pub fn lookup_frame(&self, env: FrameId, name: &str) -> Option<FrameId> {
        let mut current = Some(env);
        while let Some(id) = current {
            let frame = self.frames.get(id.0)?;
            if frame.bindings.contains_key(name) {
                return Some(id);
            }
            current = frame.parent;
        }
        None
    }

    /// Binds `name` in `env`'s own mapping, replacing any previous binding
    /// there. Enclosing frames are not consulted.
    pub fn define(&mut self, env: FrameId, name: &str, value: Value) {
        debug_assert!(env.0 < self.frames.len(), "define into a released frame");
        if let Some(frame) = self.frames.get_mut(env.0) {
            frame.bindings.insert(name.to_string(), value);
        }
    }

    /// Writes `name`.
    ///
    /// If a frame in the chain already owns the name, that binding is
    /// overwritten, even when it lives in an enclosing frame. Otherwise the
    /// name is declared in `env` itself.
    ///
    /// # Example
    /// ```
    /// use toys::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// let global = env.global();
    /// env.define(global, "x", Value::Int(1));
    ///
    /// let local = env.push_frame(global);
    /// env.assign(local, "x", Value::Int(2));
    /// env.assign(local, "y", Value::Int(3));
    /// env.pop_frame(local);
    ///
    /// assert_eq!(env.read(global, "x").unwrap(), Value::Int(2));
    /// assert!(env.read(global, "y").is_err());
    /// ```
    pub fn assign(&mut self, env: FrameId, name: &str, value: Value) {
        let owner = self.lookup_frame(env, name).unwrap_or(env);
        self.define(owner, name, value);
    }

    /// Reads `name`, walking outward from `env`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if no frame in the chain
    /// binds the name.
    pub fn read(&self, env: FrameId, name: &str) -> EvalResult<Value> {
        self.lookup_frame(env, name)
            .and_then(|owner| self.frames.get(owner.0)?.bindings.get(name).cloned())
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Returns the binding of `name` in `env`'s own mapping only.
    #[must_use]
    pub fn get(&self, env: FrameId, name: &str) -> Option<&Value> {
        self.frames.get(env.0)?.bindings.get(name)
    }
}
