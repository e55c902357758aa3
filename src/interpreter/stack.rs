//! Stack growth for deep recursion.
//!
//! The evaluator recurses once per nested expression and several times per
//! interpreted function call, so a recursive program can exhaust the native
//! stack long before it reaches the interpreter's call-depth limit. Wrapping
//! the recursive entry point in [`ensure_sufficient_stack`] grows the stack
//! on the heap whenever it runs low.

/// If less than this much stack remains, a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
