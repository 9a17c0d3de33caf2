//! Stack growth for the recursive parser and evaluator.
//!
//! Both phases recurse once per nesting level of the source (and the
//! evaluator once per user call or deferred binding), so a deeply nested or
//! deeply recursive program would otherwise overflow the native stack long
//! before the interpreter's call-depth limit is reached.
//!
//! - **Red zone**: 128KB. Below this much remaining stack, grow.
//! - **Growth size**: 2MB per new segment.

const RED_ZONE: usize = 128 * 1024;

const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// Wrap every recursive entry point:
///
/// ```text
/// fn eval(&mut self, id: ExprId) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(id))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
