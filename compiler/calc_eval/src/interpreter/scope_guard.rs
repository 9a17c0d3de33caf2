//! Scope guard for user calls.
//!
//! [`ScopedInterpreter`] pushes a scope on creation and, on drop, truncates
//! the environment back to the depth it found. The caller's frame is current
//! again however the callee exits: return, `?`, or unwinding. Scopes pushed
//! inside the guard and never popped are discarded with it.
//!
//! ```text
//! interpreter.with_env_scope(|callee| {
//!     callee.env.define(param, Binding::Value(value));
//!     callee.eval(body)
//! })
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// An interpreter running inside a scope it will discard.
///
/// Derefs to [`Interpreter`], so evaluation goes through the guard.
pub struct ScopedInterpreter<'s, 'a> {
    inner: &'s mut Interpreter<'a>,
    /// Environment depth before the scope was pushed.
    entered_at: usize,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.inner.env.truncate(self.entered_at);
    }
}

impl<'a> Deref for ScopedInterpreter<'_, 'a> {
    type Target = Interpreter<'a>;

    fn deref(&self) -> &Interpreter<'a> {
        self.inner
    }
}

impl<'a> DerefMut for ScopedInterpreter<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Interpreter<'a> {
        self.inner
    }
}

impl<'a> Interpreter<'a> {
    /// Enter a child of the current scope until the guard is dropped.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        let entered_at = self.env.depth();
        self.env.push_scope();
        ScopedInterpreter {
            inner: self,
            entered_at,
        }
    }

    /// Run `f` in a child of the current scope.
    pub fn with_env_scope<T>(&mut self, f: impl FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T) -> T {
        f(&mut self.scoped())
    }
}
