//! Environment for variable scoping in the interpreter.
//!
//! Uses a scope stack (not cloning) for efficient scope management. A call
//! pushes a scope whose parent is the scope active at the call site and pops
//! it on return.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use calc_ir::{ExprId, Name};

use crate::Value;

/// What a name is bound to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Binding {
    /// An unevaluated node: the `define` form itself, or the right-hand side
    /// of a `set`. Evaluated afresh on every reference.
    Deferred(ExprId),
    /// A function parameter, evaluated once at call time.
    Value(Value),
}

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through [`LocalScope::new`]. Not thread-safe;
/// the interpreter runs single-threaded.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing name bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Binding>,
    /// Fixed at creation.
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, replacing any existing binding here.
    #[inline]
    pub fn define(&mut self, name: Name, binding: Binding) {
        self.bindings.insert(name, binding);
    }

    /// Innermost binding of `name`, walking outward through parents.
    ///
    /// Call frames chain to the caller's frame, so the walk is as long as the
    /// call stack is deep. It must stay a loop.
    pub fn lookup(&self, name: Name) -> Option<Binding> {
        if let Some(&binding) = self.bindings.get(&name) {
            return Some(binding);
        }
        let mut next = self.parent.clone();
        while let Some(scope) = next {
            let scope = scope.borrow();
            if let Some(&binding) = scope.bindings.get(&name) {
                return Some(binding);
            }
            next = scope.parent.clone();
        }
        None
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Environment for the interpreter using a scope stack.
pub struct Environment {
    /// Stack of scopes, with current scope at the top.
    scopes: Vec<LocalScope<Scope>>,
    /// Root scope (always at the bottom). Lives for the whole run.
    global: LocalScope<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            scopes: vec![global.clone()],
            global,
        }
    }

    /// Number of scopes on the stack, including the root.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Push a scope whose parent is the current scope.
    #[inline]
    pub fn push_scope(&mut self) {
        let parent = self.current_scope().clone();
        self.scopes.push(LocalScope::new(Scope::with_parent(parent)));
    }

    /// Pop scopes until `depth` remain, never below the root.
    ///
    /// Innermost first: each popped scope's parent is still on the stack, so
    /// freeing it never cascades down the chain.
    pub fn truncate(&mut self, depth: usize) {
        let depth = depth.max(1);
        while self.scopes.len() > depth {
            self.scopes.pop();
        }
    }

    #[inline]
    fn current_scope(&self) -> &LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global)
    }

    /// Bind in the innermost scope.
    #[inline]
    pub fn define(&mut self, name: Name, binding: Binding) {
        self.current_scope().borrow_mut().define(name, binding);
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Binding> {
        self.current_scope().borrow().lookup(name)
    }
}

impl Drop for Environment {
    fn drop(&mut self) {
        self.truncate(1);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
