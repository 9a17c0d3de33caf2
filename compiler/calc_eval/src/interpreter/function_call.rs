//! User function call evaluation.

use calc_ir::{ExprKind, ExprRange, Name, Span};

use super::Interpreter;
use crate::diagnostics::CallFrame;
use crate::errors::not_callable;
use crate::{Binding, EvalResult, Value};

impl Interpreter<'_> {
    /// Call the function bound to `name`.
    ///
    /// The callee runs in a new scope whose parent is the caller's current
    /// scope. Parameters are bound one at a time, each argument evaluated in
    /// the new scope, so later arguments see earlier parameters. Extra
    /// arguments are never evaluated. The first body result that is not
    /// `Nothing` is returned.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = self.interner.lookup(name), depth = self.call_stack.depth())
    )]
    pub(super) fn eval_call(&mut self, name: Name, args: ExprRange, span: Span) -> EvalResult {
        let arena = self.arena;
        let definition = match self.env.lookup(name) {
            Some(Binding::Deferred(node)) => arena.get_expr(node).kind,
            _ => return Err(not_callable(self.interner.lookup(name), span)),
        };
        let ExprKind::Define { params, body, .. } = definition else {
            return Err(not_callable(self.interner.lookup(name), span));
        };

        self.call_stack.push(CallFrame {
            name,
            call_span: span,
        })?;

        let result = self.with_env_scope(|scoped| {
            let params = arena.get_names(params);
            for (&param, &arg) in params.iter().zip(arena.get_expr_list(args)) {
                let value = scoped.eval(arg)?;
                scoped.env.define(param, Binding::Value(value));
            }

            for &expr in arena.get_expr_list(body) {
                let value = scoped.eval(expr)?;
                if !value.is_nothing() {
                    return Ok(value);
                }
            }
            Ok(Value::Nothing)
        });

        self.call_stack.pop();
        result
    }
}
