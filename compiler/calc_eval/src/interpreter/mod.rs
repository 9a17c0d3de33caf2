//! Tree-walking interpreter for calc.
//!
//! [`Interpreter::eval`] dispatches on the node's [`ExprKind`]. Names are
//! resolved when referenced, not when bound: `set` and `define` store the
//! node itself, and every reference evaluates it again in the current
//! environment.
//!
//! Absorption rules for values that are not integers:
//! - comparisons and folds treat them as a failed operation and yield `0`
//! - conditionals take the else branch
//! - `print` and sequences propagate an unresolved identifier; at the top
//!   level it becomes an unknown-identifier error

mod builder;
mod function_call;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use calc_diagnostic::DiagnosticQueue;
use calc_ir::{CompareOp, ExprArena, ExprId, ExprKind, ExprRange, MathOp, Name, Span, StringInterner};
use calc_stack::ensure_sufficient_stack;

use crate::diagnostics::{CallFrame, CallStack};
use crate::errors::{division_by_zero, remainder_by_zero, unknown_identifier_error};
use crate::operators::{compare, fold_step, FoldError};
use crate::print_handler::SharedPrintHandler;
use crate::{Binding, Environment, EvalError, EvalResult, Value};

/// Tree-walking interpreter over one parsed file.
pub struct Interpreter<'a> {
    pub(crate) arena: &'a ExprArena,
    pub(crate) interner: &'a StringInterner,
    /// Where [`Interpreter::run`] records the error that halted the run.
    diagnostics: &'a mut DiagnosticQueue,
    pub env: Environment,
    pub(crate) call_stack: CallStack,
    print_handler: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    /// Evaluate `root` and record the error that halts it, if any.
    ///
    /// Returns `Value::Nothing` when the run fails. An unresolved identifier
    /// escaping the root counts as a failure.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, root: ExprId) -> Value {
        let result = self.eval(root).and_then(|value| self.resolved(value));
        match result {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(code = %error.code(), %error, "evaluation halted");
                self.diagnostics.add(error.to_diagnostic());
                Value::Nothing
            }
        }
    }

    /// Evaluate an expression.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.arena.get_expr(id);
        tracing::trace!(?id, kind = ?expr.kind, "eval");
        match expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Ident(name) => self.eval_ident(name, expr.span),
            ExprKind::Compare { op, left, right } => self.eval_compare(op, left, right),
            ExprKind::Math { op, operands } => self.eval_math(op, operands),
            ExprKind::If {
                test,
                then_branch,
                else_branch,
            } => self.eval_if(test, then_branch, else_branch),
            ExprKind::Print(operands) => self.eval_print(operands),
            ExprKind::Define { name, .. } => {
                self.env.define(name, Binding::Deferred(id));
                Ok(Value::Nothing)
            }
            ExprKind::Set { name, value } => {
                self.env.define(name, Binding::Deferred(value));
                Ok(Value::Nothing)
            }
            ExprKind::Call { name, args } => self.eval_call(name, args, expr.span),
            ExprKind::Sequence(items) => self.eval_sequence(items),
        }
    }

    /// Turn an unresolved identifier into an error; pass anything else through.
    fn resolved(&self, value: Value) -> EvalResult {
        match value {
            Value::Unresolved { name, span } => {
                Err(unknown_identifier_error(self.interner.lookup(name), span))
            }
            value => Ok(value),
        }
    }

    /// Children in order in the current scope; the last result wins.
    fn eval_sequence(&mut self, items: ExprRange) -> EvalResult {
        let arena = self.arena;
        let mut last = Value::Nothing;
        for &item in arena.get_expr_list(items) {
            let value = self.eval(item)?;
            last = self.resolved(value)?;
        }
        Ok(last)
    }

    fn eval_ident(&mut self, name: Name, span: Span) -> EvalResult {
        match self.env.lookup(name) {
            Some(Binding::Value(value)) => Ok(value),
            Some(Binding::Deferred(node)) => {
                self.call_stack.push(CallFrame {
                    name,
                    call_span: span,
                })?;
                let result = self.eval(node);
                self.call_stack.pop();
                result
            }
            None => Ok(Value::Unresolved { name, span }),
        }
    }

    /// Both sides are always evaluated.
    fn eval_compare(&mut self, op: CompareOp, left: ExprId, right: ExprId) -> EvalResult {
        let a = self.eval(left)?.as_int();
        let b = self.eval(right)?.as_int();
        Ok(match (a, b) {
            (Some(a), Some(b)) => Value::Int(compare(op, a, b)),
            _ => Value::Int(0),
        })
    }

    /// Left fold. A non-integer operand stops the fold with `0`; later
    /// operands are not evaluated.
    fn eval_math(&mut self, op: MathOp, operands: ExprRange) -> EvalResult {
        let arena = self.arena;
        let Some((&first, rest)) = arena.get_expr_list(operands).split_first() else {
            return Ok(Value::Int(0));
        };
        let Some(mut acc) = self.eval(first)?.as_int() else {
            return Ok(Value::Int(0));
        };
        for &operand in rest {
            let Some(b) = self.eval(operand)?.as_int() else {
                return Ok(Value::Int(0));
            };
            acc = fold_step(op, acc, b).map_err(|e| fold_error(e, arena.span(operand)))?;
        }
        Ok(Value::Int(acc))
    }

    /// Only a test of `1` or more selects the then branch.
    fn eval_if(&mut self, test: ExprId, then_branch: ExprId, else_branch: Option<ExprId>) -> EvalResult {
        let test = self.eval(test)?.as_int();
        if test.is_some_and(|t| t >= 1) {
            self.eval(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch)
        } else {
            Ok(Value::Nothing)
        }
    }

    /// All operands are evaluated before anything is written. If one is
    /// unresolved, nothing is written and the first unresolved value is
    /// returned.
    fn eval_print(&mut self, operands: ExprRange) -> EvalResult {
        let arena = self.arena;
        let mut values = Vec::with_capacity(operands.len());
        for &operand in arena.get_expr_list(operands) {
            values.push(self.eval(operand)?);
        }
        if let Some(&unresolved) = values.iter().find(|v| v.is_unresolved()) {
            return Ok(unresolved);
        }
        self.print_handler.print_values(&values);
        Ok(Value::Nothing)
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }
}

fn fold_error(error: FoldError, span: Span) -> EvalError {
    match error {
        FoldError::DivisionByZero => division_by_zero(span),
        FoldError::RemainderByZero => remainder_by_zero(span),
    }
}
