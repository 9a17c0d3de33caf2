//! Evaluator for calc.
//!
//! Walks an [`ExprArena`](calc_ir::ExprArena) produced by `calc_parse` and
//! produces integer results. Side effects are limited to `print` output
//! (through a [`SharedPrintHandler`]) and to the scoped [`Environment`].

mod diagnostics;
mod environment;
mod errors;
mod interpreter;
pub mod operators;
mod print_handler;
mod value;

pub use diagnostics::{CallFrame, CallStack, DEFAULT_MAX_CALL_DEPTH};
pub use environment::{Binding, Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use value::Value;
