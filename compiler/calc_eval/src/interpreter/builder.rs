//! Configures an [`Interpreter`] before a run.

use calc_diagnostic::DiagnosticQueue;
use calc_ir::{ExprArena, StringInterner};

use super::Interpreter;
use crate::diagnostics::{CallStack, DEFAULT_MAX_CALL_DEPTH};
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// ```text
/// let mut interpreter = InterpreterBuilder::new(&arena, &interner, &mut queue)
///     .print_handler(buffer_handler())
///     .max_call_depth(Some(500))
///     .build();
/// ```
pub struct InterpreterBuilder<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    diagnostics: &'a mut DiagnosticQueue,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(
        arena: &'a ExprArena,
        interner: &'a StringInterner,
        diagnostics: &'a mut DiagnosticQueue,
    ) -> Self {
        Self {
            arena,
            interner,
            diagnostics,
            print_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit on nested calls and forced bindings. `None` is unlimited.
    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            arena: self.arena,
            interner: self.interner,
            diagnostics: self.diagnostics,
            env: Environment::new(),
            call_stack: CallStack::new(self.max_call_depth),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
