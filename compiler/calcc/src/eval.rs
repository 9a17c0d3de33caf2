//! Entry points that run source text end to end.

use calc_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use calc_diagnostic::{Diagnostic, DiagnosticQueue, SourceFile};
use calc_eval::{stdout_handler, InterpreterBuilder, SharedPrintHandler, Value, DEFAULT_MAX_CALL_DEPTH};
use calc_ir::StringInterner;
use thiserror::Error;

/// Settings for one evaluation run.
#[derive(Clone, Debug)]
pub struct EvalOptions {
    /// `None` disables the limit.
    pub max_call_depth: Option<usize>,
    pub print_handler: SharedPrintHandler,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            print_handler: stdout_handler(),
        }
    }
}

/// `Ok(None)` means the program finished without a value.
pub type EvalOutcome = Result<Option<i64>, EvalFailure>;

/// A run that recorded errors, in either the parse or the evaluation phase.
#[derive(Clone, Debug, Error)]
#[error("{} failed with {} error(s)", .file.display_name(), .diagnostics.len())]
pub struct EvalFailure {
    file: SourceFile,
    diagnostics: Vec<Diagnostic>,
}

impl EvalFailure {
    fn new(file: &SourceFile, diagnostics: Vec<Diagnostic>) -> Self {
        EvalFailure {
            file: file.clone(),
            diagnostics,
        }
    }

    pub fn file(&self) -> &SourceFile {
        &self.file
    }

    /// Sorted by source position.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Emit every diagnostic followed by the summary line.
    pub fn emit(&self, emitter: &mut dyn DiagnosticEmitter) {
        emitter.emit_all(&self.diagnostics);
        emitter.emit_summary(self.diagnostics.len(), 0);
        emitter.flush();
    }

    /// Render without colors, as the terminal would show it.
    pub fn render(&self) -> String {
        let mut emitter =
            TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_source(&self.file);
        self.emit(&mut emitter);
        String::from_utf8_lossy(&emitter.into_inner()).into_owned()
    }
}

/// Evaluate source text that has no file name.
pub fn eval_expr(source: &str) -> EvalOutcome {
    eval_source(&SourceFile::anonymous(source), &EvalOptions::default())
}

/// Evaluate source text read from the file `name`.
pub fn eval_file(name: &str, source: &str) -> EvalOutcome {
    eval_source(&SourceFile::new(name, source), &EvalOptions::default())
}

/// Parse and evaluate `file`.
///
/// Evaluation is skipped when parsing recorded any error.
#[tracing::instrument(level = "debug", skip_all, fields(file = file.display_name()))]
pub fn eval_source(file: &SourceFile, options: &EvalOptions) -> EvalOutcome {
    let interner = StringInterner::new();
    let mut queue = DiagnosticQueue::new();

    let parsed = calc_parse::parse(file, &interner, &mut queue);
    if queue.has_errors() {
        tracing::debug!(errors = queue.error_count(), "skipping evaluation");
        return Err(EvalFailure::new(file, queue.flush()));
    }

    let value = InterpreterBuilder::new(&parsed.arena, &interner, &mut queue)
        .print_handler(options.print_handler.clone())
        .max_call_depth(options.max_call_depth)
        .build()
        .run(parsed.root);
    if queue.has_errors() {
        return Err(EvalFailure::new(file, queue.flush()));
    }

    Ok(match value {
        Value::Int(n) => Some(n),
        Value::Nothing | Value::Unresolved { .. } => None,
    })
}
