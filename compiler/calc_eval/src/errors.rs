//! Evaluation errors.
//!
//! Every error halts the run. It propagates with `?` to the top level,
//! where it is recorded once as a [`Diagnostic`].

use calc_diagnostic::{unknown_identifier, Diagnostic, ErrorCode};
use calc_ir::Span;
use thiserror::Error;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalErrorKind {
    #[error("unknown identifier `{name}`")]
    UnknownIdentifier { name: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("remainder by zero")]
    RemainderByZero,
    #[error("`{name}` is not a function")]
    NotCallable { name: String },
    #[error("call depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::UnknownIdentifier { .. } => ErrorCode::E2001,
            EvalErrorKind::DivisionByZero => ErrorCode::E6001,
            EvalErrorKind::RemainderByZero => ErrorCode::E6002,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6003,
            EvalErrorKind::DepthLimitExceeded { .. } => ErrorCode::E6004,
        }
    }
}

/// An evaluation error at a source location.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = self.span;
        match &self.kind {
            EvalErrorKind::UnknownIdentifier { name } => unknown_identifier(span, name),
            kind @ (EvalErrorKind::DivisionByZero | EvalErrorKind::RemainderByZero) => {
                Diagnostic::error(kind.code())
                    .with_message(kind.to_string())
                    .with_label(span, "this divisor evaluates to zero")
            }
            kind @ EvalErrorKind::NotCallable { .. } => Diagnostic::error(kind.code())
                .with_message(kind.to_string())
                .with_label(span, "called here")
                .with_note("only names bound by `define` can be called"),
            kind @ EvalErrorKind::DepthLimitExceeded { .. } => Diagnostic::error(kind.code())
                .with_message(kind.to_string())
                .with_label(span, "limit reached here")
                .with_note("each call and each reference to a `set` binding adds a level")
                .with_suggestion(
                    "check for recursion without a base case or a self-referencing `set`",
                ),
        }
    }
}

pub fn unknown_identifier_error(name: &str, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::UnknownIdentifier {
            name: name.to_string(),
        },
        span,
    )
}

pub fn division_by_zero(span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero, span)
}

pub fn remainder_by_zero(span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::RemainderByZero, span)
}

pub fn not_callable(name: &str, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::NotCallable {
            name: name.to_string(),
        },
        span,
    )
}

pub fn depth_limit_exceeded(limit: usize, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::DepthLimitExceeded { limit }, span)
}
