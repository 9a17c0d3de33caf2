//! Diagnostic system for calc.
//!
//! Every phase reports problems the same way:
//! - an [`ErrorCode`] for searchability (`calc explain E2001`)
//! - a message saying what went wrong
//! - a primary [`Label`] saying where
//!
//! Phases only *record* diagnostics into a [`DiagnosticQueue`]. Rendering is
//! done once, at the edge, by an emitter that has the [`SourceFile`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;
mod source;
pub mod span_utils;

pub use diagnostic::{
    expected_expression, invalid_integer, unclosed_delimiter, unexpected_token,
    unknown_identifier, unrecognized_character, wrong_operand_count, Diagnostic, Label, Severity,
};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use source::SourceFile;
