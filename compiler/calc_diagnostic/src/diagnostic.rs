//! Core diagnostic types.

use std::fmt;

use calc_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A span of source with an explanatory message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// The primary label marks where the error is; secondary labels add context.
    pub is_primary: bool,
}

/// A positioned, coded problem report.
///
/// Built with a small builder API:
///
/// ```text
/// Diagnostic::error(ErrorCode::E2001)
///     .with_message("unknown identifier `x`")
///     .with_label(span, "not found in this scope")
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add the primary label.
    #[must_use]
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
            is_primary: true,
        });
        self
    }

    #[must_use]
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
            is_primary: false,
        });
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Span of the first primary label, falling back to the first label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|l| l.is_primary)
            .or_else(|| self.labels.first())
            .map(|l| l.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { ":::" };
            write!(f, "\n  {marker} {}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }
        Ok(())
    }
}

// Constructors for the diagnostics produced by more than one crate.

/// A source character that starts no token.
pub fn unrecognized_character(span: Span, text: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message(format!("unrecognized character `{text}`"))
        .with_label(span, "not valid here")
}

/// An integer literal that does not fit in `i64`.
pub fn invalid_integer(span: Span, text: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .with_message(format!("integer literal `{text}` is out of range"))
        .with_label(span, "does not fit in a 64-bit signed integer")
}

pub fn unexpected_token(span: Span, expected: &str, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("expected {expected}, found {found}"))
        .with_label(span, format!("expected {expected}"))
}

pub fn expected_expression(span: Span, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message(format!("expected expression, found {found}"))
        .with_label(span, "expected expression")
}

/// `open` is the unmatched `(`, `end` where the file ran out.
pub fn unclosed_delimiter(open: Span, end: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1003)
        .with_message("unclosed delimiter `(`")
        .with_label(open, "unclosed delimiter")
        .with_secondary_label(end, "file ends here")
}

pub fn wrong_operand_count(span: Span, form: &str, expected: &str, found: usize) -> Diagnostic {
    let (word, verb) = if found == 1 {
        ("operand", "was")
    } else {
        ("operands", "were")
    };
    Diagnostic::error(ErrorCode::E1004)
        .with_message(format!(
            "`{form}` takes {expected}, but {found} {word} {verb} supplied"
        ))
        .with_label(span, format!("expected {expected}"))
}

pub fn unknown_identifier(span: Span, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(format!("unknown identifier `{name}`"))
        .with_label(span, "not found in this scope")
}
