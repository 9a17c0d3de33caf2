//! Parse error types.
//!
//! Grammar functions return [`ParseError`]; the parser turns the innermost
//! one into a [`Diagnostic`] once, then recovers.

use calc_diagnostic::{
    expected_expression, invalid_integer, unclosed_delimiter, unexpected_token,
    unrecognized_character, wrong_operand_count, Diagnostic,
};
use calc_ir::Span;
use calc_lexer::TokenKind;

/// How many operands a built-in form accepts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Between(lo, hi) => (lo..=hi).contains(&count),
        }
    }

    /// "exactly 2 operands", "at least 1 operand", "2 or 3 operands".
    pub fn describe(self) -> String {
        fn noun(n: usize) -> &'static str {
            if n == 1 {
                "operand"
            } else {
                "operands"
            }
        }
        match self {
            Arity::Exactly(n) => format!("exactly {n} {}", noun(n)),
            Arity::AtLeast(n) => format!("at least {n} {}", noun(n)),
            Arity::Between(lo, hi) if hi == lo + 1 => format!("{lo} or {hi} operands"),
            Arity::Between(lo, hi) => format!("{lo} to {hi} operands"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    UnexpectedToken {
        span: Span,
        expected: &'static str,
        found: TokenKind,
    },
    ExpectedExpression {
        span: Span,
        found: TokenKind,
    },
    UnclosedDelimiter {
        open: Span,
        eof: Span,
    },
    WrongOperandCount {
        span: Span,
        form: &'static str,
        arity: Arity,
        found: usize,
    },
    UnrecognizedCharacter {
        span: Span,
    },
    IntegerOverflow {
        span: Span,
    },
}

impl ParseError {
    /// Error for a token that cannot start or continue the current form.
    ///
    /// Lexer error tokens are reported as what they are rather than as an
    /// unexpected token.
    pub fn unexpected(span: Span, expected: &'static str, found: TokenKind) -> Self {
        match found {
            TokenKind::Error => ParseError::UnrecognizedCharacter { span },
            TokenKind::IntOverflow => ParseError::IntegerOverflow { span },
            _ => ParseError::UnexpectedToken {
                span,
                expected,
                found,
            },
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpectedExpression { span, .. }
            | ParseError::WrongOperandCount { span, .. }
            | ParseError::UnrecognizedCharacter { span }
            | ParseError::IntegerOverflow { span } => *span,
            ParseError::UnclosedDelimiter { open, .. } => *open,
        }
    }

    /// `source` supplies the offending text for lexer errors.
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let text = |span: Span| source.get(span.to_range()).unwrap_or("");
        match *self {
            ParseError::UnexpectedToken {
                span,
                expected,
                found,
            } => unexpected_token(span, expected, found.display_name()),
            ParseError::ExpectedExpression { span, found } => {
                expected_expression(span, found.display_name())
            }
            ParseError::UnclosedDelimiter { open, eof } => unclosed_delimiter(open, eof),
            ParseError::WrongOperandCount {
                span,
                form,
                arity,
                found,
            } => wrong_operand_count(span, form, &arity.describe(), found),
            ParseError::UnrecognizedCharacter { span } => unrecognized_character(span, text(span)),
            ParseError::IntegerOverflow { span } => invalid_integer(span, text(span)),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
