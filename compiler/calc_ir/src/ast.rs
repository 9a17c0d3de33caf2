//! Expression nodes.
//!
//! The variant set is closed: the evaluator matches on [`ExprKind`]
//! exhaustively, so adding a variant is a compile error everywhere it is
//! not handled.

use std::fmt;

use crate::{ExprId, ExprRange, Name, NameRange, Span};

/// Relational operator of a comparison form.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CompareOp {
    Lt,
    LtEq,
    NotEq,
    Gt,
    GtEq,
    Eq,
}

impl CompareOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::NotEq => "<>",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
            CompareOp::Eq => "=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Operator of a variadic arithmetic or logical form.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MathOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
}

impl MathOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            MathOp::Add => "+",
            MathOp::Sub => "-",
            MathOp::Mul => "*",
            MathOp::Div => "/",
            MathOp::Rem => "%",
            MathOp::And => "and",
            MathOp::Or => "or",
        }
    }

    /// `and` / `or` combine truth values rather than numbers.
    pub fn is_logical(self) -> bool {
        matches!(self, MathOp::And | MathOp::Or)
    }
}

impl fmt::Display for MathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// A syntax node with its source span.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression variants.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExprKind {
    /// Integer literal.
    Int(i64),

    /// Identifier reference.
    Ident(Name),

    /// `(op left right)` with a relational operator.
    Compare {
        op: CompareOp,
        left: ExprId,
        right: ExprId,
    },

    /// `(op a b ...)`, at least one operand, folded left to right.
    Math { op: MathOp, operands: ExprRange },

    /// `(if test then else?)`
    If {
        test: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
    },

    /// `(print a b ...)`
    Print(ExprRange),

    /// `(define name (params...) body...)`
    Define {
        name: Name,
        params: NameRange,
        body: ExprRange,
    },

    /// `(set name value)`
    Set { name: Name, value: ExprId },

    /// `(name args...)`: call of a user-defined function.
    Call { name: Name, args: ExprRange },

    /// Top-level expressions of a file, in source order.
    Sequence(ExprRange),
}
