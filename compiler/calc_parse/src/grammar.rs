//! Grammar rules.
//!
//! ```text
//! expr := INT | IDENT | "(" form ")"
//! form := cmp-op expr expr
//!       | math-op expr+
//!       | "if" expr expr expr?
//!       | "print" expr*
//!       | "define" IDENT "(" IDENT* ")" expr*
//!       | "set" IDENT expr
//!       | IDENT expr*
//! ```

use calc_ir::{CompareOp, ExprId, ExprKind, MathOp, Name, Span};
use calc_lexer::TokenKind;
use calc_stack::ensure_sufficient_stack;

use crate::error::{Arity, ParseError, ParseResult};
use crate::Parser;

fn compare_op(kind: TokenKind) -> Option<CompareOp> {
    Some(match kind {
        TokenKind::Lt => CompareOp::Lt,
        TokenKind::LtEq => CompareOp::LtEq,
        TokenKind::NotEq => CompareOp::NotEq,
        TokenKind::Gt => CompareOp::Gt,
        TokenKind::GtEq => CompareOp::GtEq,
        TokenKind::Eq => CompareOp::Eq,
        _ => return None,
    })
}

fn math_op(kind: TokenKind) -> Option<MathOp> {
    Some(match kind {
        TokenKind::Plus => MathOp::Add,
        TokenKind::Minus => MathOp::Sub,
        TokenKind::Star => MathOp::Mul,
        TokenKind::Slash => MathOp::Div,
        TokenKind::Percent => MathOp::Rem,
        TokenKind::And => MathOp::And,
        TokenKind::Or => MathOp::Or,
        _ => return None,
    })
}

impl Parser<'_> {
    /// `expr*` up to `Eof`, wrapped in a `Sequence` spanning the file.
    pub(crate) fn parse_sequence(&mut self) -> ExprId {
        let mut items = Vec::new();
        while !self.cursor.is_at_end() {
            let start = self.cursor.position();
            match self.parse_expr() {
                Ok(id) => items.push(id),
                Err(error) => {
                    self.errors.push(error);
                    // A stray `)` or operator is not consumed by parse_expr.
                    if self.cursor.position() == start {
                        self.cursor.advance();
                    }
                }
            }
        }
        let range = self.arena.alloc_expr_list(items);
        let span = Span::new(0, self.cursor.current_span().end);
        self.alloc(ExprKind::Sequence(range), span)
    }

    pub(crate) fn parse_expr(&mut self) -> ParseResult<ExprId> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> ParseResult<ExprId> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Int(value) => {
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Int(value), token.span))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Ident(name), token.span))
            }
            TokenKind::LParen => self.parse_form(),
            TokenKind::Error | TokenKind::IntOverflow => {
                self.cursor.advance();
                Err(ParseError::unexpected(token.span, "expression", token.kind))
            }
            found => Err(ParseError::ExpectedExpression {
                span: token.span,
                found,
            }),
        }
    }

    /// `"(" form ")"`. On error, skips past this form's `)`.
    fn parse_form(&mut self) -> ParseResult<ExprId> {
        let open = self.cursor.advance().span;
        let result = self.parse_form_body(open);
        if result.is_err() {
            self.cursor.skip_past_close();
        }
        result
    }

    fn parse_form_body(&mut self, open: Span) -> ParseResult<ExprId> {
        let head = self.cursor.current();

        if let Some(op) = compare_op(head.kind) {
            self.cursor.advance();
            let operands = self.parse_operands(open)?;
            let [left, right] = operands[..] else {
                return Err(self.arity_error(open, op.as_symbol(), Arity::Exactly(2), operands.len()));
            };
            let span = self.finish(open);
            return Ok(self.alloc(ExprKind::Compare { op, left, right }, span));
        }

        if let Some(op) = math_op(head.kind) {
            self.cursor.advance();
            let operands = self.parse_operands(open)?;
            if operands.is_empty() {
                return Err(self.arity_error(open, op.as_symbol(), Arity::AtLeast(1), 0));
            }
            let operands = self.arena.alloc_expr_list(operands);
            let span = self.finish(open);
            return Ok(self.alloc(ExprKind::Math { op, operands }, span));
        }

        match head.kind {
            TokenKind::If => {
                self.cursor.advance();
                let operands = self.parse_operands(open)?;
                let (test, then_branch, else_branch) = match operands[..] {
                    [test, then_branch] => (test, then_branch, None),
                    [test, then_branch, else_branch] => (test, then_branch, Some(else_branch)),
                    _ => {
                        return Err(self.arity_error(
                            open,
                            "if",
                            Arity::Between(2, 3),
                            operands.len(),
                        ))
                    }
                };
                let span = self.finish(open);
                Ok(self.alloc(
                    ExprKind::If {
                        test,
                        then_branch,
                        else_branch,
                    },
                    span,
                ))
            }
            TokenKind::Print => {
                self.cursor.advance();
                let operands = self.parse_operands(open)?;
                let operands = self.arena.alloc_expr_list(operands);
                let span = self.finish(open);
                Ok(self.alloc(ExprKind::Print(operands), span))
            }
            TokenKind::Define => {
                self.cursor.advance();
                self.parse_define(open)
            }
            TokenKind::Set => {
                self.cursor.advance();
                let name = self.expect_ident(open, "variable name")?;
                let operands = self.parse_operands(open)?;
                let [value] = operands[..] else {
                    return Err(self.arity_error(open, "set", Arity::Exactly(1), operands.len()));
                };
                let span = self.finish(open);
                Ok(self.alloc(ExprKind::Set { name, value }, span))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                let args = self.parse_operands(open)?;
                let args = self.arena.alloc_expr_list(args);
                let span = self.finish(open);
                Ok(self.alloc(ExprKind::Call { name, args }, span))
            }
            _ => Err(self.unexpected_here(open, "operator, keyword or function name")),
        }
    }

    /// `"define" IDENT "(" IDENT* ")" expr*`, with `define` already consumed.
    fn parse_define(&mut self, open: Span) -> ParseResult<ExprId> {
        let name = self.expect_ident(open, "function name")?;

        if !self.cursor.check(TokenKind::LParen) {
            return Err(self.unexpected_here(open, "`(` before the parameter list"));
        }
        let params_open = self.cursor.advance().span;
        let params = match self.parse_params(params_open) {
            Ok(params) => params,
            Err(error) => {
                // Skip the rest of the parameter list; parse_form then skips
                // to the `)` of the define itself.
                self.cursor.skip_past_close();
                return Err(error);
            }
        };
        let params = self.arena.alloc_names(params);

        let body = self.parse_operands(open)?;
        let body = self.arena.alloc_expr_list(body);
        let span = self.finish(open);
        Ok(self.alloc(ExprKind::Define { name, params, body }, span))
    }

    /// `IDENT* ")"`, consuming the `)`.
    fn parse_params(&mut self, open: Span) -> ParseResult<Vec<Name>> {
        let mut params = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::Ident(name) => {
                    self.cursor.advance();
                    params.push(name);
                }
                TokenKind::RParen => {
                    self.cursor.advance();
                    return Ok(params);
                }
                _ => return Err(self.unexpected_here(open, "parameter name or `)`")),
            }
        }
    }

    /// `expr*` up to, not including, the `)` of the form opened at `open`.
    fn parse_operands(&mut self, open: Span) -> ParseResult<Vec<ExprId>> {
        let mut operands = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::RParen => return Ok(operands),
                TokenKind::Eof => {
                    return Err(ParseError::UnclosedDelimiter {
                        open,
                        eof: self.cursor.current_span(),
                    })
                }
                _ => operands.push(self.parse_expr()?),
            }
        }
    }

    /// Consume the closing `)` and return the span of the whole form.
    fn finish(&mut self, open: Span) -> Span {
        let close = self.cursor.advance().span;
        open.merge(close)
    }

    fn expect_ident(&mut self, open: Span, expected: &'static str) -> ParseResult<Name> {
        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            self.cursor.advance();
            Ok(name)
        } else {
            Err(self.unexpected_here(open, expected))
        }
    }

    /// Error for the current token, or an unclosed `open` if the file ended.
    fn unexpected_here(&self, open: Span, expected: &'static str) -> ParseError {
        let token = self.cursor.current();
        if token.kind == TokenKind::Eof {
            ParseError::UnclosedDelimiter {
                open,
                eof: token.span,
            }
        } else {
            ParseError::unexpected(token.span, expected, token.kind)
        }
    }

    /// Reported over the whole form, with the cursor on its `)`.
    fn arity_error(&self, open: Span, form: &'static str, arity: Arity, found: usize) -> ParseError {
        ParseError::WrongOperandCount {
            span: open.merge(self.cursor.current_span()),
            form,
            arity,
            found,
        }
    }
}
