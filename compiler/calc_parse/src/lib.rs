//! Recursive descent parser for calc.
//!
//! Produces a flat AST in an [`ExprArena`], rooted at one `Sequence` node
//! holding the file's top-level expressions.
//!
//! Errors never stop the parse. The innermost error of a broken top-level
//! expression is recorded, the parser skips to the `)` closing each enclosing
//! form, and continues with the next expression.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{Arity, ParseError, ParseResult};

use calc_diagnostic::{DiagnosticQueue, SourceFile};
use calc_ir::{Expr, ExprArena, ExprId, ExprKind, Span, StringInterner};
use calc_lexer::TokenList;

/// A parsed file.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub arena: ExprArena,
    /// Always a `Sequence`.
    pub root: ExprId,
}

impl ParseOutput {
    /// The top-level expressions in source order.
    pub fn top_level(&self) -> &[ExprId] {
        match self.arena.get_expr(self.root).kind {
            ExprKind::Sequence(items) => self.arena.get_expr_list(items),
            _ => &[],
        }
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, source_len: usize) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: ExprArena::with_capacity(source_len),
            errors: Vec::new(),
        }
    }

    /// Parse the whole token stream.
    pub fn parse_file(mut self) -> (ParseOutput, Vec<ParseError>) {
        let root = self.parse_sequence();
        (
            ParseOutput {
                arena: self.arena,
                root,
            },
            self.errors,
        )
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }
}

/// Lex and parse `source`, recording every syntax error into `diagnostics`.
///
/// Always returns a tree. Callers must check `diagnostics.has_errors()`
/// before evaluating it.
#[tracing::instrument(level = "debug", skip_all, fields(file = source.display_name()))]
pub fn parse(
    source: &SourceFile,
    interner: &StringInterner,
    diagnostics: &mut DiagnosticQueue,
) -> ParseOutput {
    let text = source.text();
    let tokens = calc_lexer::lex(text, interner);
    let (output, errors) = Parser::new(&tokens, text.len()).parse_file();

    tracing::debug!(
        tokens = tokens.len(),
        exprs = output.arena.expr_count(),
        errors = errors.len(),
        "parsed"
    );

    for error in &errors {
        diagnostics.add(error.to_diagnostic(text));
    }
    output
}
