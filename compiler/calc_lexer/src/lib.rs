//! Lexer for calc using logos with identifier interning.
//!
//! Produces a [`TokenList`] for the parser. Comments and whitespace are
//! dropped here; characters that start no token and integer literals that
//! overflow `i64` become error tokens, which the parser reports.

mod raw_token;
mod token;

use calc_ir::{Span, StringInterner};
use logos::Logos;

use raw_token::{RawError, RawToken};

pub use token::{Token, TokenKind, TokenList};

/// Lex source code into a `TokenList`.
///
/// Sources larger than `u32::MAX` bytes are not supported; offsets past that
/// point saturate.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::try_from_range(logos.span()).unwrap_or(Span::point(u32::MAX));
        let slice = logos.slice();

        let kind = match token_result {
            Ok(RawToken::LineComment) => continue,
            Ok(raw) => convert_token(raw, slice, interner),
            Err(RawError::Unrecognized) => TokenKind::Error,
            Err(RawError::IntOverflow) => TokenKind::IntOverflow,
        };
        result.push(Token::new(kind, span));
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    result
}

fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,

        RawToken::Define => TokenKind::Define,
        RawToken::Set => TokenKind::Set,
        RawToken::If => TokenKind::If,
        RawToken::Print => TokenKind::Print,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,

        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Eq => TokenKind::Eq,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,

        // Filtered out by `lex`.
        RawToken::LineComment => TokenKind::Error,
    }
}
