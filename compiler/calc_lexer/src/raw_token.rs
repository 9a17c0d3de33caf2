//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! identifier interning and final token conversion.

use logos::Logos;

/// Why logos could not produce a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RawError {
    /// No token starts with this character.
    #[default]
    Unrecognized,
    /// Digits matched but the value does not fit in `i64`.
    IntOverflow,
}

fn parse_int(lex: &mut logos::Lexer<'_, RawToken>) -> Result<i64, RawError> {
    lex.slice().parse().map_err(|_| RawError::IntOverflow)
}

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r";[^\n]*")]
    LineComment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[token("define")]
    Define,
    #[token("set")]
    Set,
    #[token("if")]
    If,
    #[token("print")]
    Print,
    #[token("and")]
    And,
    #[token("or")]
    Or,

    #[token("<=")]
    LtEq,
    #[token("<>")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // A leading `-` binds to the digits: `-5` is one literal, `- 5` is two tokens.
    #[regex(r"-?[0-9]+", parse_int)]
    Int(i64),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
