//! Tokens handed to the parser.

use std::fmt;

use calc_ir::{Name, Span};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,

    Int(i64),
    Ident(Name),

    // Keywords
    Define,
    Set,
    If,
    Print,
    And,
    Or,

    // Comparison operators
    Lt,
    LtEq,
    NotEq,
    Gt,
    GtEq,
    Eq,

    // Arithmetic operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    /// Character that starts no token.
    Error,
    /// Integer literal outside the `i64` range.
    IntOverflow,

    Eof,
}

impl TokenKind {
    /// How the token is named in "expected X, found Y" messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Int(_) | TokenKind::IntOverflow => "integer",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Define => "`define`",
            TokenKind::Set => "`set`",
            TokenKind::If => "`if`",
            TokenKind::Print => "`print`",
            TokenKind::And => "`and`",
            TokenKind::Or => "`or`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::NotEq => "`<>`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Eq => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Error => "unrecognized character",
            TokenKind::Eof => "end of file",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::IntOverflow)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output: every token in order, always ending in [`TokenKind::Eof`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, or the trailing `Eof` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Token {
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::DUMMY))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}
