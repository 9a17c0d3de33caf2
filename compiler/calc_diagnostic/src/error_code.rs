//! Error codes for every calc diagnostic.
//!
//! The first digit is the phase:
//! - E0xxx: lexer
//! - E1xxx: parser
//! - E2xxx: name resolution at run time
//! - E6xxx: runtime faults

use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Character that starts no token
    E0001,
    /// Integer literal out of range
    E0002,

    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Wrong number of operands for a built-in form
    E1004,

    /// Unknown identifier
    E2001,

    /// Division by zero
    E6001,
    /// Remainder by zero
    E6002,
    /// Called name is not a function
    E6003,
    /// Call depth limit exceeded
    E6004,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
        }
    }

    /// Lexer or parser error: the program never runs.
    pub fn is_syntax_error(self) -> bool {
        matches!(
            self,
            ErrorCode::E0001
                | ErrorCode::E0002
                | ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
        )
    }

    pub fn is_runtime_error(self) -> bool {
        !self.is_syntax_error()
    }

    /// Long-form explanation shown by `calc explain <code>`.
    pub fn explanation(self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A character in the source does not start any token.\n\
                 Valid tokens are parentheses, integers, identifiers, the operators\n\
                 `+ - * / % < <= <> > >= =` and comments starting with `;`."
            }
            ErrorCode::E0002 => {
                "An integer literal does not fit in a signed 64-bit integer.\n\
                 The valid range is -9223372036854775808 to 9223372036854775807."
            }
            ErrorCode::E1001 => {
                "The parser found a token it did not expect at this position,\n\
                 for example a closing `)` with no matching `(`, or a number where\n\
                 a function name was required."
            }
            ErrorCode::E1002 => {
                "An expression was required here: an integer, an identifier or a\n\
                 parenthesized form such as `(+ 1 2)`."
            }
            ErrorCode::E1003 => {
                "A `(` was opened but the file ended before the matching `)`."
            }
            ErrorCode::E1004 => {
                "A built-in form received the wrong number of operands.\n\
                 Comparisons take exactly two, arithmetic and logical forms at\n\
                 least one, `if` two or three, and `set` a name and one value."
            }
            ErrorCode::E2001 => {
                "An identifier was evaluated but no binding for it exists in the\n\
                 current scope or any enclosing scope. Bindings are looked up when\n\
                 the identifier is evaluated, so `(set x y)` is fine as long as\n\
                 `y` is defined before `x` is used. Evaluation stops at the first\n\
                 unknown identifier."
            }
            ErrorCode::E6001 => "The divisor of a `/` form evaluated to zero.",
            ErrorCode::E6002 => "The divisor of a `%` form evaluated to zero.",
            ErrorCode::E6003 => {
                "A call `(name args...)` names something that is not bound to a\n\
                 `define`d function: it is unbound, or bound with `set`."
            }
            ErrorCode::E6004 => {
                "Evaluation nested deeper than the call depth limit. This usually\n\
                 means a function recurses without reaching a base case, or a\n\
                 binding refers to itself, as in `(set x x)`. The limit can be\n\
                 changed with `--max-depth=<n>`."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error from parsing an unknown error code string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    /// Accepts `E2001` and `e2001`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}
