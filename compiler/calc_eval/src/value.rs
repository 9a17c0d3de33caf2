//! Runtime values.

use std::fmt;

use calc_ir::{Name, Span};

/// Result of evaluating one expression.
///
/// There are no booleans: comparisons and logical operators produce `1` or
/// `0`, and tests read "`>= 1`" (conditionals) or "nonzero" (`and`/`or`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Value {
    Int(i64),
    /// Result of `print`, `define`, `set`, and of `if` with no else branch
    /// taken. Distinct from `0`.
    Nothing,
    /// An identifier with no binding. Carried upward until something
    /// absorbs it or it reaches the top level, where it is reported.
    Unresolved { name: Name, span: Span },
}

impl Value {
    #[inline]
    pub fn as_int(self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    pub fn is_nothing(self) -> bool {
        matches!(self, Value::Nothing)
    }

    #[inline]
    pub fn is_unresolved(self) -> bool {
        matches!(self, Value::Unresolved { .. })
    }

    /// Encode a relation or logical result.
    #[inline]
    pub fn from_bool(b: bool) -> Self {
        Value::Int(i64::from(b))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Nothing => f.write_str("<nil>"),
            Value::Unresolved { .. } => f.write_str("<unresolved>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Nothing.to_string(), "<nil>");
    }

    #[test]
    fn test_nothing_is_not_zero() {
        assert_ne!(Value::Nothing, Value::Int(0));
        assert_eq!(Value::Nothing.as_int(), None);
        assert_eq!(Value::Int(0).as_int(), Some(0));
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Value::from_bool(true), Value::Int(1));
        assert_eq!(Value::from_bool(false), Value::Int(0));
    }
}
