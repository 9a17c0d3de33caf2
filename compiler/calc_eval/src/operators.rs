//! Comparison and fold operators on integers.
//!
//! Operands that are not integers never reach these functions; the
//! interpreter absorbs them as `0` before calling in.

use calc_ir::{CompareOp, MathOp};

/// Why a fold step could not produce a value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FoldError {
    DivisionByZero,
    RemainderByZero,
}

/// Apply a relational operator, encoding the result as `1` or `0`.
#[inline]
pub fn compare(op: CompareOp, a: i64, b: i64) -> i64 {
    let holds = match op {
        CompareOp::Lt => a < b,
        CompareOp::LtEq => a <= b,
        CompareOp::NotEq => a != b,
        CompareOp::Gt => a > b,
        CompareOp::GtEq => a >= b,
        CompareOp::Eq => a == b,
    };
    i64::from(holds)
}

/// Combine the accumulator with the next operand.
///
/// Arithmetic wraps on overflow. Division and remainder truncate toward zero;
/// `i64::MIN / -1` wraps to `i64::MIN`.
#[inline]
pub fn fold_step(op: MathOp, acc: i64, b: i64) -> Result<i64, FoldError> {
    Ok(match op {
        MathOp::Add => acc.wrapping_add(b),
        MathOp::Sub => acc.wrapping_sub(b),
        MathOp::Mul => acc.wrapping_mul(b),
        MathOp::Div => {
            if b == 0 {
                return Err(FoldError::DivisionByZero);
            }
            acc.wrapping_div(b)
        }
        MathOp::Rem => {
            if b == 0 {
                return Err(FoldError::RemainderByZero);
            }
            acc.wrapping_rem(b)
        }
        MathOp::And => i64::from(acc != 0 && b != 0),
        MathOp::Or => i64::from(acc != 0 || b != 0),
    })
}
