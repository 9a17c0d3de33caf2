//! Calc IR - syntax tree types shared by every phase.
//!
//! - Spans for source locations
//! - Names for interned identifiers
//! - The flat expression arena produced by the parser
//!
//! # Design
//!
//! - **Intern identifiers**: `&str` → `Name(u32)`
//! - **Flatten the tree**: children are `ExprId(u32)` indices into an
//!   [`ExprArena`], lists are ranges into side tables. Bindings in the
//!   evaluator store these ids, so an unevaluated node is just a `Copy` index.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod ast;
mod interner;
mod name;
mod span;

pub use arena::{ExprArena, ExprId, ExprRange, NameRange};
pub use ast::{CompareOp, Expr, ExprKind, MathOp};
pub use interner::StringInterner;
pub use name::Name;
pub use span::{Span, SpanError};
