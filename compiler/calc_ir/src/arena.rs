//! Flat storage for a parsed file.
//!
//! - All expressions live in one `Vec`, children are referenced by [`ExprId`]
//! - Expression lists (operands, arguments, bodies) are [`ExprRange`]s into a
//!   shared side table
//! - Parameter lists are [`NameRange`]s into a table of names

use std::fmt;

use crate::{Expr, Name, Span};

/// Index into an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Range of expressions in the arena's flattened list table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ExprRange {
    pub start: u32,
    pub len: u32,
}

impl ExprRange {
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        ExprRange { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl fmt::Debug for ExprRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprRange({}..+{})", self.start, self.len)
    }
}

/// Range of names in the arena's parameter table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct NameRange {
    pub start: u32,
    pub len: u32,
}

impl NameRange {
    pub const EMPTY: NameRange = NameRange { start: 0, len: 0 };

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl fmt::Debug for NameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameRange({}..+{})", self.start, self.len)
    }
}

/// Contiguous storage for every expression of one parsed file.
#[derive(Clone, Default, Debug, Eq, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    names: Vec<Name>,
}

fn table_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX entries"))
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the tables from the source length (~1 node per 4 bytes of
    /// s-expression text).
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 4;
        ExprArena {
            exprs: Vec::with_capacity(estimated),
            expr_lists: Vec::with_capacity(estimated),
            names: Vec::with_capacity(estimated / 8),
        }
    }

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(table_len(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get_expr(id).span
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = table_len(self.expr_lists.len());
        self.expr_lists.extend(exprs);
        let len = table_len(self.expr_lists.len()) - start;
        ExprRange::new(start, len)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    pub fn alloc_names(&mut self, names: impl IntoIterator<Item = Name>) -> NameRange {
        let start = table_len(self.names.len());
        self.names.extend(names);
        let len = table_len(self.names.len()) - start;
        NameRange { start, len }
    }

    #[inline]
    pub fn get_names(&self, range: NameRange) -> &[Name] {
        let start = range.start as usize;
        &self.names[start..start + range.len()]
    }
}

#[cfg(test)]
mod tests;
