use super::*;
use crate::{ExprKind, MathOp};
use pretty_assertions::assert_eq;

#[test]
fn test_alloc_and_get_expr() {
    let mut arena = ExprArena::new();
    let id = arena.alloc_expr(Expr::new(ExprKind::Int(42), Span::new(0, 2)));
    assert_eq!(arena.get_expr(id).kind, ExprKind::Int(42));
    assert_eq!(arena.span(id), Span::new(0, 2));
    assert_eq!(arena.expr_count(), 1);
}

#[test]
fn test_expr_lists_do_not_overlap() {
    let mut arena = ExprArena::new();
    let a = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::DUMMY));
    let b = arena.alloc_expr(Expr::new(ExprKind::Int(2), Span::DUMMY));
    let c = arena.alloc_expr(Expr::new(ExprKind::Int(3), Span::DUMMY));

    let first = arena.alloc_expr_list([a, b]);
    let second = arena.alloc_expr_list([c]);

    assert_eq!(arena.get_expr_list(first), &[a, b]);
    assert_eq!(arena.get_expr_list(second), &[c]);

    let sum = arena.alloc_expr(Expr::new(
        ExprKind::Math {
            op: MathOp::Add,
            operands: first,
        },
        Span::DUMMY,
    ));
    assert!(matches!(
        arena.get_expr(sum).kind,
        ExprKind::Math { op: MathOp::Add, .. }
    ));
}

#[test]
fn test_empty_lists() {
    let mut arena = ExprArena::new();
    let exprs = arena.alloc_expr_list([]);
    let names = arena.alloc_names([]);
    assert!(exprs.is_empty());
    assert!(names.is_empty());
    assert!(arena.get_expr_list(exprs).is_empty());
    assert!(arena.get_names(names).is_empty());
}

#[test]
fn test_name_ranges() {
    let mut arena = ExprArena::new();
    let a = Name::from_raw(1);
    let b = Name::from_raw(2);
    let params = arena.alloc_names([a, b]);
    assert_eq!(params.len(), 2);
    assert_eq!(arena.get_names(params), &[a, b]);
}
