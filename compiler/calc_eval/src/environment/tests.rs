use super::*;
use calc_ir::StringInterner;
use pretty_assertions::assert_eq;

fn names(interner: &StringInterner) -> (Name, Name) {
    (interner.intern("x"), interner.intern("y"))
}

#[test]
fn test_define_and_lookup() {
    let interner = StringInterner::new();
    let (x, _) = names(&interner);
    let mut env = Environment::new();

    env.define(x, Binding::Value(Value::Int(42)));
    assert_eq!(env.lookup(x), Some(Binding::Value(Value::Int(42))));
}

#[test]
fn test_lookup_missing() {
    let interner = StringInterner::new();
    let (x, _) = names(&interner);
    let env = Environment::new();
    assert_eq!(env.lookup(x), None);
}

#[test]
fn test_redefine_overwrites_in_same_scope() {
    let interner = StringInterner::new();
    let (x, _) = names(&interner);
    let mut env = Environment::new();

    env.define(x, Binding::Value(Value::Int(1)));
    env.define(x, Binding::Deferred(ExprId::new(7)));
    assert_eq!(env.lookup(x), Some(Binding::Deferred(ExprId::new(7))));
}

#[test]
fn test_inner_scope_shadows_and_restores() {
    let interner = StringInterner::new();
    let (x, y) = names(&interner);
    let mut env = Environment::new();
    env.define(x, Binding::Value(Value::Int(1)));

    env.push_scope();
    env.define(x, Binding::Value(Value::Int(2)));
    env.define(y, Binding::Value(Value::Int(3)));
    assert_eq!(env.lookup(x), Some(Binding::Value(Value::Int(2))));
    assert_eq!(env.depth(), 2);

    env.truncate(1);
    assert_eq!(env.lookup(x), Some(Binding::Value(Value::Int(1))));
    assert_eq!(env.lookup(y), None);
    assert_eq!(env.depth(), 1);
}

#[test]
fn test_inner_scope_sees_outer() {
    let interner = StringInterner::new();
    let (x, _) = names(&interner);
    let mut env = Environment::new();
    env.define(x, Binding::Value(Value::Int(5)));

    env.push_scope();
    env.push_scope();
    assert_eq!(env.lookup(x), Some(Binding::Value(Value::Int(5))));
}

#[test]
fn test_root_scope_is_never_popped() {
    let interner = StringInterner::new();
    let (x, _) = names(&interner);
    let mut env = Environment::new();
    env.define(x, Binding::Value(Value::Int(1)));

    env.truncate(0);
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup(x), Some(Binding::Value(Value::Int(1))));
}

#[test]
fn test_define_in_inner_scope_does_not_touch_global() {
    let interner = StringInterner::new();
    let (x, _) = names(&interner);
    let mut env = Environment::new();

    env.push_scope();
    env.define(x, Binding::Value(Value::Int(9)));
    env.truncate(1);
    assert_eq!(env.lookup(x), None);
}

#[test]
fn test_scope_len() {
    let interner = StringInterner::new();
    let (x, y) = names(&interner);
    let mut scope = Scope::new();
    assert!(scope.is_empty());
    scope.define(x, Binding::Value(Value::Nothing));
    scope.define(y, Binding::Value(Value::Nothing));
    scope.define(x, Binding::Value(Value::Int(0)));
    assert_eq!(scope.len(), 2);
}

#[test]
fn test_truncate_keeps_root() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut env = Environment::new();
    env.define(x, Binding::Value(Value::Int(1)));
    env.push_scope();
    env.push_scope();
    env.define(x, Binding::Value(Value::Int(3)));

    env.truncate(2);
    assert_eq!(env.depth(), 2);
    assert_eq!(env.lookup(x), Some(Binding::Value(Value::Int(1))));

    env.truncate(0);
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup(x), Some(Binding::Value(Value::Int(1))));
}

#[test]
fn test_lookup_through_very_deep_chain() {
    let interner = StringInterner::new();
    let (x, y) = names(&interner);
    let mut env = Environment::new();
    env.define(x, Binding::Value(Value::Int(1)));

    for _ in 0..200_000 {
        env.push_scope();
    }
    assert_eq!(env.lookup(x), Some(Binding::Value(Value::Int(1))));
    assert_eq!(env.lookup(y), None);

    env.truncate(1);
    assert_eq!(env.depth(), 1);

    // Dropping a deep stack must not recurse through the parent links either.
    for _ in 0..200_000 {
        env.push_scope();
    }
    drop(env);
}
