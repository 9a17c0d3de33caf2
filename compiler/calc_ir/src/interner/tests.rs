use super::*;

#[test]
fn test_intern_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("fib");
    let b = interner.intern("fib");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "fib");
}

#[test]
fn test_distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    assert_ne!(x, y);
    assert_eq!(interner.lookup(x), "x");
    assert_eq!(interner.lookup(y), "y");
}

#[test]
fn test_empty_string_is_preinterned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.len(), 1);
    assert!(!interner.is_empty());
}

#[test]
fn test_lookup_unknown_name_is_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(999)), "");
}
