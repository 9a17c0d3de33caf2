use super::*;

#[test]
fn test_returns_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| 7), 7);
}

#[test]
fn test_nested_sum() {
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(100), 5050);
}

#[test]
fn test_deep_recursion() {
    // Deep enough to overflow a default 8MB thread stack without growth.
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(200_000), 200_000);
}

#[test]
fn test_propagates_errors() {
    let result: Result<i64, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}
