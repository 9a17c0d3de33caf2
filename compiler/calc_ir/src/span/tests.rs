use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_merge_is_order_independent() {
    let a = Span::new(10, 20);
    let b = Span::new(15, 30);
    assert_eq!(a.merge(b), Span::new(10, 30));
    assert_eq!(b.merge(a), Span::new(10, 30));
}

#[test]
fn test_span_point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn test_try_from_range_overflow() {
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(too_big..too_big),
        Err(SpanError::StartTooLarge(too_big))
    );
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
    assert_eq!(Span::try_from_range(3..9), Ok(Span::new(3, 9)));
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(1, 4).to_string(), "1..4");
}
