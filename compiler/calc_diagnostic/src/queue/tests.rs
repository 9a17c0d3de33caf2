use super::*;
use crate::{unknown_identifier, Diagnostic, ErrorCode};
use pretty_assertions::assert_eq;

fn error_at(code: ErrorCode, start: u32) -> Diagnostic {
    Diagnostic::error(code)
        .with_message("test")
        .with_label(Span::new(start, start + 1), "here")
}

#[test]
fn test_add_counts_errors() {
    let mut queue = DiagnosticQueue::new();
    assert!(!queue.has_errors());
    assert!(queue.add(error_at(ErrorCode::E1001, 0)));
    assert!(queue.has_errors());
    assert_eq!(queue.error_count(), 1);
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_exact_duplicate_is_dropped() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(unknown_identifier(Span::new(3, 4), "x")));
    assert!(!queue.add(unknown_identifier(Span::new(3, 4), "x")));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_same_code_different_span_is_kept() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(error_at(ErrorCode::E2001, 0)));
    assert!(queue.add(error_at(ErrorCode::E2001, 5)));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_dedup_disabled() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert!(queue.add(error_at(ErrorCode::E2001, 0)));
    assert!(queue.add(error_at(ErrorCode::E2001, 0)));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_error_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    });
    assert!(queue.add(error_at(ErrorCode::E1001, 0)));
    assert!(queue.add(error_at(ErrorCode::E1001, 2)));
    assert!(queue.limit_reached());
    assert!(!queue.add(error_at(ErrorCode::E1001, 4)));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_flush_sorts_by_position() {
    let mut queue = DiagnosticQueue::new();
    queue.add(error_at(ErrorCode::E2001, 20));
    queue.add(Diagnostic::error(ErrorCode::E6004).with_message("no span"));
    queue.add(error_at(ErrorCode::E1001, 5));

    let flushed = queue.flush();
    let codes: Vec<_> = flushed.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![ErrorCode::E1001, ErrorCode::E2001, ErrorCode::E6004]
    );
    assert!(queue.is_empty());
    assert!(!queue.has_errors());
}
