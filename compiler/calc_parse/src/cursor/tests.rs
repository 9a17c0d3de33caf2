use super::*;
use calc_ir::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn test_advance_stops_at_eof() {
    let interner = StringInterner::new();
    let tokens = calc_lexer::lex("1", &interner);
    let mut cursor = Cursor::new(&tokens);

    assert_eq!(cursor.advance().kind, TokenKind::Int(1));
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.previous_span(), Span::new(0, 1));
}

#[test]
fn test_skip_past_close_skips_nested_forms() {
    let interner = StringInterner::new();
    // Cursor starts inside the outer form, just after `(+`.
    let tokens = calc_lexer::lex("(+ (* 1 2) x) 7", &interner);
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    cursor.advance();

    cursor.skip_past_close();
    assert_eq!(cursor.current_kind(), TokenKind::Int(7));
}

#[test]
fn test_skip_past_close_unclosed() {
    let interner = StringInterner::new();
    let tokens = calc_lexer::lex("(+ 1 (2", &interner);
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();

    cursor.skip_past_close();
    assert!(cursor.is_at_end());
}
