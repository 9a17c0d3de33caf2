#![allow(clippy::unwrap_used)]

use super::*;
use crate::{unknown_identifier, ErrorCode};
use calc_ir::Span;
use pretty_assertions::assert_eq;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message("unknown identifier `x`")
        .with_label(Span::new(3, 4), "not found in this scope")
        .with_note("bindings are looked up when evaluated")
        .with_suggestion("define `x` with `(set x ...)`")
}

fn render(emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true);
    let text = render(emitter, &sample_diagnostic());

    assert!(text.starts_with("error[E2001]: unknown identifier `x`"));
    assert!(text.contains("--> 3..4: not found in this scope"));
    assert!(text.contains("= note: bindings are looked up when evaluated"));
    assert!(text.contains("= help: define `x`"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    let text = render(emitter, &sample_diagnostic());
    assert!(text.contains("\x1b["));
    assert!(text.contains("E2001"));
}

#[test]
fn test_auto_mode_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_from_flag() {
    assert_eq!(ColorMode::from_flag("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::from_flag("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::from_flag("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::from_flag("sometimes"), None);
}

#[test]
fn test_snippet_rendering() {
    let file = SourceFile::new("prog.calc", "(set y 1)\n(+ x 1)\n");
    let diag = unknown_identifier(Span::new(13, 14), "x");
    let emitter =
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_source(&file);
    let text = render(emitter, &diag);

    let expected = "\
error[E2001]: unknown identifier `x`
 --> prog.calc:2:4
  |
2 | (+ x 1)
  |    ^ not found in this scope

";
    assert_eq!(text, expected);
}

#[test]
fn test_snippet_for_anonymous_source() {
    let file = SourceFile::anonymous("(/ 1 0)");
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("division by zero")
        .with_label(Span::new(0, 7), "divisor is zero");
    let emitter =
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_source(&file);
    let text = render(emitter, &diag);
    assert!(text.contains(" --> <input>:1:1"));
    assert!(text.contains("  | ^^^^^^^ divisor is zero"));
}

#[test]
fn test_secondary_label_uses_dashes() {
    let file = SourceFile::anonymous("(+ 1 2");
    let diag = crate::unclosed_delimiter(Span::new(0, 1), Span::new(6, 6));
    let emitter =
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_source(&file);
    let text = render(emitter, &diag);
    assert!(text.contains(" --> <input>:1:1"));
    assert!(text.contains(" ::: <input>:1:7"));
    assert!(text.contains("  |       - file ends here"));
}

#[test]
fn test_emit_all() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
        Diagnostic::error(ErrorCode::E2001).with_message("error 2"),
    ];
    emitter.emit_all(&diagnostics);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
}

#[test]
fn test_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(1, 0);
    emitter.emit_summary(3, 0);
    emitter.emit_summary(0, 0);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        text,
        "error: aborting due to previous error\nerror: aborting due to 3 previous errors\n"
    );
}
