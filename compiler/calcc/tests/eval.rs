//! End-to-end tests over the public entry points.

#![allow(clippy::unwrap_used)]

use calc_diagnostic::{ErrorCode, SourceFile};
use calc_eval::buffer_handler;
use calcc::{eval_expr, eval_file, eval_source, EvalOptions};
use pretty_assertions::assert_eq;

fn codes(source: &str) -> Vec<ErrorCode> {
    let failure = eval_expr(source).unwrap_err();
    failure.diagnostics().iter().map(|d| d.code).collect()
}

#[test]
fn test_values() {
    assert_eq!(eval_expr("(+ 1 2)").unwrap(), Some(3));
    assert_eq!(eval_expr("(set x 1)").unwrap(), None);
    assert_eq!(eval_expr("").unwrap(), None);
}

#[test]
fn test_program() {
    let source = "
        ; Fibonacci, the slow way
        (define fib (n)
          (if (< n 2)
              n
              (+ (fib (- n 1)) (fib (- n 2)))))
        (fib 15)";
    assert_eq!(eval_file("fib.calc", source).unwrap(), Some(610));
}

#[test]
fn test_parse_errors_skip_evaluation() {
    let output = buffer_handler();
    let options = EvalOptions {
        print_handler: output.clone(),
        ..EvalOptions::default()
    };
    let file = SourceFile::anonymous("(print 1) (+ 1");
    let failure = eval_source(&file, &options).unwrap_err();
    assert_eq!(failure.diagnostics().len(), 1);
    assert_eq!(failure.diagnostics()[0].code, ErrorCode::E1003);
    assert_eq!(output.output(), "");
}

#[test]
fn test_every_broken_expression_is_reported() {
    assert_eq!(codes("(< 1) (+ 1 #) (if 1)"), vec![ErrorCode::E1004, ErrorCode::E0001, ErrorCode::E1004]);
}

#[test]
fn test_runtime_errors() {
    assert_eq!(codes("missing"), vec![ErrorCode::E2001]);
    assert_eq!(codes("(/ 1 0)"), vec![ErrorCode::E6001]);
    assert_eq!(codes("(% 1 0)"), vec![ErrorCode::E6002]);
    assert_eq!(codes("(nope)"), vec![ErrorCode::E6003]);
}

#[test]
fn test_output_before_error_is_kept() {
    let output = buffer_handler();
    let options = EvalOptions {
        print_handler: output.clone(),
        ..EvalOptions::default()
    };
    let file = SourceFile::anonymous("(print 1 2) (print y) (print 3)");
    assert!(eval_source(&file, &options).is_err());
    assert_eq!(output.output(), "1 2\n");
}

#[test]
fn test_max_call_depth_option() {
    let source = SourceFile::anonymous("(define f (n) (f (+ n 1))) (f 0)");
    let options = EvalOptions {
        max_call_depth: Some(32),
        print_handler: buffer_handler(),
    };
    let failure = eval_source(&source, &options).unwrap_err();
    assert_eq!(failure.diagnostics()[0].code, ErrorCode::E6004);
    assert!(failure.diagnostics()[0].message.contains("32"));
}

#[test]
fn test_deep_recursion_with_default_options() {
    let file = SourceFile::anonymous("(define f (n) (if (< n 1) 0 (+ 1 (f (- n 1))))) (f 5000)");
    assert_eq!(eval_source(&file, &EvalOptions::default()).unwrap(), Some(5000));
}

#[test]
fn test_runaway_recursion_with_default_options() {
    let file = SourceFile::anonymous("(define f (n) (f (+ n 1))) (f 0)");
    let failure = eval_source(&file, &EvalOptions::default()).unwrap_err();
    assert_eq!(failure.diagnostics().len(), 1);
    assert_eq!(failure.diagnostics()[0].code, ErrorCode::E6004);
}

#[test]
fn test_render_points_into_source() {
    let failure = eval_expr("(print 1)\n(print y)").unwrap_err();
    let text = failure.render();
    assert!(text.contains("error[E2001]"), "{text}");
    assert!(text.contains(" --> <input>:2:8"), "{text}");
    assert!(text.contains("(print y)"), "{text}");
    assert!(text.contains("aborting due to previous error"), "{text}");
}

#[test]
fn test_failure_display() {
    let failure = eval_file("bad.calc", "(+ 1").unwrap_err();
    assert_eq!(failure.to_string(), "bad.calc failed with 1 error(s)");
    assert_eq!(failure.file().name(), Some("bad.calc"));
}

#[test]
fn test_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.calc");
    std::fs::write(&path, "(set a 20)\n(set b 22)\n(print a b c)\n").unwrap();

    let name = path.display().to_string();
    let text = std::fs::read_to_string(&path).unwrap();
    let failure = eval_file(&name, &text).unwrap_err();
    let rendered = failure.render();
    assert!(rendered.contains(&format!("{name}:3:12")), "{rendered}");

    std::fs::write(&path, "(set a 20)\n(set b 22)\n(+ a b)\n").unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(eval_file(&name, &text).unwrap(), Some(42));
}
