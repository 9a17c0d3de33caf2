//! The `run` and `eval` commands: evaluate a file or a string.

use calc_diagnostic::emitter::TerminalEmitter;
use calc_diagnostic::SourceFile;

use super::{read_file, RunOptions};
use crate::{eval_source, EvalOptions, EvalOutcome};

/// Evaluate a calc source file and print its final value.
///
/// On failure the diagnostics go to stderr and the process exits with 1.
pub fn run_file(path: &str, options: &RunOptions) {
    let content = read_file(path);
    run(&SourceFile::new(path, content), options);
}

/// Evaluate source text given on the command line.
pub fn eval_text(source: &str, options: &RunOptions) {
    run(&SourceFile::anonymous(source), options);
}

fn run(file: &SourceFile, options: &RunOptions) {
    let eval_options = EvalOptions {
        max_call_depth: options.max_call_depth,
        ..EvalOptions::default()
    };
    report(eval_source(file, &eval_options), options);
}

fn report(outcome: EvalOutcome, options: &RunOptions) {
    match outcome {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {}
        Err(failure) => {
            let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
            let mut emitter =
                TerminalEmitter::stderr(options.color, is_tty).with_source(failure.file());
            failure.emit(&mut emitter);
            std::process::exit(1);
        }
    }
}
