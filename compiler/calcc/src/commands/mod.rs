//! Command handlers for the calc CLI.
//!
//! Each submodule implements one command. Option parsing and `read_file`
//! live here in the module root.

use calc_diagnostic::emitter::ColorMode;
use calc_eval::DEFAULT_MAX_CALL_DEPTH;

mod explain;
mod run;

pub use explain::explain_error;
pub use run::{eval_text, run_file};

/// Options shared by `run` and `eval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// `None` disables the limit (`--max-depth=none`).
    pub max_call_depth: Option<usize>,
    pub color: ColorMode,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            color: ColorMode::Auto,
        }
    }
}

/// Split `run`/`eval` arguments into options and the single positional
/// argument (a path or source text).
///
/// Only arguments starting with `--` are options, so `calc eval -5` works.
pub fn parse_run_args(args: &[String]) -> Result<(RunOptions, String), String> {
    let mut options = RunOptions::default();
    let mut target = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_call_depth = match value {
                "none" => None,
                n => Some(
                    n.parse()
                        .map_err(|_| format!("invalid value '{n}' for --max-depth"))?,
                ),
            };
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(value)
                .ok_or_else(|| format!("invalid value '{value}' for --color"))?;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else if target.is_none() {
            target = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let target = target.ok_or_else(|| "missing argument".to_string())?;
    Ok((options, target))
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
