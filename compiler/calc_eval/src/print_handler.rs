//! Where `print` output goes.
//!
//! The CLI writes to stdout; tests and embedders capture lines in a buffer.
//! A handler is shared as an [`Arc`] so the caller keeps a handle to read
//! the buffer back after the run.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Value;

#[derive(Debug)]
pub enum PrintHandler {
    Stdout,
    /// Lines accumulated in memory, each ending in `\n`.
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandler {
    /// Write one `print` form's values: space separated, one line.
    pub fn print_values(&self, values: &[Value]) {
        let mut line = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&value.to_string());
        }
        self.write_line(&line);
    }

    pub fn write_line(&self, line: &str) {
        match self {
            // A closed pipe must not abort the run.
            PrintHandler::Stdout => {
                let _ = writeln!(std::io::stdout().lock(), "{line}");
            }
            PrintHandler::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            PrintHandler::Silent => {}
        }
    }

    /// Everything captured so far. Empty unless this is a buffer.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buf) => buf.lock().clone(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }

    /// Like [`output`](Self::output), but empties the buffer.
    pub fn take_output(&self) -> String {
        match self {
            PrintHandler::Buffer(buf) => std::mem::take(&mut *buf.lock()),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
