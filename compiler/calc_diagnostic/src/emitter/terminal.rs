//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! Given the [`SourceFile`], labels are rendered under the offending line.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity, SourceFile};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text plus its line table, kept together so lookups stay cheap.
struct SourceContext {
    file: SourceFile,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` is used for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Render labels against `file`: `--> name:line:col` plus a snippet.
    ///
    /// Without a source, labels fall back to raw byte ranges.
    #[must_use]
    pub fn with_source(mut self, file: &SourceFile) -> Self {
        self.source = Some(SourceContext {
            lines: LineOffsetTable::build(file.text()),
            file: file.clone(),
        });
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn label_color(label: &Label) -> &'static str {
        if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        }
    }

    /// `--> 0..5: message` when no source is attached.
    fn write_label_bare(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} {}: ", label.span);
        self.write_colored(&label.message, Self::label_color(label));
        let _ = writeln!(self.writer);
    }

    /// ```text
    ///   --> prog.calc:1:4
    ///    |
    ///  1 | (+ x 1)
    ///    |    ^ not found in this scope
    /// ```
    fn write_label_snippet(&mut self, label: &Label) {
        let Some(ctx) = self.source.as_ref() else {
            self.write_label_bare(label);
            return;
        };
        let text = ctx.file.text();
        let (line, col) = ctx.lines.offset_to_line_col(text, label.span.start);
        let line_text = ctx.lines.line_text(text, line).to_string();
        let name = ctx.file.display_name().to_string();

        let gutter = line.to_string().len();
        let pad = " ".repeat(gutter);
        let marker = if label.is_primary { "-->" } else { ":::" };
        let _ = writeln!(self.writer, "{pad}{marker} {name}:{line}:{col}");
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");

        // Underline up to the end of the line for multi-line spans.
        let line_chars = line_text.chars().count();
        let start_col = (col as usize).saturating_sub(1);
        let span_chars = text
            .get(label.span.start as usize..(label.span.end as usize).min(text.len()))
            .map_or(0, |s| s.chars().take_while(|&c| c != '\n').count());
        let width = span_chars
            .min(line_chars.saturating_sub(start_col))
            .max(1);
        let caret = if label.is_primary { "^" } else { "-" };
        let underline = caret.repeat(width);
        let _ = write!(self.writer, "{pad} | {}", " ".repeat(start_col));
        let color = Self::label_color(label);
        if label.message.is_empty() {
            self.write_colored(&underline, color);
        } else {
            self.write_colored(&format!("{underline} {}", label.message), color);
        }
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            if self.source.is_some() {
                self.write_label_snippet(label);
            } else {
                self.write_label_bare(label);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}

#[cfg(test)]
mod tests;
