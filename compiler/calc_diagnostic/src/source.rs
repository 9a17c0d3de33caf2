//! Source buffers that diagnostics point into.

/// A unit of source text with an optional file name.
///
/// Text passed on the command line has no file name; diagnostics then
/// render the location as `<input>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceFile {
    name: Option<String>,
    text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        SourceFile {
            name: (!name.is_empty()).then_some(name),
            text: text.into(),
        }
    }

    /// Source text with no associated file name.
    pub fn anonymous(text: impl Into<String>) -> Self {
        SourceFile {
            name: None,
            text: text.into(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name used in `--> name:line:col` locations.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<input>")
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
