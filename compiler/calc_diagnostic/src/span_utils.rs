//! Line and column lookup for byte offsets.

use calc_ir::Span;

/// Pre-computed line offset table for line/column lookup.
///
/// ```
/// use calc_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0]` is always 0.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column). Columns count characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start(line).min(source.len());
        let end = (offset as usize).clamp(line_start, source.len());
        let col_text = source.get(line_start..end).unwrap_or("");
        let col = u32::try_from(col_text.chars().count()).unwrap_or(u32::MAX - 1) + 1;
        (line, col)
    }

    /// Text of a 1-based line without its trailing newline.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> &'s str {
        if line == 0 || line as usize > self.offsets.len() {
            return "";
        }
        let start = self.line_start(line).min(source.len());
        let end = self
            .offsets
            .get(line as usize)
            .map_or(source.len(), |&next| (next as usize).saturating_sub(1))
            .clamp(start, source.len());
        let text = source.get(start..end).unwrap_or("");
        text.strip_suffix('\r').unwrap_or(text)
    }

    /// Line and column where `span` starts.
    pub fn span_start(&self, source: &str, span: Span) -> (u32, u32) {
        self.offset_to_line_col(source, span.start)
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    fn line_start(&self, line: u32) -> usize {
        self.offsets
            .get((line.saturating_sub(1)) as usize)
            .copied()
            .unwrap_or(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_from_offset_multiple_lines() {
        let table = LineOffsetTable::build("line1\nline2\nline3");
        assert_eq!(table.line_from_offset(0), 1);
        assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
        assert_eq!(table.line_from_offset(6), 2);
        assert_eq!(table.line_from_offset(12), 3);
        assert_eq!(table.line_count(), 3);
    }

    #[test]
    fn test_offset_to_line_col() {
        let source = "abc\ndefgh\nij";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
        assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
        assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
        assert_eq!(table.offset_to_line_col(source, 7), (2, 4));
        assert_eq!(table.offset_to_line_col(source, 11), (3, 2));
    }

    #[test]
    fn test_offset_at_end_of_source() {
        let source = "(+ 1";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 4), (1, 5));
        assert_eq!(table.span_start(source, Span::new(4, 4)), (1, 5));
    }

    #[test]
    fn test_columns_count_characters() {
        let source = "; é\n(x)";
        let table = LineOffsetTable::build(source);
        // "é" is two bytes; `(` on line 2 still lands in column 1.
        assert_eq!(table.offset_to_line_col(source, 5), (2, 1));
        assert_eq!(table.offset_to_line_col(source, 4), (1, 4));
    }

    #[test]
    fn test_line_text() {
        let source = "first\r\nsecond\nthird";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_text(source, 1), "first");
        assert_eq!(table.line_text(source, 2), "second");
        assert_eq!(table.line_text(source, 3), "third");
        assert_eq!(table.line_text(source, 0), "");
        assert_eq!(table.line_text(source, 4), "");
    }
}
