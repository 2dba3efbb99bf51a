//! Document model - the shared text buffer, its selection and file state
//!
//! Every structural edit (one that changes the line count) is appended to a
//! line-edit log. The update loop drains the log after each message so line
//! markers can be renumbered in the same action that performed the edit.

use serde::Serialize;
use std::ops::Range;
use std::path::PathBuf;

use crate::editable::{RopeBuffer, Selection, TextBuffer, TextBufferMut};
use crate::util::{char_len, is_word_char};

/// A structural edit: every line `>= from_line` moved by `delta`.
///
/// For a deletion the `-delta` lines just above `from_line` were removed or
/// joined into the line where the deletion started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineEdit {
    pub from_line: usize,
    pub delta: isize,
}

impl LineEdit {
    /// Lines swallowed by a deletion and the surviving line they joined
    pub fn absorbed(&self) -> Option<(Range<usize>, usize)> {
        if self.delta >= 0 {
            return None;
        }
        let first = self.from_line.checked_sub(self.delta.unsigned_abs())?;
        Some((first..self.from_line, first.checked_sub(1)?))
    }
}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The text buffer
    pub buffer: RopeBuffer,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Incremented on each edit
    pub revision: u64,
    selection: Selection,
    line_edits: Vec<LineEdit>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: RopeBuffer::from_text(text),
            ..Self::default()
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: PathBuf) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(&path)?;
        Ok(Self {
            buffer: RopeBuffer::from_text(&content),
            file_path: Some(path),
            ..Self::default()
        })
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn line_at(&self, offset: usize) -> usize {
        self.buffer.line_at(offset)
    }

    pub fn offset_of_line(&self, line: usize) -> usize {
        self.buffer.offset_of_line(line)
    }

    /// First occurrence of `needle` fully inside `range`
    pub fn find(&self, range: Range<usize>, needle: &str, case_sensitive: bool) -> Option<usize> {
        self.buffer.find(range, needle, case_sensitive)
    }

    /// Last occurrence of `needle` fully inside `range`
    pub fn rfind(&self, range: Range<usize>, needle: &str, case_sensitive: bool) -> Option<usize> {
        self.buffer.rfind(range, needle, case_sensitive)
    }

    // === Selection ===

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(self.len_chars());
    }

    /// Select `range`, caret at its end
    pub fn select(&mut self, range: Range<usize>) {
        self.set_selection(Selection::from_range(range));
    }

    /// Collapse the selection to `offset`
    pub fn set_caret(&mut self, offset: usize) {
        self.set_selection(Selection::collapsed(offset));
    }

    /// Caret position (selection head)
    pub fn caret(&self) -> usize {
        self.selection.head
    }

    pub fn caret_line(&self) -> usize {
        self.line_at(self.caret())
    }

    pub fn selected_text(&self) -> String {
        self.buffer.slice(self.selection.range())
    }

    // === Editing ===

    /// Insert `text` at `offset`. Selection ends strictly after `offset`
    /// move with the text; an end sitting exactly at `offset` stays put.
    pub fn insert_at(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let offset = offset.min(self.len_chars());
        let (line, column) = self.buffer.offset_to_position(offset);
        let added = text.matches('\n').count();

        self.buffer.insert(offset, text);
        self.touch();

        let len = char_len(text);
        let shift = |pos: usize| if pos > offset { pos + len } else { pos };
        self.selection = Selection::new(shift(self.selection.anchor), shift(self.selection.head));

        if added > 0 {
            let from_line = if column == 0 { line } else { line + 1 };
            self.record_line_edit(from_line, added as isize);
        }
    }

    /// Remove the chars in `range`
    pub fn delete_range(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return;
        }
        let start_line = self.line_at(start);
        let end_line = self.line_at(end);
        let removed = end_line - start_line;

        self.buffer.remove(start..end);
        self.touch();

        let shift = |pos: usize| {
            if pos >= end {
                pos - (end - start)
            } else if pos > start {
                start
            } else {
                pos
            }
        };
        self.selection = Selection::new(shift(self.selection.anchor), shift(self.selection.head));

        if removed > 0 {
            self.record_line_edit(end_line + 1, -(removed as isize));
        }
    }

    /// Replace `range` with `text`; the caret is left after the new text
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) {
        let start = range.start.min(self.len_chars());
        self.delete_range(start..range.end);
        self.insert_at(start, text);
        self.set_caret(start + char_len(text));
    }

    /// Typing: replace the selection with `text`, caret after it
    pub fn type_text(&mut self, text: &str) {
        let range = self.selection.range();
        self.replace_range(range, text);
    }

    /// Backspace: delete the selection, or the char before the caret
    pub fn delete_backward(&mut self) {
        let range = if self.selection.is_empty() {
            let caret = self.caret();
            if caret == 0 {
                return;
            }
            caret - 1..caret
        } else {
            self.selection.range()
        };
        self.delete_range(range.clone());
        self.set_caret(range.start);
    }

    /// Structural edits since the last drain, oldest first
    pub fn take_line_edits(&mut self) -> Vec<LineEdit> {
        std::mem::take(&mut self.line_edits)
    }

    fn record_line_edit(&mut self, from_line: usize, delta: isize) {
        tracing::trace!(from_line, delta, "structural edit");
        self.line_edits.push(LineEdit { from_line, delta });
    }

    fn touch(&mut self) {
        self.is_modified = true;
        self.revision += 1;
    }

    // === Queries used by the Tab dispatch ===

    /// Word immediately before the caret, with its start offset
    pub fn word_before_caret(&self) -> (usize, String) {
        let caret = self.caret();
        let (line, column) = self.buffer.offset_to_position(caret);
        let text = self.buffer.line(line).unwrap_or_default();
        let chars: Vec<char> = text.chars().take(column).collect();
        let start = chars
            .iter()
            .rposition(|c| !is_word_char(*c))
            .map_or(0, |i| i + 1);
        let word: String = chars[start..].iter().collect();
        (caret - (chars.len() - start), word)
    }

    /// Whole word around the caret (extends both ways)
    pub fn word_at_caret(&self) -> String {
        let (line, column) = self.buffer.offset_to_position(self.caret());
        let chars: Vec<char> = self.line_text(line).chars().collect();
        let column = column.min(chars.len());
        let start = chars[..column]
            .iter()
            .rposition(|c| !is_word_char(*c))
            .map_or(0, |i| i + 1);
        let end = chars[column..]
            .iter()
            .position(|c| !is_word_char(*c))
            .map_or(chars.len(), |i| column + i);
        chars[start..end].iter().collect()
    }

    /// Char immediately before the caret
    pub fn char_before_caret(&self) -> Option<char> {
        let caret = self.caret();
        if caret == 0 {
            return None;
        }
        self.buffer.slice(caret - 1..caret).chars().next()
    }

    /// Indentation (leading whitespace columns) of `line`
    pub fn indentation(&self, line: usize) -> usize {
        self.buffer.first_non_whitespace_column(line)
    }

    pub fn line_text(&self, line: usize) -> String {
        self.buffer
            .line(line)
            .map(|l| l.into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_caret_at_insertion_point() {
        let mut doc = Document::with_text("ab");
        doc.set_caret(1);
        doc.insert_at(1, "XY");
        assert_eq!(doc.text(), "aXYb");
        assert_eq!(doc.caret(), 1);
    }

    #[test]
    fn test_insert_shifts_selection_after_offset() {
        let mut doc = Document::with_text("hello world");
        doc.select(6..11);
        doc.insert_at(0, ">> ");
        assert_eq!(doc.selection().range(), 9..14);
        assert_eq!(doc.selected_text(), "world");
    }

    #[test]
    fn test_insert_records_line_edit() {
        let mut doc = Document::with_text("a\nb\nc\n");
        doc.insert_at(doc.offset_of_line(1), "x\ny\n");
        assert_eq!(
            doc.take_line_edits(),
            vec![LineEdit {
                from_line: 1,
                delta: 2
            }]
        );
        // Drained
        assert!(doc.take_line_edits().is_empty());
    }

    #[test]
    fn test_insert_mid_line_shifts_following_lines() {
        let mut doc = Document::with_text("abc\ndef");
        doc.insert_at(1, "\n");
        assert_eq!(
            doc.take_line_edits(),
            vec![LineEdit {
                from_line: 1,
                delta: 1
            }]
        );
    }

    #[test]
    fn test_delete_records_negative_line_edit() {
        let mut doc = Document::with_text("a\nb\nc\nd");
        let start = doc.offset_of_line(1);
        let end = doc.offset_of_line(3);
        doc.delete_range(start..end);
        assert_eq!(doc.text(), "a\nd");
        let edits = doc.take_line_edits();
        assert_eq!(
            edits,
            vec![LineEdit {
                from_line: 4,
                delta: -2
            }]
        );
        // Old lines 2 and 3 end up on line 1
        assert_eq!(edits[0].absorbed(), Some((2..4, 1)));
    }

    #[test]
    fn test_join_records_line_edit_after_joined_line() {
        let mut doc = Document::with_text("ab\ncd\nef\n");
        doc.set_caret(doc.offset_of_line(1));
        doc.delete_backward();
        assert_eq!(doc.text(), "abcd\nef\n");
        let edits = doc.take_line_edits();
        assert_eq!(
            edits,
            vec![LineEdit {
                from_line: 2,
                delta: -1
            }]
        );
        assert_eq!(edits[0].absorbed(), Some((1..2, 0)));
        assert_eq!(
            LineEdit {
                from_line: 3,
                delta: 2
            }
            .absorbed(),
            None
        );
    }

    #[test]
    fn test_type_text_replaces_selection() {
        let mut doc = Document::with_text("range(10)");
        doc.select(6..8);
        doc.type_text("4");
        assert_eq!(doc.text(), "range(4)");
        assert_eq!(doc.caret(), 7);
        assert!(doc.selection().is_empty());
    }

    #[test]
    fn test_delete_backward() {
        let mut doc = Document::with_text("abc");
        doc.set_caret(3);
        doc.delete_backward();
        assert_eq!(doc.text(), "ab");
        assert_eq!(doc.caret(), 2);
    }

    #[test]
    fn test_word_before_caret() {
        let mut doc = Document::with_text("    a = Sine");
        doc.set_caret(12);
        assert_eq!(doc.word_before_caret(), (8, "Sine".to_string()));
        doc.set_caret(7);
        assert_eq!(doc.word_before_caret(), (7, String::new()));
    }

    #[test]
    fn test_word_at_caret() {
        let mut doc = Document::with_text("m = Metro(0.1)");
        doc.set_caret(6);
        assert_eq!(doc.word_at_caret(), "Metro");
        doc.set_caret(9);
        assert_eq!(doc.word_at_caret(), "Metro");
        doc.set_caret(3);
        assert_eq!(doc.word_at_caret(), "");
    }
}
