//! Text buffer traits and the rope-backed implementation used by documents.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits.
//! All offsets are character offsets, all lines are 0-indexed.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;

use crate::util::text::{find_chars, rfind_chars};

/// Read-only view into a text buffer.
pub trait TextBuffer {
    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Length of a specific line in characters (excluding newline)
    fn line_length(&self, line: usize) -> usize;

    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Get line content (without trailing newline)
    fn line(&self, line: usize) -> Option<Cow<'_, str>>;

    /// Convert (line, column) to char offset
    fn position_to_offset(&self, line: usize, column: usize) -> usize;

    /// Convert char offset to (line, column)
    fn offset_to_position(&self, offset: usize) -> (usize, usize);

    /// Get slice of text as String (by character indices)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get full content as String (may be expensive for large buffers)
    fn content(&self) -> String;

    /// Column of first non-whitespace character on line
    fn first_non_whitespace_column(&self, line: usize) -> usize;

    /// Line containing the given char offset
    fn line_at(&self, offset: usize) -> usize {
        self.offset_to_position(offset).0
    }

    /// Char offset of the first character of `line`.
    /// Lines past the end map to the end of the buffer.
    fn offset_of_line(&self, line: usize) -> usize {
        self.position_to_offset(line, 0)
    }

    /// First literal occurrence of `needle` fully inside `range`.
    fn find(&self, range: Range<usize>, needle: &str, case_sensitive: bool) -> Option<usize> {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if needle.is_empty() || start >= end {
            return None;
        }
        let haystack: Vec<char> = self.slice(start..end).chars().collect();
        let needle: Vec<char> = needle.chars().collect();
        find_chars(&haystack, &needle, case_sensitive).map(|i| start + i)
    }

    /// Last literal occurrence of `needle` fully inside `range`.
    fn rfind(&self, range: Range<usize>, needle: &str, case_sensitive: bool) -> Option<usize> {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if needle.is_empty() || start >= end {
            return None;
        }
        let haystack: Vec<char> = self.slice(start..end).chars().collect();
        let needle: Vec<char> = needle.chars().collect();
        rfind_chars(&haystack, &needle, case_sensitive).map(|i| start + i)
    }
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);
}

/// TextBuffer implementation wrapping ropey::Rope.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }
}

impl Default for RopeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for RopeBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let line_slice = self.rope.line(line);
        let len = line_slice.len_chars();
        // Exclude trailing newline if present
        if len > 0 && line_slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let s = self.rope.line(line).to_string();
        let trimmed = s.trim_end_matches(&['\n', '\r'][..]).to_string();
        Some(Cow::Owned(trimmed))
    }

    fn position_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let line_start = self.rope.line_to_char(line);
        line_start + column.min(self.line_length(line))
    }

    fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(clamped);
        let line_start = self.rope.line_to_char(line);
        (line, clamped - line_start)
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }

    fn first_non_whitespace_column(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        self.rope
            .line(line)
            .chars()
            .take_while(|c| c.is_whitespace() && *c != '\n')
            .count()
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rope_buffer_multiline() {
        let buf = RopeBuffer::from_text("line1\nline2\nline3");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line(0).unwrap().as_ref(), "line1");
        assert_eq!(buf.line(2).unwrap().as_ref(), "line3");
    }

    #[test]
    fn test_rope_buffer_position_conversion() {
        let buf = RopeBuffer::from_text("hello\nworld");
        assert_eq!(buf.offset_to_position(5), (0, 5));
        assert_eq!(buf.offset_to_position(6), (1, 0));
        assert_eq!(buf.position_to_offset(1, 5), 11);
        assert_eq!(buf.line_at(8), 1);
        assert_eq!(buf.offset_of_line(1), 6);
        assert_eq!(buf.offset_of_line(7), 11);
    }

    #[test]
    fn test_rope_buffer_insert_remove() {
        let mut buf = RopeBuffer::from_text("hello\nworld");
        buf.insert(6, "beautiful ");
        assert_eq!(buf.content(), "hello\nbeautiful world");
        buf.remove(5..6);
        assert_eq!(buf.content(), "hellobeautiful world");
    }

    #[test]
    fn test_find_is_confined_to_range() {
        let buf = RopeBuffer::from_text("foo bar foo");
        assert_eq!(buf.find(0..11, "foo", true), Some(0));
        assert_eq!(buf.find(1..11, "foo", true), Some(8));
        // Match must fit entirely inside the range
        assert_eq!(buf.find(1..10, "foo", true), None);
    }

    #[test]
    fn test_find_case_insensitive() {
        let buf = RopeBuffer::from_text("Hello HELLO");
        assert_eq!(buf.find(1..11, "hello", true), None);
        assert_eq!(buf.find(1..11, "hello", false), Some(6));
    }

    #[test]
    fn test_rfind_returns_last_match() {
        let buf = RopeBuffer::from_text("ab ab ab");
        assert_eq!(buf.rfind(0..8, "ab", true), Some(6));
        assert_eq!(buf.rfind(0..7, "ab", true), Some(3));
        assert_eq!(buf.rfind(0..1, "ab", true), None);
    }

    #[test]
    fn test_find_counts_chars_not_bytes() {
        let buf = RopeBuffer::from_text("héllo wörld");
        assert_eq!(buf.find(0..11, "wörld", true), Some(6));
    }

    #[test]
    fn test_first_non_whitespace() {
        let buf = RopeBuffer::from_text("    hello\n  world");
        assert_eq!(buf.first_non_whitespace_column(0), 4);
        assert_eq!(buf.first_non_whitespace_column(1), 2);
    }
}
