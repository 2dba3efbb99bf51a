//! Offset-based selection shared by the document and every engine component.

use serde::Serialize;
use std::ops::Range;

/// A text selection with anchor (start point) and head (caret position),
/// both char offsets. The anchor stays fixed while the head moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Select `range` with the caret at its end
    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            anchor: range.start,
            head: range.end,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Leading edge
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Trailing edge
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Check if selection is reversed (head before anchor)
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// Clamp both ends to `len`
    pub fn clamped(self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            head: self.head.min(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_collapsed() {
        let sel = Selection::collapsed(5);
        assert!(sel.is_empty());
        assert_eq!(sel.range(), 5..5);
    }

    #[test]
    fn test_selection_start_end() {
        let forward = Selection::new(2, 7);
        assert_eq!(forward.range(), 2..7);
        assert!(!forward.is_reversed());

        let backward = Selection::new(7, 2);
        assert_eq!(backward.start(), 2);
        assert_eq!(backward.end(), 7);
        assert_eq!(backward.len(), 5);
        assert!(backward.is_reversed());
    }

    #[test]
    fn test_selection_clamped() {
        let sel = Selection::new(3, 40).clamped(10);
        assert_eq!(sel, Selection::new(3, 10));
    }
}
