//! Line markers: user-annotated lines that follow the text as it is edited
//!
//! Markers live only as long as the open document. The registry is keyed by
//! line number; navigation walks the keys in ascending order.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerEntry {
    pub line: usize,
    pub comment: String,
}

/// Receives marker state changes (e.g. a marker list panel)
pub trait MarkerObserver {
    /// Called after any mutation with the full sorted entry list
    fn markers_changed(&mut self, markers: &[MarkerEntry]);

    /// Called when navigation lands on the `index`-th marker
    fn marker_selected(&mut self, _index: usize, _line: usize) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMarkerObserver;

impl MarkerObserver for NoopMarkerObserver {
    fn markers_changed(&mut self, _markers: &[MarkerEntry]) {}
}

pub struct MarkerRegistry {
    entries: BTreeMap<usize, MarkerEntry>,
    /// Index into the sorted keys; None when unset
    cursor_index: Option<usize>,
    observer: Box<dyn MarkerObserver>,
}

impl fmt::Debug for MarkerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkerRegistry")
            .field("entries", &self.entries)
            .field("cursor_index", &self.cursor_index)
            .finish_non_exhaustive()
    }
}

impl Default for MarkerRegistry {
    fn default() -> Self {
        Self::new(Box::new(NoopMarkerObserver))
    }
}

impl MarkerRegistry {
    pub fn new(observer: Box<dyn MarkerObserver>) -> Self {
        Self {
            entries: BTreeMap::new(),
            cursor_index: None,
            observer,
        }
    }

    /// Add a marker with an empty comment. Returns false (and changes
    /// nothing) when `line` already has one.
    pub fn add(&mut self, line: usize) -> bool {
        if self.entries.contains_key(&line) {
            return false;
        }
        self.entries.insert(
            line,
            MarkerEntry {
                line,
                comment: String::new(),
            },
        );
        tracing::debug!(line, "Marker added");
        self.notify();
        true
    }

    pub fn remove(&mut self, line: usize) {
        if self.entries.remove(&line).is_some() {
            tracing::debug!(line, "Marker removed");
            self.notify();
        }
    }

    pub fn set_comment(&mut self, line: usize, text: &str) {
        if let Some(entry) = self.entries.get_mut(&line) {
            entry.comment = text.to_string();
            self.notify();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor_index = None;
        self.notify();
    }

    /// Renumber markers after a structural edit: every entry at or below
    /// `from_line` moves to `line + delta`.
    ///
    /// When two markers land on the same line the one already there wins,
    /// but an empty comment gives way to a non-empty one.
    pub fn shift(&mut self, from_line: usize, delta: isize) {
        if delta == 0 || !self.entries.keys().any(|&line| line >= from_line) {
            return;
        }

        let moved = self.entries.split_off(&from_line);
        for (line, entry) in moved {
            let target = line.saturating_add_signed(delta);
            self.place(line, target, entry);
        }

        tracing::trace!(from_line, delta, "Markers shifted");
        self.notify();
    }

    /// Move every marker on `lines` onto `target`, merging as [`shift`] does.
    /// Used for lines that a deletion removed or joined into `target`.
    ///
    /// [`shift`]: MarkerRegistry::shift
    pub fn collapse(&mut self, lines: Range<usize>, target: usize) {
        let absorbed: Vec<usize> = self
            .entries
            .range(lines.clone())
            .map(|(&line, _)| line)
            .filter(|&line| line != target)
            .collect();
        if absorbed.is_empty() {
            return;
        }

        for line in absorbed {
            if let Some(entry) = self.entries.remove(&line) {
                self.place(line, target, entry);
            }
        }

        tracing::trace!(?lines, target, "Markers collapsed");
        self.notify();
    }

    fn place(&mut self, line: usize, target: usize, mut entry: MarkerEntry) {
        entry.line = target;
        match self.entries.get_mut(&target) {
            Some(existing) => {
                if existing.comment.is_empty() && !entry.comment.is_empty() {
                    existing.comment = entry.comment;
                }
                tracing::debug!(line, target, "Marker merged into existing marker");
            }
            None => {
                self.entries.insert(target, entry);
            }
        }
    }

    /// Step to the next/previous marker line, wrapping at both ends.
    /// Returns None when there are no markers.
    pub fn navigate(&mut self, forward: bool) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }

        let current = self.cursor_index.map_or(-1, |i| i as isize);
        let next = if forward { current + 1 } else { current - 1 };
        let index = if next < 0 {
            len - 1
        } else if next as usize >= len {
            0
        } else {
            next as usize
        };

        self.cursor_index = Some(index);
        let line = self.entries.keys().nth(index).copied()?;
        self.observer.marker_selected(index, line);
        Some(line)
    }

    pub fn contains(&self, line: usize) -> bool {
        self.entries.contains_key(&line)
    }

    pub fn comment(&self, line: usize) -> Option<&str> {
        self.entries.get(&line).map(|e| e.comment.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor_index
    }

    /// Entries sorted by line
    pub fn entries(&self) -> Vec<MarkerEntry> {
        self.entries.values().cloned().collect()
    }

    pub fn lines(&self) -> Vec<usize> {
        self.entries.keys().copied().collect()
    }

    fn notify(&mut self) {
        let entries = self.entries();
        self.observer.markers_changed(&entries);
    }
}
