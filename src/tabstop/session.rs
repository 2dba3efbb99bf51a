//! Tab-stop session state machine
//!
//! A session is created when a template is inserted and walks the caret
//! through its placeholders, one per Tab:
//!
//! ```text
//! Idle ──start──▶ Active ──advance × N──▶ (pending) ──Tab──▶ Completed
//!                   │
//!                   └──caret leaves bounding range / dismiss──▶ Cancelled
//! ```
//!
//! The session owns no text. It only tracks line numbers and the queue of
//! placeholders still to visit; every lookup goes back to the document.

use serde::Serialize;
use std::collections::VecDeque;

use crate::model::Document;
use crate::template::Template;
use crate::util::{char_len, count_lines, indent_continuation_lines, is_identifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Idle,
    Active,
    Completed,
    Cancelled,
}

/// What triggered the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionKind {
    /// Keyword template or user snippet
    Template,
    /// `(name=default, ...)` after a known callable
    ArgumentFill,
}

/// Half-open line range `[start, end)` the session considers "inside"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line < self.end
    }
}

#[derive(Debug, Clone)]
pub struct TabStopSession {
    kind: SessionKind,
    state: SessionState,
    bounding: LineSpan,
    remaining: VecDeque<String>,
    last_selected_text: String,
    /// Set once the last placeholder is selected; the next Tab completes
    pending_completion: bool,
    advances: usize,
    placeholder_count: usize,
}

/// Text to look for when tabbing to `entry`.
///
/// `freq=1000` selects the default `1000`; an entry whose left side is not
/// an identifier (e.g. `i -= 1`) is searched verbatim.
pub fn search_target(entry: &str) -> &str {
    match entry.split_once('=') {
        Some((name, default)) if is_identifier(name.trim()) => default.trim(),
        _ => entry,
    }
}

impl TabStopSession {
    pub fn new(kind: SessionKind) -> Self {
        Self {
            kind,
            state: SessionState::Idle,
            bounding: LineSpan::default(),
            remaining: VecDeque::new(),
            last_selected_text: String::new(),
            pending_completion: false,
            advances: 0,
            placeholder_count: 0,
        }
    }

    /// Create a session and insert `template` right away
    pub fn begin(
        doc: &mut Document,
        insertion_offset: usize,
        template: &Template,
        indent_columns: usize,
        kind: SessionKind,
    ) -> Self {
        let mut session = Self::new(kind);
        session.start(doc, insertion_offset, template, indent_columns);
        session
    }

    /// Insert the template and select its first placeholder.
    /// Only valid from `Idle`; later calls are ignored.
    pub fn start(
        &mut self,
        doc: &mut Document,
        insertion_offset: usize,
        template: &Template,
        indent_columns: usize,
    ) {
        if self.state != SessionState::Idle {
            tracing::warn!(state = ?self.state, "start() on a session that already ran");
            return;
        }

        let text = indent_continuation_lines(template.literal_text(), indent_columns);
        let offset = insertion_offset.min(doc.len_chars());
        let first_line = doc.line_at(offset);

        doc.insert_at(offset, &text);
        doc.set_caret(offset);

        self.bounding = LineSpan {
            start: first_line,
            end: first_line + count_lines(&text).max(1),
        };
        self.placeholder_count = template.placeholders().len();
        tracing::debug!(
            kind = ?self.kind,
            lines = ?self.bounding,
            placeholders = self.placeholder_count,
            "Tab-stop session started"
        );

        if !template.has_placeholders() {
            self.state = SessionState::Completed;
            doc.set_caret(offset + char_len(&text) + 1);
            return;
        }

        self.remaining = template.placeholders().iter().cloned().collect();
        self.state = SessionState::Active;
        self.advance(doc);
    }

    /// Select the next placeholder. A placeholder that can no longer be found
    /// ends the session.
    pub fn advance(&mut self, doc: &mut Document) {
        if self.state != SessionState::Active {
            return;
        }
        if self.advances > 0 {
            self.commit(doc);
        }
        let Some(entry) = self.remaining.pop_front() else {
            self.complete(doc);
            return;
        };
        self.advances += 1;
        if self.remaining.is_empty() {
            self.pending_completion = true;
        }

        let target = search_target(&entry);
        let window_start = doc
            .selection()
            .end()
            .max(doc.offset_of_line(self.bounding.start));
        let window_end = doc.offset_of_line(self.bounding.end);

        if target.is_empty() {
            doc.set_caret(window_start.min(window_end));
            return;
        }

        match doc.find(window_start..window_end, target, true) {
            Some(start) => {
                tracing::trace!(target, start, "Placeholder selected");
                doc.select(start..start + char_len(target));
            }
            None => {
                tracing::debug!(target, "Placeholder no longer present, ending session");
                self.finish();
            }
        }
    }

    /// Tab while active: advance, or complete when the last placeholder
    /// was already selected.
    pub fn on_tab(&mut self, doc: &mut Document) -> SessionState {
        if self.state == SessionState::Active {
            if self.pending_completion {
                self.complete(doc);
            } else {
                self.advance(doc);
            }
        }
        self.state
    }

    /// Leave the session. The caret goes to the line after the template.
    pub fn complete(&mut self, doc: &mut Document) {
        if self.state != SessionState::Active {
            return;
        }
        self.commit(doc);
        doc.set_caret(doc.offset_of_line(self.bounding.end));
        self.finish();
    }

    /// Tear down without touching the buffer
    pub fn cancel(&mut self) {
        if self.state != SessionState::Active {
            return;
        }
        tracing::debug!(remaining = self.remaining.len(), "Tab-stop session cancelled");
        self.remaining.clear();
        self.pending_completion = false;
        self.state = SessionState::Cancelled;
    }

    /// Cancel when the caret moved off the template. Returns true if this
    /// call cancelled the session.
    pub fn on_caret_moved(&mut self, line: usize) -> bool {
        if self.state == SessionState::Active && !self.bounding.contains(line) {
            self.cancel();
            return true;
        }
        false
    }

    fn commit(&mut self, doc: &Document) {
        self.last_selected_text = doc.selected_text();
    }

    fn finish(&mut self) {
        self.remaining.clear();
        self.pending_completion = false;
        self.state = SessionState::Completed;
        tracing::debug!(advances = self.advances, "Tab-stop session completed");
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn bounding_range(&self) -> LineSpan {
        self.bounding
    }

    pub fn remaining(&self) -> impl Iterator<Item = &str> {
        self.remaining.iter().map(String::as_str)
    }

    pub fn last_selected_text(&self) -> &str {
        &self.last_selected_text
    }

    pub fn pending_completion(&self) -> bool {
        self.pending_completion
    }

    /// Number of `advance()` calls that selected (or tried to select) a placeholder
    pub fn advances(&self) -> usize {
        self.advances
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }
}
