//! Anchored search and replace over a document
//!
//! Two entry points:
//! - quick search: case-sensitive, wraps around once
//! - find/replace: confined to a window (selection or whole buffer) and
//!   remembers an anchor so FIND_NEXT and REPLACE_ALL can continue where the
//!   previous match ended

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

use crate::model::Document;
use crate::util::char_len;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindOp {
    Find,
    FindNext,
    Replace,
    ReplaceAll,
}

/// Result of a quick search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SearchOutcome {
    Found { range: Range<usize>, wrapped: bool },
    NotFound,
}

/// Result of a find/replace operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FindReplaceResult {
    Found(Range<usize>),
    /// Range of the replacement text
    Replaced(Range<usize>),
    ReplacedAll(usize),
    NotFound,
}

/// Notification sent to a [`SearchObserver`] after each operation
#[derive(Debug, Clone, Copy)]
pub enum SearchEvent<'a> {
    QuickSearch {
        query: &'a str,
        outcome: &'a SearchOutcome,
    },
    FindReplace {
        op: FindOp,
        query: &'a str,
        result: &'a FindReplaceResult,
    },
}

/// Receives search results (e.g. a find panel showing "not found")
pub trait SearchObserver {
    fn search_finished(&mut self, event: SearchEvent<'_>);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSearchObserver;

impl SearchObserver for NoopSearchObserver {
    fn search_finished(&mut self, _event: SearchEvent<'_>) {}
}

/// State carried between find/replace operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchSession {
    pub anchor_start: usize,
    pub anchor_end: usize,
    pub last_query: String,
    pub case_sensitive: bool,
}

impl SearchSession {
    pub fn anchor(&self) -> Range<usize> {
        self.anchor_start..self.anchor_end
    }
}

pub struct SearchController {
    session: Option<SearchSession>,
    observer: Box<dyn SearchObserver>,
}

impl fmt::Debug for SearchController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchController")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(Box::new(NoopSearchObserver))
    }
}

/// Selection bounds when something is selected, else the whole buffer
pub fn default_window(doc: &Document) -> Range<usize> {
    let selection = doc.selection();
    if selection.is_empty() {
        0..doc.len_chars()
    } else {
        selection.range()
    }
}

impl SearchController {
    pub fn new(observer: Box<dyn SearchObserver>) -> Self {
        Self {
            session: None,
            observer,
        }
    }

    pub fn session(&self) -> Option<&SearchSession> {
        self.session.as_ref()
    }

    pub fn reset(&mut self) {
        self.session = None;
    }

    /// Case-sensitive search from the selection, retrying once from the
    /// buffer start (forward) or end (backward). Selects the match.
    pub fn quick_search(&mut self, doc: &mut Document, query: &str, forward: bool) -> SearchOutcome {
        let outcome = Self::locate_wrapping(doc, query, forward);
        if let SearchOutcome::Found { range, wrapped } = &outcome {
            tracing::debug!(query, ?range, wrapped, "Quick search hit");
            doc.select(range.clone());
        } else {
            tracing::debug!(query, "Quick search miss");
        }
        self.observer
            .search_finished(SearchEvent::QuickSearch { query, outcome: &outcome });
        outcome
    }

    fn locate_wrapping(doc: &Document, query: &str, forward: bool) -> SearchOutcome {
        let selection = doc.selection();
        let len = doc.len_chars();
        let qlen = char_len(query);

        let first = if forward {
            doc.find(selection.end()..len, query, true)
        } else {
            doc.rfind(0..selection.start(), query, true)
        };
        if let Some(start) = first {
            return SearchOutcome::Found {
                range: start..start + qlen,
                wrapped: false,
            };
        }

        let retry = if forward {
            doc.find(0..len, query, true)
        } else {
            doc.rfind(0..len, query, true)
        };
        match retry {
            Some(start) => SearchOutcome::Found {
                range: start..start + qlen,
                wrapped: true,
            },
            None => SearchOutcome::NotFound,
        }
    }

    /// Find/replace within [`default_window`]
    pub fn find_replace(
        &mut self,
        doc: &mut Document,
        op: FindOp,
        query: &str,
        replacement: Option<&str>,
        case_sensitive: bool,
    ) -> FindReplaceResult {
        let window = default_window(doc);
        self.find_replace_in(doc, op, query, replacement, case_sensitive, window)
    }

    /// Find/replace within an explicit window
    pub fn find_replace_in(
        &mut self,
        doc: &mut Document,
        op: FindOp,
        query: &str,
        replacement: Option<&str>,
        case_sensitive: bool,
        window: Range<usize>,
    ) -> FindReplaceResult {
        let len = doc.len_chars();
        let window = window.start.min(len)..window.end.min(len);
        let replacement = replacement.unwrap_or("");

        let result = match op {
            FindOp::Find => self.find(doc, query, case_sensitive, window),
            FindOp::FindNext => {
                let anchor = self
                    .session
                    .as_ref()
                    .map(SearchSession::anchor)
                    .unwrap_or(window);
                self.find(doc, query, case_sensitive, anchor)
            }
            FindOp::Replace => self.replace(doc, query, replacement, case_sensitive, window),
            FindOp::ReplaceAll => {
                self.replace_all(doc, query, replacement, case_sensitive, window)
            }
        };

        tracing::debug!(?op, query, ?result, "Find/replace");
        self.observer.search_finished(SearchEvent::FindReplace {
            op,
            query,
            result: &result,
        });
        result
    }

    fn find(
        &mut self,
        doc: &mut Document,
        query: &str,
        case_sensitive: bool,
        window: Range<usize>,
    ) -> FindReplaceResult {
        let Some(start) = doc.find(window.clone(), query, case_sensitive) else {
            return FindReplaceResult::NotFound;
        };
        let end = start + char_len(query);
        doc.select(start..end);
        self.set_anchor(end, window.end, query, case_sensitive);
        FindReplaceResult::Found(start..end)
    }

    fn replace(
        &mut self,
        doc: &mut Document,
        query: &str,
        replacement: &str,
        case_sensitive: bool,
        window: Range<usize>,
    ) -> FindReplaceResult {
        let Some(start) = doc.find(window.clone(), query, case_sensitive) else {
            return FindReplaceResult::NotFound;
        };
        let (qlen, rlen) = (char_len(query), char_len(replacement));
        doc.replace_range(start..start + qlen, replacement);
        let anchor_end = window.end + rlen - qlen;
        self.set_anchor(start + rlen, anchor_end, query, case_sensitive);
        FindReplaceResult::Replaced(start..start + rlen)
    }

    fn replace_all(
        &mut self,
        doc: &mut Document,
        query: &str,
        replacement: &str,
        case_sensitive: bool,
        window: Range<usize>,
    ) -> FindReplaceResult {
        let (qlen, rlen) = (char_len(query), char_len(replacement));
        let (mut anchor_start, mut anchor_end) = (window.start, window.end);
        let mut count = 0;

        while let Some(start) = doc.find(anchor_start..anchor_end, query, case_sensitive) {
            doc.replace_range(start..start + qlen, replacement);
            anchor_start = start + rlen;
            anchor_end = anchor_end + rlen - qlen;
            count += 1;
        }

        self.set_anchor(anchor_start, anchor_end, query, case_sensitive);
        if count == 0 {
            FindReplaceResult::NotFound
        } else {
            FindReplaceResult::ReplacedAll(count)
        }
    }

    fn set_anchor(&mut self, start: usize, end: usize, query: &str, case_sensitive: bool) {
        self.session = Some(SearchSession {
            anchor_start: start,
            anchor_end: end.max(start),
            last_query: query.to_string(),
            case_sensitive,
        });
    }
}
