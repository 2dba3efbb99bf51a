//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.

use serde::Serialize;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cmd {
    /// Request a redraw
    Redraw,
    /// Tab was not claimed by anything; the host inserts its usual indent
    InsertIndent,
    /// Show a completion list for the word before the caret
    ShowCompletions {
        prefix: String,
        candidates: Vec<String>,
    },
    /// Show the signature of a callable
    ShowCallTip { callable: String, text: String },
    /// Ask the user for a marker comment; the answer comes back as
    /// `MarkerMsg::SetComment`
    PromptMarkerComment { line: usize, current: String },
    /// Scroll `line` into view
    RevealLine { line: usize },
}
