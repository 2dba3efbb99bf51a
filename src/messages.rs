//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::Deserialize;
use std::sync::Arc;

use crate::search::FindOp;
use crate::template::Keystroke;
use crate::vocabulary::Vocabulary;

/// Editor-specific messages (caret, Tab, dismiss)
#[derive(Debug, Clone)]
pub enum EditorMsg {
    /// Tab key: session navigation, completion, templates or plain indent
    Tab,
    /// Escape: end the current tab-stop session
    Dismiss,
    /// Collapse the selection at a char offset
    SetCaret(usize),
    /// Set cursor to specific position (from mouse click)
    SetCursorPosition { line: usize, column: usize },
    /// Select from `anchor` to `head`
    SetSelection { anchor: usize, head: usize },
    /// Host-driven caret notification when the host owns the caret
    CaretMoved { line: usize },
    /// Signature of the callable under the caret
    ShowCallTip,
}

/// Document messages (text editing)
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Type text over the selection
    InsertText(String),
    /// Backspace
    DeleteBackward,
    /// Insert a stored snippet at the caret
    InsertSnippet { category: String, name: String },
    /// Keystroke that may be bound to a snippet
    SnippetShortcut(Keystroke),
}

/// Modifier held while clicking the marker margin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginModifier {
    #[default]
    None,
    /// Edit the comment of an existing marker
    Shift,
    /// Remove the marker (Ctrl, or Alt on macOS)
    Delete,
}

/// Line marker messages
#[derive(Debug, Clone)]
pub enum MarkerMsg {
    MarginClick { line: usize, modifier: MarginModifier },
    /// Add a marker on the caret line
    AddAtCaret,
    /// Remove the marker on the caret line
    RemoveAtCaret,
    /// Answer to `Cmd::PromptMarkerComment`
    SetComment { line: usize, text: String },
    Navigate { forward: bool },
    ClearAll,
}

/// Search messages
#[derive(Debug, Clone)]
pub enum SearchMsg {
    QuickSearch { query: String, forward: bool },
    /// Quick search for the word under the caret
    QuickSearchWord { forward: bool },
    Find {
        op: FindOp,
        query: String,
        replacement: Option<String>,
        case_sensitive: bool,
    },
}

/// App messages (document lifecycle, configuration)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Document reloaded from disk with new content
    ReloadDocument(String),
    /// Document closed; an empty buffer takes its place
    CloseDocument,
    /// Swap the completion vocabulary
    SetVocabulary(Arc<Vocabulary>),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Editor messages (caret, Tab)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// Line marker messages
    Marker(MarkerMsg),
    /// Search messages
    Search(SearchMsg),
    /// App messages (document lifecycle)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn tab() -> Self {
        Msg::Editor(EditorMsg::Tab)
    }

    pub fn insert_text(text: &str) -> Self {
        Msg::Document(DocumentMsg::InsertText(text.to_string()))
    }

    pub fn margin_click(line: usize, modifier: MarginModifier) -> Self {
        Msg::Marker(MarkerMsg::MarginClick { line, modifier })
    }

    pub fn find(op: FindOp, query: &str, replacement: Option<&str>) -> Self {
        Msg::Search(SearchMsg::Find {
            op,
            query: query.to_string(),
            replacement: replacement.map(str::to_string),
            case_sensitive: true,
        })
    }
}
