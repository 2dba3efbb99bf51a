//! Command-line interface for the headless host
//!
//! Supports:
//! - Opening a file (or an empty buffer)
//! - Replaying a YAML script of editor events through `update()`
//! - Printing the final buffer, or a JSON state dump

use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

use crate::messages::{DocumentMsg, EditorMsg, MarginModifier, MarkerMsg, Msg, SearchMsg};
use crate::search::FindOp;

/// Snippet expansion and tab-stop navigation, driven from a script
#[derive(Parser, Debug)]
#[command(name = "tabstop", version, about = "Replay editor events against a file")]
pub struct CliArgs {
    /// File to open (empty buffer when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// YAML list of events to replay
    #[arg(short, long, value_name = "EVENTS")]
    pub script: Option<PathBuf>,

    /// Print a JSON state dump instead of the buffer text
    #[arg(long)]
    pub json: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

fn yes() -> bool {
    true
}

/// One scripted editor event
///
/// ```yaml
/// - op: caret
///   line: 0
///   column: 3
/// - op: tab
/// - op: type
///   text: "4"
/// - op: find
///   action: REPLACE_ALL
///   query: foo
///   replacement: bar
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptEvent {
    Tab,
    Type {
        text: String,
    },
    Backspace,
    Caret {
        line: usize,
        #[serde(default)]
        column: usize,
    },
    Select {
        anchor: usize,
        head: usize,
    },
    Dismiss,
    MarginClick {
        line: usize,
        #[serde(default)]
        modifier: MarginModifier,
    },
    MarkerComment {
        line: usize,
        text: String,
    },
    NavigateMarkers {
        #[serde(default = "yes")]
        forward: bool,
    },
    ClearMarkers,
    QuickSearch {
        /// Word under the caret when omitted
        #[serde(default)]
        query: Option<String>,
        #[serde(default = "yes")]
        forward: bool,
    },
    Find {
        action: FindOp,
        query: String,
        #[serde(default)]
        replacement: Option<String>,
        #[serde(default = "yes")]
        case_sensitive: bool,
    },
    Snippet {
        category: String,
        name: String,
    },
    CallTip,
}

impl ScriptEvent {
    /// Parse a YAML event list
    pub fn parse_script(content: &str) -> Result<Vec<ScriptEvent>, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn into_msg(self) -> Msg {
        match self {
            ScriptEvent::Tab => Msg::Editor(EditorMsg::Tab),
            ScriptEvent::Type { text } => Msg::Document(DocumentMsg::InsertText(text)),
            ScriptEvent::Backspace => Msg::Document(DocumentMsg::DeleteBackward),
            ScriptEvent::Caret { line, column } => {
                Msg::Editor(EditorMsg::SetCursorPosition { line, column })
            }
            ScriptEvent::Select { anchor, head } => {
                Msg::Editor(EditorMsg::SetSelection { anchor, head })
            }
            ScriptEvent::Dismiss => Msg::Editor(EditorMsg::Dismiss),
            ScriptEvent::MarginClick { line, modifier } => {
                Msg::Marker(MarkerMsg::MarginClick { line, modifier })
            }
            ScriptEvent::MarkerComment { line, text } => {
                Msg::Marker(MarkerMsg::SetComment { line, text })
            }
            ScriptEvent::NavigateMarkers { forward } => {
                Msg::Marker(MarkerMsg::Navigate { forward })
            }
            ScriptEvent::ClearMarkers => Msg::Marker(MarkerMsg::ClearAll),
            ScriptEvent::QuickSearch { query, forward } => match query {
                Some(query) => Msg::Search(SearchMsg::QuickSearch { query, forward }),
                None => Msg::Search(SearchMsg::QuickSearchWord { forward }),
            },
            ScriptEvent::Find {
                action,
                query,
                replacement,
                case_sensitive,
            } => Msg::Search(SearchMsg::Find {
                op: action,
                query,
                replacement,
                case_sensitive,
            }),
            ScriptEvent::Snippet { category, name } => {
                Msg::Document(DocumentMsg::InsertSnippet { category, name })
            }
            ScriptEvent::CallTip => Msg::Editor(EditorMsg::ShowCallTip),
        }
    }
}
