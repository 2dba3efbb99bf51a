//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. After every
//! message the structural edits it caused are applied to the marker registry
//! and the tab-stop session is checked against the new caret line, so both
//! stay consistent with the buffer within the same action.

mod app;
mod document;
mod editor;
mod marker;
mod search;
mod tab;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::tracing::StateSnapshot;
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::update_document;
pub use editor::update_editor;
pub use marker::update_marker;
pub use search::update_search;
pub use tab::{resolve_tab, TabAction};

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = StateSnapshot::from_model(model);
    let result = update_inner(model, msg);

    let after = StateSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "state", %diff, "state changed");
    }
    result
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Marker(m) => marker::update_marker(model, m),
        Msg::Search(m) => search::update_search(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    model.sync_line_edits();
    model.check_session_bounds();
    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Editor::Tab`
/// - `Marker::Navigate { forward: true }`
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Marker(m) => format!("Marker::{:?}", m),
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::App(_) => "App".to_string(),
    }
}
