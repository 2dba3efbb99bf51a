//! Editor update handlers: caret, Tab, dismiss, call tips

use crate::commands::Cmd;
use crate::editable::{Selection, TextBuffer};
use crate::messages::EditorMsg;
use crate::model::AppModel;
use crate::tabstop::SignatureLookup;

use super::tab::handle_tab;

/// Handle editor messages
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::Tab => handle_tab(model),

        EditorMsg::Dismiss => {
            model.cancel_session();
            Some(Cmd::Redraw)
        }

        EditorMsg::SetCaret(offset) => {
            model.document.set_caret(offset);
            Some(Cmd::Redraw)
        }

        EditorMsg::SetCursorPosition { line, column } => {
            let offset = model.document.buffer.position_to_offset(line, column);
            model.document.set_caret(offset);
            Some(Cmd::Redraw)
        }

        EditorMsg::SetSelection { anchor, head } => {
            model.document.set_selection(Selection::new(anchor, head));
            Some(Cmd::Redraw)
        }

        EditorMsg::CaretMoved { line } => {
            if let Some(session) = model.session.as_mut() {
                session.on_caret_moved(line);
            }
            None
        }

        EditorMsg::ShowCallTip => {
            let callable = model.document.word_at_caret();
            let text = model.vocabulary().call_tip(&callable)?;
            Some(Cmd::ShowCallTip { callable, text })
        }
    }
}
