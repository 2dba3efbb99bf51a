//! Line marker update handlers

use crate::commands::Cmd;
use crate::messages::{MarginModifier, MarkerMsg};
use crate::model::AppModel;

/// Handle marker messages
pub fn update_marker(model: &mut AppModel, msg: MarkerMsg) -> Option<Cmd> {
    match msg {
        MarkerMsg::MarginClick { line, modifier } => match modifier {
            MarginModifier::Delete => {
                model.markers.remove(line);
                Some(Cmd::Redraw)
            }
            MarginModifier::Shift => prompt_comment(model, line),
            MarginModifier::None => {
                if model.markers.add(line) {
                    prompt_comment(model, line)
                } else {
                    None
                }
            }
        },

        MarkerMsg::AddAtCaret => {
            let line = model.document.caret_line();
            model.markers.add(line);
            prompt_comment(model, line)
        }

        MarkerMsg::RemoveAtCaret => {
            let line = model.document.caret_line();
            model.markers.remove(line);
            Some(Cmd::Redraw)
        }

        MarkerMsg::SetComment { line, text } => {
            model.markers.set_comment(line, &text);
            Some(Cmd::Redraw)
        }

        MarkerMsg::Navigate { forward } => {
            let line = model.markers.navigate(forward)?;
            let offset = model.document.offset_of_line(line);
            model.document.set_caret(offset);
            Some(Cmd::RevealLine { line })
        }

        MarkerMsg::ClearAll => {
            model.markers.clear();
            Some(Cmd::Redraw)
        }
    }
}

/// Ask the host for a comment on an existing marker
fn prompt_comment(model: &AppModel, line: usize) -> Option<Cmd> {
    let current = model.markers.comment(line)?.to_string();
    Some(Cmd::PromptMarkerComment { line, current })
}
