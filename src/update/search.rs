//! Search update handlers

use crate::commands::Cmd;
use crate::messages::SearchMsg;
use crate::model::AppModel;
use crate::search::{FindReplaceResult, SearchOutcome};

/// Handle search messages
pub fn update_search(model: &mut AppModel, msg: SearchMsg) -> Option<Cmd> {
    match msg {
        SearchMsg::QuickSearch { query, forward } => quick_search(model, &query, forward),

        SearchMsg::QuickSearchWord { forward } => {
            let word = model.document.word_at_caret();
            if word.is_empty() {
                return None;
            }
            quick_search(model, &word, forward)
        }

        SearchMsg::Find {
            op,
            query,
            replacement,
            case_sensitive,
        } => {
            let result = model.search.find_replace(
                &mut model.document,
                op,
                &query,
                replacement.as_deref(),
                case_sensitive,
            );
            match result {
                FindReplaceResult::Found(range) | FindReplaceResult::Replaced(range) => {
                    Some(Cmd::RevealLine {
                        line: model.document.line_at(range.start),
                    })
                }
                FindReplaceResult::ReplacedAll(_) => Some(Cmd::Redraw),
                FindReplaceResult::NotFound => None,
            }
        }
    }
}

fn quick_search(model: &mut AppModel, query: &str, forward: bool) -> Option<Cmd> {
    match model.search.quick_search(&mut model.document, query, forward) {
        SearchOutcome::Found { range, .. } => Some(Cmd::RevealLine {
            line: model.document.line_at(range.start),
        }),
        SearchOutcome::NotFound => None,
    }
}
