//! App update handlers: document lifecycle and vocabulary swaps

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Document};

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::ReloadDocument(text) => {
            let file_path = model.document.file_path.take();
            let mut document = Document::with_text(&text);
            document.file_path = file_path;
            model.replace_document(document);
            Some(Cmd::Redraw)
        }

        AppMsg::CloseDocument => {
            model.replace_document(Document::new());
            Some(Cmd::Redraw)
        }

        AppMsg::SetVocabulary(vocabulary) => {
            model.set_vocabulary(vocabulary);
            None
        }
    }
}
