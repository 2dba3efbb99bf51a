//! Document update handlers: typing and snippet insertion

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;
use crate::tabstop::SessionKind;
use crate::template::Template;

/// Handle document messages
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertText(text) => {
            model.document.type_text(&text);
            Some(Cmd::Redraw)
        }

        DocumentMsg::DeleteBackward => {
            model.document.delete_backward();
            Some(Cmd::Redraw)
        }

        DocumentMsg::InsertSnippet { category, name } => {
            let Some(parsed) = model.catalog.snippet(&category, &name) else {
                tracing::warn!("Unknown snippet {}/{}", category, name);
                return None;
            };
            insert_snippet(model, &category, &name, parsed)
        }

        DocumentMsg::SnippetShortcut(keystroke) => {
            let snippet = model.catalog.snippet_for_shortcut(&keystroke)?;
            let (category, name) = (snippet.category.clone(), snippet.name.clone());
            let parsed = Template::parse(&snippet.value);
            insert_snippet(model, &category, &name, parsed)
        }
    }
}

/// Snippets keep their own indentation: continuation lines are not re-indented
fn insert_snippet(
    model: &mut AppModel,
    category: &str,
    name: &str,
    parsed: Result<Template, crate::template::TemplateError>,
) -> Option<Cmd> {
    match parsed {
        Ok(template) => {
            tracing::debug!("Inserting snippet {}/{}", category, name);
            model.start_session(&template, 0, SessionKind::Template);
            Some(Cmd::Redraw)
        }
        Err(e) => {
            tracing::warn!("Snippet {}/{} rejected: {}", category, name, e);
            None
        }
    }
}
